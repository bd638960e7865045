mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, ServerConfig, StoreDefaults, UploadConfig,
};

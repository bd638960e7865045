pub mod product_queries;
pub mod settings_queries;
pub mod user_queries;

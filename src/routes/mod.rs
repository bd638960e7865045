mod admin;
mod health;
mod login;
mod products;
mod settings;
mod upload;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::{middleware::auth_middleware, AppState};

pub fn create_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/products", post(admin::create_product))
        .route(
            "/products/:id",
            put(admin::update_product).delete(admin::delete_product),
        )
        .route("/upload", post(upload::upload_image))
        .route("/settings", put(settings::update_settings))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/auth/login", post(login::login_user))
        .route("/products", get(products::list_products))
        .route("/products/search", get(products::search_products))
        .route("/products/:id", get(products::get_product))
        .route("/products/:id/related", get(products::related_products))
        .route("/settings", get(settings::get_settings))
        .merge(protected)
        .nest_service("/uploads", ServeDir::new(&state.uploads.dir))
}

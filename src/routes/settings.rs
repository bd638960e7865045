use axum::{extract::State, Json};

use crate::{
    error::Result,
    models::{Settings, UpdateSettingsRequest},
    queries::settings_queries,
    AppState,
};

pub async fn get_settings(State(state): State<AppState>) -> Result<Json<Settings>> {
    let settings = settings_queries::get(&state.db).await?;

    Ok(Json(settings))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<Settings>> {
    let settings = settings_queries::update(&state.db, &payload).await?;

    Ok(Json(settings))
}

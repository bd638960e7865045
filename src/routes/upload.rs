use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{error::Result, services::image_service, AppState};

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

pub async fn upload_image(
    State(state): State<AppState>,
    Json(payload): Json<UploadRequest>,
) -> Result<Json<UploadResponse>> {
    let url = image_service::store(&payload.image, &state.uploads.dir).await?;

    Ok(Json(UploadResponse { url }))
}

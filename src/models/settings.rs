use serde::{Deserialize, Serialize};

/// Store-wide singleton configuration. Exactly one row exists after
/// initialization; it is only ever updated.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub hero_image: String,
    pub whatsapp_number: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub hero_image: Option<String>,
    pub whatsapp_number: Option<String>,
}

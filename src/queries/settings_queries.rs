use sqlx::SqlitePool;

use crate::{
    error::Result,
    models::{Settings, UpdateSettingsRequest},
};

pub async fn get(pool: &SqlitePool) -> Result<Settings> {
    let settings = sqlx::query_as::<_, Settings>(
        "SELECT hero_image, whatsapp_number FROM settings WHERE id = 1",
    )
    .fetch_one(pool)
    .await?;

    Ok(settings)
}

/// Partial update of the singleton row; absent fields are left untouched.
pub async fn update(pool: &SqlitePool, payload: &UpdateSettingsRequest) -> Result<Settings> {
    if let Some(ref hero_image) = payload.hero_image {
        sqlx::query("UPDATE settings SET hero_image = $1 WHERE id = 1")
            .bind(hero_image)
            .execute(pool)
            .await?;
    }

    if let Some(ref whatsapp_number) = payload.whatsapp_number {
        sqlx::query("UPDATE settings SET whatsapp_number = $1 WHERE id = 1")
            .bind(whatsapp_number)
            .execute(pool)
            .await?;
    }

    get(pool).await
}

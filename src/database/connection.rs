use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::{
    config::{AuthConfig, DatabaseConfig, StoreDefaults},
    error::{AppError, Result},
};

pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    tracing::info!(
        "Database connection established with {} max connections",
        config.max_connections
    );

    Ok(pool)
}

/// Idempotent first-run seeding: the single admin credential (stored as a
/// bcrypt hash, never plaintext) and the singleton settings row.
pub async fn seed(pool: &SqlitePool, auth: &AuthConfig, store: &StoreDefaults) -> Result<()> {
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    if users == 0 {
        let password_hash = bcrypt::hash(&auth.admin_password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

        sqlx::query("INSERT INTO users (email, password) VALUES ($1, $2)")
            .bind(&auth.admin_email)
            .bind(&password_hash)
            .execute(pool)
            .await?;

        tracing::info!("Admin user {} created", auth.admin_email);
    }

    sqlx::query(
        "INSERT OR IGNORE INTO settings (id, hero_image, whatsapp_number) VALUES (1, $1, $2)",
    )
    .bind(&store.hero_image)
    .bind(&store.whatsapp_number)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn check_health(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

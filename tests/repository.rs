use std::time::Duration;

use kickvault_back::{
    config::{AuthConfig, StoreDefaults},
    database,
    error::AppError,
    models::{ProductRequest, UpdateSettingsRequest},
    queries::{product_queries, settings_queries, user_queries},
    utils::jwt,
};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

// A single connection keeps every query on the same in-memory database.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret".to_string(),
        admin_email: "admin@example.com".to_string(),
        admin_password: "hunter2".to_string(),
    }
}

fn store_defaults() -> StoreDefaults {
    StoreDefaults {
        hero_image: "https://example.com/hero.jpg".to_string(),
        whatsapp_number: "911234567890".to_string(),
    }
}

fn request(name: &str, images: &[&str]) -> ProductRequest {
    ProductRequest {
        name: name.to_string(),
        brand: "Nike".to_string(),
        original_price: 120.0,
        offer_price: 99.0,
        description: "A shoe".to_string(),
        images: images.iter().map(|s| s.to_string()).collect(),
        is_featured: false,
        quality: "9A".to_string(),
        category: "Running".to_string(),
    }
}

#[tokio::test]
async fn images_round_trip_in_order() {
    let pool = test_pool().await;
    let images = ["/uploads/b.png", "/uploads/a.png", "/uploads/c.png"];

    let created = product_queries::create(&pool, &request("Dunk Low", &images))
        .await
        .unwrap();
    assert_eq!(created.images, images);

    let listed = product_queries::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].images, images);

    let fetched = product_queries::find_by_id(&pool, &created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.images, images);
}

#[tokio::test]
async fn list_returns_newest_first() {
    let pool = test_pool().await;

    let mut ids = Vec::new();
    for name in ["first", "second", "third"] {
        let product = product_queries::create(&pool, &request(name, &["/uploads/x.png"]))
            .await
            .unwrap();
        ids.push(product.id);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let listed = product_queries::list(&pool).await.unwrap();
    let listed_ids: Vec<&str> = listed.iter().map(|p| p.id.as_str()).collect();
    let expected: Vec<&str> = ids.iter().rev().map(|s| s.as_str()).collect();
    assert_eq!(listed_ids, expected);
}

#[tokio::test]
async fn update_replaces_fields_but_not_identity() {
    let pool = test_pool().await;

    let created = product_queries::create(&pool, &request("Dunk Low", &["/uploads/x.png"]))
        .await
        .unwrap();

    let mut payload = request("Dunk Low Panda", &["/uploads/y.png", "/uploads/z.png"]);
    payload.offer_price = 79.0;

    let updated = product_queries::update(&pool, &created.id, &payload)
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "Dunk Low Panda");
    assert_eq!(updated.offer_price, 79.0);
    assert_eq!(updated.images, ["/uploads/y.png", "/uploads/z.png"]);
}

#[tokio::test]
async fn update_of_missing_id_is_not_found() {
    let pool = test_pool().await;

    let err = product_queries::update(&pool, "no-such-id", &request("x", &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn second_delete_of_same_id_is_not_found() {
    let pool = test_pool().await;

    let created = product_queries::create(&pool, &request("Dunk Low", &["/uploads/x.png"]))
        .await
        .unwrap();

    product_queries::delete(&pool, &created.id).await.unwrap();

    let err = product_queries::delete(&pool, &created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn settings_seed_then_partial_update() {
    let pool = test_pool().await;
    database::seed(&pool, &auth_config(), &store_defaults())
        .await
        .unwrap();

    let settings = settings_queries::get(&pool).await.unwrap();
    assert_eq!(settings.hero_image, "https://example.com/hero.jpg");
    assert_eq!(settings.whatsapp_number, "911234567890");

    let updated = settings_queries::update(
        &pool,
        &UpdateSettingsRequest {
            hero_image: None,
            whatsapp_number: Some("919999999999".to_string()),
        },
    )
    .await
    .unwrap();

    // untouched field survives a partial update
    assert_eq!(updated.hero_image, "https://example.com/hero.jpg");
    assert_eq!(updated.whatsapp_number, "919999999999");
}

#[tokio::test]
async fn seed_is_idempotent() {
    let pool = test_pool().await;
    let auth = auth_config();

    database::seed(&pool, &auth, &store_defaults()).await.unwrap();
    database::seed(&pool, &auth, &store_defaults()).await.unwrap();

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 1);
}

#[tokio::test]
async fn seeded_credential_verifies_and_issues_token() {
    let pool = test_pool().await;
    let auth = auth_config();
    database::seed(&pool, &auth, &store_defaults()).await.unwrap();

    let user = user_queries::find_by_email(&pool, &auth.admin_email)
        .await
        .unwrap()
        .expect("seeded admin missing");

    // stored as a hash, never the raw password
    assert_ne!(user.password, auth.admin_password);
    assert!(bcrypt::verify(&auth.admin_password, &user.password).unwrap());
    assert!(!bcrypt::verify("wrong-password", &user.password).unwrap());

    let token = jwt::generate_token(&user.email, &auth.jwt_secret).unwrap();
    let claims = jwt::verify_token(&token, &auth.jwt_secret).unwrap();
    assert_eq!(claims.sub, auth.admin_email);
}

#[tokio::test]
async fn unknown_email_yields_no_user() {
    let pool = test_pool().await;
    database::seed(&pool, &auth_config(), &store_defaults())
        .await
        .unwrap();

    let user = user_queries::find_by_email(&pool, "nobody@example.com")
        .await
        .unwrap();
    assert!(user.is_none());
}

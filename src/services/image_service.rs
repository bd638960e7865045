use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Hard cap on a decoded image payload. The transport layer already
/// limits request bodies to 10 MiB; this bounds what reaches disk even
/// if that limit changes.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Decodes a `data:image/<subtype>;base64,<payload>` URI and writes it
/// under `dir` with a random filename. Returns the public URL path.
/// No deduplication and no content hashing; every call produces a new
/// file.
pub async fn store(data_uri: &str, dir: &str) -> Result<String> {
    let (extension, payload) = parse_data_uri(data_uri)?;

    let bytes = STANDARD
        .decode(payload)
        .map_err(|_| AppError::BadRequest("Invalid base64 payload".to_string()))?;

    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(AppError::BadRequest("Image exceeds maximum size".to_string()));
    }

    let filename = format!("{}.{}", Uuid::new_v4(), extension);
    let filepath = Path::new(dir).join(&filename);

    tokio::fs::write(&filepath, &bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write image: {}", e)))?;

    Ok(format!("/uploads/{}", filename))
}

/// Splits the data URI into (file extension, base64 payload). `jpeg`
/// normalizes to `jpg`.
fn parse_data_uri(input: &str) -> Result<(String, &str)> {
    let rest = input
        .strip_prefix("data:image/")
        .ok_or_else(|| AppError::BadRequest("Invalid image data".to_string()))?;

    let (subtype, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| AppError::BadRequest("Invalid image format".to_string()))?;

    let valid_subtype = !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if !valid_subtype {
        return Err(AppError::BadRequest("Invalid image format".to_string()));
    }

    let extension = if subtype == "jpeg" {
        "jpg".to_string()
    } else {
        subtype.to_string()
    };

    Ok((extension, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG
    const PNG_PAYLOAD: &str =
        "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[tokio::test]
    async fn stores_valid_data_uri_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let uri = format!("data:image/png;base64,{}", PNG_PAYLOAD);

        let url = store(&uri, dir.path().to_str().unwrap()).await.unwrap();
        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".png"));

        let filename = url.strip_prefix("/uploads/").unwrap();
        assert!(dir.path().join(filename).exists());
    }

    #[tokio::test]
    async fn jpeg_extension_normalizes_to_jpg() {
        let dir = tempfile::tempdir().unwrap();
        let uri = format!("data:image/jpeg;base64,{}", PNG_PAYLOAD);

        let url = store(&uri, dir.path().to_str().unwrap()).await.unwrap();
        assert!(url.ends_with(".jpg"));
    }

    #[tokio::test]
    async fn non_image_uri_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let err = store("data:text/plain;base64,aGVsbG8=", dir.path().to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn missing_base64_marker_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let err = store("data:image/png,rawbytes", dir.path().to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn invalid_base64_payload_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let err = store("data:image/png;base64,!!!not-base64!!!", dir.path().to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn subtype_with_path_characters_is_rejected() {
        let err = parse_data_uri("data:image/../../etc;base64,aGVsbG8=").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}

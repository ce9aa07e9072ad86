use std::path::PathBuf;

use tokio::fs;
use uuid::Uuid;

use crate::core::config::MediaConfig;
use crate::core::error::{AppError, Result};

/// Local-disk media store for validated pet images.
///
/// Keys are relative paths like `pet_images/<uuid>.<ext>`; the public URL
/// recorded on a pet is `<base_url>/<key>`. Serving the files (CDN, reverse
/// proxy) is outside this service.
pub struct MediaStore {
    root: PathBuf,
    public_base_url: String,
}

impl MediaStore {
    pub fn new(config: MediaConfig) -> Self {
        Self {
            root: config.root,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create the media root (and the pet image prefix) if missing.
    pub async fn ensure_root_exists(&self) -> Result<()> {
        fs::create_dir_all(self.root.join("pet_images"))
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create media root: {}", e)))
    }

    /// Generate a unique storage key for a pet image with the given extension.
    pub fn generate_key(&self, extension: &str) -> String {
        format!("pet_images/{}.{}", Uuid::new_v4(), extension)
    }

    /// Write image bytes under the given key.
    pub async fn save(&self, key: &str, data: Vec<u8>) -> Result<()> {
        let path = self.root.join(key);
        fs::write(&path, data)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store image {}: {}", key, e)))
    }

    /// Public URL for a stored key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MediaStore {
        MediaStore::new(MediaConfig {
            root: PathBuf::from("/tmp/petrescue-media"),
            public_base_url: "/media/".to_string(),
        })
    }

    #[test]
    fn test_generate_key_uses_extension() {
        let key = store().generate_key("png");
        assert!(key.starts_with("pet_images/"));
        assert!(key.ends_with(".png"));
    }

    #[test]
    fn test_public_url_strips_trailing_slash() {
        let url = store().public_url("pet_images/x.jpg");
        assert_eq!(url, "/media/pet_images/x.jpg");
    }
}

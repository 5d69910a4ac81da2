//! Local media storage for uploaded images

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{
    config::UploadConfig,
    error::{AppError, AppResult},
};

#[derive(Clone)]
pub struct FileStorage {
    media_dir: PathBuf,
    public_url: String,
}

/// Lowercased alphanumeric extension of `name`, if any
fn extension(name: &str) -> Option<String> {
    let ext = Path::new(name).extension()?.to_str()?;
    if ext.is_empty() || ext.len() > 10 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

impl FileStorage {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            media_dir: PathBuf::from(&config.media_dir),
            public_url: config.public_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    /// Write `data` under a fresh name and return its public URL
    pub async fn save(&self, original_name: Option<&str>, data: &[u8]) -> AppResult<String> {
        if data.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        let mut name = Uuid::new_v4().to_string();
        if let Some(ext) = original_name.and_then(extension) {
            name.push('.');
            name.push_str(&ext);
        }

        tokio::fs::create_dir_all(&self.media_dir)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create media directory: {}", e)))?;
        tokio::fs::write(self.media_dir.join(&name), data)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to write {}: {}", name, e)))?;

        tracing::info!(file = %name, size = data.len(), "file stored");
        Ok(format!("{}/{}", self.public_url, name))
    }
}

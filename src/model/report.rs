//! The finished report and its filename.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

const FILENAME_PREFIX: &str = "Portrait-Predictif";
const MAX_NAME_LEN: usize = 20;

/// A rendered report ready to be stored or sent.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedReport {
    /// Suggested filename
    pub filename: String,

    /// Document bytes
    #[serde(skip)]
    pub data: Vec<u8>,

    /// Size of `data` in bytes
    pub size: usize,

    /// Number of pages
    pub page_count: u32,

    /// Whether segmentation was rejected and the body rendered as one block
    pub single_block: bool,

    /// Generation timestamp
    pub created_at: DateTime<Utc>,
}

impl GeneratedReport {
    /// Create a report from rendered bytes.
    pub fn new(
        filename: String,
        data: Vec<u8>,
        page_count: u32,
        single_block: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        let size = data.len();
        Self {
            filename,
            data,
            size,
            page_count,
            single_block,
            created_at,
        }
    }

    /// Write the report into `dir` under its filename.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.data)?;
        log::debug!("Saved {} ({} bytes)", path.display(), self.size);
        Ok(path)
    }

    /// Write the report into `dir` without blocking the runtime.
    #[cfg(feature = "async")]
    pub async fn save_async<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.filename);
        tokio::fs::write(&path, &self.data).await?;
        Ok(path)
    }
}

/// Keep only ASCII alphanumerics and truncate to 20 characters.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(MAX_NAME_LEN)
        .collect()
}

/// Build `Portrait-Predictif-<sanitized-name>-<epoch-millis>.<ext>`.
pub fn report_filename(name: &str, at: DateTime<Utc>, extension: &str) -> String {
    format!(
        "{}-{}-{}.{}",
        FILENAME_PREFIX,
        sanitize_name(name),
        at.timestamp_millis(),
        extension
    )
}

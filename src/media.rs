use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaFile {
    /// Full path on disk
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Capture date from EXIF, None if absent
    pub date: Option<NaiveDateTime>,
    /// Whether the metadata library recognized the file as an image
    pub is_image: bool,
}

impl MediaFile {
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self {
            path,
            size,
            date: None,
            is_image: false,
        }
    }

    /// Just the filename, for display
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string()
    }
}

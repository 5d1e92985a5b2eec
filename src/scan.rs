use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use walkdir::WalkDir;

use crate::date::{self, ExifDate};
use crate::media::MediaFile;

/// Which files a scan includes.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum IncludePolicy {
    /// Every file in the subtree
    #[default]
    All,
    /// Only files with one of these extensions (compared case-insensitively)
    Extensions(Vec<String>),
}

impl IncludePolicy {
    /// Build a policy from user-supplied extensions; empty means no filter.
    pub fn from_extensions(exts: Vec<String>) -> Self {
        if exts.is_empty() {
            Self::All
        } else {
            Self::Extensions(
                exts.into_iter()
                    .map(|e| e.trim_start_matches('.').to_lowercase())
                    .collect(),
            )
        }
    }

    fn includes(&self, path: &Path) -> bool {
        match self {
            Self::All => true,
            Self::Extensions(exts) => path
                .extension()
                .and_then(|e| e.to_str())
                .map_or(false, |e| {
                    let e = e.to_lowercase();
                    exts.iter().any(|want| *want == e)
                }),
        }
    }
}

/// Walk a folder subtree and build one record per included file.
///
/// Entries are visited in file-name order so repeated scans of an unchanged
/// tree yield identical results. Filesystem errors abort the scan.
pub fn scan_folder(root: &Path, policy: &IncludePolicy) -> anyhow::Result<Vec<MediaFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !policy.includes(entry.path()) {
            continue;
        }
        let size = entry.metadata()?.len();
        files.push(MediaFile::new(entry.path().to_path_buf(), size));
    }

    info!("Found {} files under {}", files.len(), root.display());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {pos}/{len} reading EXIF")
            .unwrap(),
    );

    // One open-read-close per file, in scan order
    for m in &mut files {
        pb.inc(1);
        match date::read_capture_date(&m.path)? {
            ExifDate::Found(dt) => {
                m.is_image = true;
                m.date = Some(dt);
            }
            ExifDate::Missing => m.is_image = true,
            ExifDate::NotAnImage => {}
        }
    }
    pb.finish_and_clear();

    Ok(files)
}

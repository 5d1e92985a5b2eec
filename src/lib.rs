pub mod album;
pub mod date;
pub mod media;
pub mod report;
pub mod scan;

use std::path::Path;

pub use album::MediaAlbum;
pub use media::MediaFile;
pub use scan::IncludePolicy;

/// Scan one folder subtree and aggregate it into an album.
pub fn summarize_folder(root: &Path, policy: &IncludePolicy) -> anyhow::Result<MediaAlbum> {
    let files = scan::scan_folder(root, policy)?;
    Ok(MediaAlbum::from_files(root.to_path_buf(), files))
}

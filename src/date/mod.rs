pub mod exif;

use chrono::NaiveDateTime;

pub use exif::read_capture_date;

/// Outcome of reading a file's embedded capture date.
#[derive(Debug, Clone, PartialEq)]
pub enum ExifDate {
    /// Valid image with a parseable DateTimeOriginal tag
    Found(NaiveDateTime),
    /// Valid image, but no usable capture date
    Missing,
    /// The metadata library could not parse the file as an image
    NotAnImage,
}

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;
use exif::{In, Reader, Tag};
use log::debug;

use super::ExifDate;

/// Read the original capture date embedded in an image file.
/// EXIF datetimes have no timezone info - they are local time as-is.
pub fn read_capture_date(path: &Path) -> anyhow::Result<ExifDate> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let meta = match Reader::new().read_from_container(&mut reader) {
        Ok(meta) => meta,
        // A truncated file cannot be an image either
        Err(exif::Error::Io(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            debug!("{}: truncated, treating as non-image", path.display());
            return Ok(ExifDate::NotAnImage);
        }
        // Other I/O failures are fatal; format errors mean "not an image"
        Err(exif::Error::Io(e)) => return Err(e.into()),
        Err(e) => {
            debug!("{}: not a parseable image ({})", path.display(), e);
            return Ok(ExifDate::NotAnImage);
        }
    };

    let Some(field) = meta.get_field(Tag::DateTimeOriginal, In::PRIMARY) else {
        return Ok(ExifDate::Missing);
    };

    match parse_exif_datetime(&field.display_value().to_string()) {
        Some(dt) => Ok(ExifDate::Found(dt)),
        None => Ok(ExifDate::Missing),
    }
}

/// Parse `YYYY:MM:DD HH:MM:SS`, tolerating the alternate separators the
/// display form of the tag uses.
fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    let cleaned = s.replace(['-', '/', '\\', '.'], ":");
    NaiveDateTime::parse_from_str(&cleaned, "%Y:%m:%d %H:%M:%S").ok()
}

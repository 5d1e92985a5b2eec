use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::media::MediaFile;

/// Aggregate summary of one scanned folder subtree.
///
/// `start_date` and `end_date` are either both present or both absent;
/// absent means no file in the subtree carried a valid capture date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaAlbum {
    /// Root folder the album was built from
    pub path: PathBuf,
    /// Earliest capture date among dated image files
    pub start_date: Option<NaiveDateTime>,
    /// Latest capture date among dated image files
    pub end_date: Option<NaiveDateTime>,
    /// Total size of all files in bytes
    pub size: u64,
    /// Every file in the subtree, whatever its kind
    pub files_count: u64,
    /// Images the metadata library parsed but found no capture date in
    pub photos_without_date: Vec<MediaFile>,
    /// Files the metadata library could not parse as images
    pub non_image_files: Vec<MediaFile>,
    /// Dated files seen after a file with a later capture date
    pub date_anomalies: Vec<MediaFile>,
}

impl MediaAlbum {
    /// Fold per-file records into one album. Records are consumed in scan
    /// order, which is what the anomaly check is relative to.
    pub fn from_files(path: PathBuf, files: Vec<MediaFile>) -> Self {
        let mut album = Self {
            path,
            start_date: None,
            end_date: None,
            size: 0,
            files_count: 0,
            photos_without_date: Vec::new(),
            non_image_files: Vec::new(),
            date_anomalies: Vec::new(),
        };

        for file in files {
            album.files_count += 1;
            album.size += file.size;

            if !file.is_image {
                album.non_image_files.push(file);
                continue;
            }
            let Some(date) = file.date else {
                album.photos_without_date.push(file);
                continue;
            };

            let out_of_order = album.end_date.map_or(false, |end| date < end);
            album.start_date = Some(album.start_date.map_or(date, |d| d.min(date)));
            album.end_date = Some(album.end_date.map_or(date, |d| d.max(date)));
            if out_of_order {
                album.date_anomalies.push(file);
            }
        }

        album
    }

    /// Dated image files: everything not in the exceptional lists.
    pub fn dated_count(&self) -> u64 {
        self.files_count
            - self.photos_without_date.len() as u64
            - self.non_image_files.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, mo: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn dated(name: &str, size: u64, date: NaiveDateTime) -> MediaFile {
        MediaFile {
            path: name.into(),
            size,
            date: Some(date),
            is_image: true,
        }
    }

    fn undated(name: &str, size: u64) -> MediaFile {
        MediaFile {
            path: name.into(),
            size,
            date: None,
            is_image: true,
        }
    }

    fn non_image(name: &str, size: u64) -> MediaFile {
        MediaFile {
            path: name.into(),
            size,
            date: None,
            is_image: false,
        }
    }

    #[test]
    fn empty_input_yields_empty_album() {
        let album = MediaAlbum::from_files("photos".into(), vec![]);
        assert_eq!(album.files_count, 0);
        assert_eq!(album.size, 0);
        assert_eq!(album.start_date, None);
        assert_eq!(album.end_date, None);
        assert!(album.photos_without_date.is_empty());
        assert!(album.non_image_files.is_empty());
        assert!(album.date_anomalies.is_empty());
    }

    #[test]
    fn counts_partition_across_all_kinds() {
        let album = MediaAlbum::from_files(
            "photos".into(),
            vec![
                dated("a.jpg", 100, ts(2020, 5, 1)),
                undated("b.jpg", 200),
                non_image("notes.txt", 50),
                dated("c.jpg", 300, ts(2020, 5, 2)),
            ],
        );
        assert_eq!(album.files_count, 4);
        assert_eq!(album.size, 650);
        assert_eq!(album.dated_count(), 2);
        assert_eq!(
            album.files_count,
            album.dated_count()
                + album.photos_without_date.len() as u64
                + album.non_image_files.len() as u64
        );
    }

    #[test]
    fn date_bounds_are_ordered() {
        let album = MediaAlbum::from_files(
            "photos".into(),
            vec![
                dated("a.jpg", 1, ts(2020, 6, 15)),
                dated("b.jpg", 1, ts(2020, 5, 1)),
                dated("c.jpg", 1, ts(2020, 6, 1)),
            ],
        );
        assert_eq!(album.start_date, Some(ts(2020, 5, 1)));
        assert_eq!(album.end_date, Some(ts(2020, 6, 15)));
        assert!(album.start_date <= album.end_date);
    }

    #[test]
    fn undated_and_non_image_files_leave_bounds_absent() {
        let album = MediaAlbum::from_files(
            "photos".into(),
            vec![undated("a.jpg", 10), non_image("b.txt", 20)],
        );
        assert_eq!(album.start_date, None);
        assert_eq!(album.end_date, None);
        assert_eq!(album.photos_without_date.len(), 1);
        assert_eq!(album.non_image_files.len(), 1);
    }

    #[test]
    fn single_dated_file_sets_both_bounds() {
        let album =
            MediaAlbum::from_files("photos".into(), vec![dated("a.jpg", 1, ts(2020, 5, 1))]);
        assert_eq!(album.start_date, album.end_date);
        assert_eq!(album.start_date, Some(ts(2020, 5, 1)));
    }

    #[test]
    fn out_of_order_date_is_an_anomaly() {
        let album = MediaAlbum::from_files(
            "photos".into(),
            vec![
                dated("a.jpg", 1, ts(2020, 5, 1)),
                dated("b.jpg", 1, ts(2019, 12, 31)),
                dated("c.jpg", 1, ts(2021, 1, 1)),
            ],
        );
        assert_eq!(album.date_anomalies.len(), 1);
        assert_eq!(album.date_anomalies[0].path, PathBuf::from("b.jpg"));
        // Anomalous files still widen the range
        assert_eq!(album.start_date, Some(ts(2019, 12, 31)));
        assert_eq!(album.end_date, Some(ts(2021, 1, 1)));
    }

    #[test]
    fn monotonic_dates_produce_no_anomalies() {
        let album = MediaAlbum::from_files(
            "photos".into(),
            vec![
                dated("a.jpg", 1, ts(2020, 5, 1)),
                dated("b.jpg", 1, ts(2020, 5, 1)),
                dated("c.jpg", 1, ts(2020, 5, 2)),
            ],
        );
        assert!(album.date_anomalies.is_empty());
    }
}

use std::io::{self, Write};

use humansize::{format_size, BINARY};

use crate::album::MediaAlbum;
use crate::media::MediaFile;

const DATE_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Print the album summary to stdout.
pub fn print_summary(album: &MediaAlbum) -> anyhow::Result<()> {
    let stdout = io::stdout();
    write_summary(&mut stdout.lock(), album)?;
    Ok(())
}

/// Render one album as human-readable text.
pub fn write_summary<W: Write>(w: &mut W, album: &MediaAlbum) -> io::Result<()> {
    writeln!(w, "Album: {}", album.path.display())?;
    writeln!(
        w,
        "  Files:      {} ({} dated images)",
        album.files_count,
        album.dated_count()
    )?;
    writeln!(w, "  Total size: {}", format_size(album.size, BINARY))?;
    match (album.start_date, album.end_date) {
        (Some(start), Some(end)) => writeln!(
            w,
            "  Date range: {} .. {}",
            start.format(DATE_FMT),
            end.format(DATE_FMT)
        )?,
        _ => writeln!(w, "  Date range: (no dated images)")?,
    }

    write_file_list(w, "Images without capture date", &album.photos_without_date, |_| None)?;
    write_file_list(w, "Non-image files", &album.non_image_files, |f| {
        mime_guess::from_path(&f.path).first().map(|m| m.to_string())
    })?;
    write_file_list(w, "Date anomalies", &album.date_anomalies, |f| {
        f.date.map(|d| d.format(DATE_FMT).to_string())
    })?;

    Ok(())
}

fn write_file_list<W: Write>(
    w: &mut W,
    label: &str,
    files: &[MediaFile],
    annotate: impl Fn(&MediaFile) -> Option<String>,
) -> io::Result<()> {
    if files.is_empty() {
        return Ok(());
    }
    writeln!(w, "  {} ({}):", label, files.len())?;
    for f in files {
        match annotate(f) {
            Some(note) => writeln!(w, "    {} ({})", f.filename(), note)?,
            None => writeln!(w, "    {}", f.filename())?,
        }
    }
    Ok(())
}

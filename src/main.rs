use std::path::PathBuf;

use clap::Parser;

use album_scan::{report, IncludePolicy};

#[derive(Parser)]
#[command(name = "album-scan", version, about = "Walk photo folders and summarize them by EXIF capture date")]
struct Cli {
    /// Folders to scan, one album per folder
    #[arg(required = true)]
    folders: Vec<PathBuf>,

    /// Only include files with this extension, e.g. --ext jpg (repeatable; default: all files)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Print album summaries as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let t_total = std::time::Instant::now();

    let policy = IncludePolicy::from_extensions(cli.extensions);
    let mut albums = Vec::with_capacity(cli.folders.len());

    for folder in &cli.folders {
        eprintln!("=== Scanning {} ===", folder.display());
        let t = std::time::Instant::now();
        let album = album_scan::summarize_folder(folder, &policy)?;
        eprintln!(
            "  {} files in {:.2}s",
            album.files_count,
            t.elapsed().as_secs_f64()
        );
        albums.push(album);
    }

    if cli.json {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &albums)?;
        println!();
    } else {
        for album in &albums {
            report::print_summary(album)?;
        }
    }

    eprintln!(
        "Done! {} folders in {:.2}s",
        albums.len(),
        t_total.elapsed().as_secs_f64()
    );
    Ok(())
}

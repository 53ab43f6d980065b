use std::path::PathBuf;

use anyhow::bail;
use walkdir::WalkDir;

use crate::date::{self, MetadataReader, VideoProber};
use crate::dest;
use crate::media::ExtensionMap;
use crate::place::{self, Mode, Outcome};

/// One run's settings, passed in whole so nothing lives in process-wide state.
pub struct Config {
    pub source: PathBuf,
    pub target: PathBuf,
    pub pattern: String,
    pub force: bool,
    pub mode: Mode,
    pub extensions: ExtensionMap,
}

/// Walk the source tree and place every recognized media file under
/// `target/<year>/<pattern>`. Per-file failures are logged to stderr and
/// skipped; the only fatal error is a missing source directory.
pub fn run(
    config: &Config,
    reader: &dyn MetadataReader,
    prober: &dyn VideoProber,
) -> anyhow::Result<()> {
    if !config.source.is_dir() {
        bail!("{} is not a directory", config.source.display());
    }

    for entry in WalkDir::new(&config.source) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                eprintln!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        let Some(kind) = extension.as_deref().and_then(|e| config.extensions.classify(e))
        else {
            eprintln!("Skipping {}: unknown file extension.", path.display());
            continue;
        };

        let Some(created_at) = date::extract(kind, path, reader, prober) else {
            eprintln!("Skipping {}: cannot extract creation date.", path.display());
            continue;
        };

        let dest_dir = dest::dest_dir(&config.target, &created_at, &config.pattern);
        match place::place(path, &dest_dir, config.force, config.mode) {
            Ok(Outcome::Placed) => {}
            Ok(Outcome::Skipped(reason)) => {
                eprintln!("Skipping {}: {}.", path.display(), reason);
            }
            Ok(Outcome::Overwritten) => {
                eprintln!(
                    "Overwrote {} with {}.",
                    dest_dir.join(entry.file_name()).display(),
                    path.display()
                );
            }
            Err(e) => {
                eprintln!("Skipping {}: {:#}.", path.display(), e);
            }
        }
    }

    Ok(())
}

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;

/// Transfer mode: copy leaves the source in place, move removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Copy files into the target tree
    Cp,
    /// Move files into the target tree
    Mv,
}

/// What happened to one file at its destination.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Placed,
    Skipped(String),
    Overwritten,
}

/// Place a source file into `dest_dir`, keeping its basename. Creates the
/// destination directory (and parents) if needed; tolerates it already
/// existing, including via another process.
pub fn place(source: &Path, dest_dir: &Path, force: bool, mode: Mode) -> anyhow::Result<Outcome> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("cannot create {}", dest_dir.display()))?;

    let name = source
        .file_name()
        .with_context(|| format!("{} has no file name", source.display()))?;
    let candidate = dest_dir.join(name);

    let existed = candidate.exists();
    if existed && !force {
        return Ok(Outcome::Skipped("destination already exists".to_string()));
    }

    match mode {
        Mode::Cp => copy_file(source, &candidate)?,
        Mode::Mv => move_file(source, &candidate)?,
    }

    Ok(if existed {
        Outcome::Overwritten
    } else {
        Outcome::Placed
    })
}

/// Copy, replacing any existing destination, and carry the source's
/// modification time over. A failed mtime update is not fatal.
fn copy_file(source: &Path, dest: &Path) -> anyhow::Result<()> {
    fs::copy(source, dest)
        .with_context(|| format!("cannot copy {} to {}", source.display(), dest.display()))?;

    if let Ok(metadata) = source.metadata() {
        let mtime = filetime::FileTime::from_last_modification_time(&metadata);
        filetime::set_file_mtime(dest, mtime).ok();
    }
    Ok(())
}

/// Rename where possible; fall back to copy-then-delete when the source
/// and destination live on different filesystems.
fn move_file(source: &Path, dest: &Path) -> anyhow::Result<()> {
    if fs::rename(source, dest).is_ok() {
        return Ok(());
    }
    copy_file(source, dest)?;
    fs::remove_file(source)
        .with_context(|| format!("cannot remove {} after copy", source.display()))
}

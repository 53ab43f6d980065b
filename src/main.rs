use std::path::PathBuf;

use clap::Parser;

use mediareorg::date::{ExifReader, Ffprobe};
use mediareorg::dest;
use mediareorg::media::ExtensionMap;
use mediareorg::organize::{self, Config};
use mediareorg::place::Mode;

#[derive(Parser)]
#[command(
    name = "mediareorg",
    version,
    about = "Reorganize photo/video files into target/<year>/<date> by creation date"
)]
struct Cli {
    /// Copy (cp) or move (mv) files
    #[arg(value_enum)]
    mode: Mode,

    /// Source directory to scan recursively
    source: PathBuf,

    /// Parent directory for the reorganized files
    target: PathBuf,

    /// Date format for the second-level directory name
    #[arg(short, long, default_value = dest::DEFAULT_PATTERN)]
    pattern: String,

    /// Overwrite destination files that already exist
    #[arg(short, long)]
    force: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config {
        source: cli.source,
        target: cli.target,
        pattern: cli.pattern,
        force: cli.force,
        mode: cli.mode,
        extensions: ExtensionMap::default(),
    };

    organize::run(&config, &ExifReader, &Ffprobe)
}

pub mod exif;
pub mod ffprobe;

use std::path::Path;

use chrono::NaiveDateTime;

use crate::media::MediaKind;

pub use exif::{ExifReader, MetadataReader};
pub use ffprobe::{Ffprobe, VideoProber};

/// Extract a creation timestamp for a classified media file. `None` means
/// the expected metadata is missing or malformed; the file should be
/// skipped, not the run aborted.
pub fn extract(
    kind: MediaKind,
    path: &Path,
    reader: &dyn MetadataReader,
    prober: &dyn VideoProber,
) -> Option<NaiveDateTime> {
    match kind {
        MediaKind::Jpeg => exif::jpeg_date(reader, path),
        MediaKind::Mp4 => ffprobe::mp4_date(prober, path),
    }
}

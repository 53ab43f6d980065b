use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDateTime;
use exif::{In, Value};

/// Tag name carrying the capture timestamp, as opposed to file modification.
pub const DATETIME_ORIGINAL: &str = "DateTimeOriginal";

/// EXIF date layout: `YYYY:MM:DD HH:MM:SS`
const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Capability to read a tag-name -> value mapping from an image file.
/// Abstracted so extraction logic can be tested against canned mappings.
pub trait MetadataReader {
    fn read_tags(&self, path: &Path) -> anyhow::Result<HashMap<String, String>>;
}

/// Production reader backed by kamadak-exif.
pub struct ExifReader;

impl MetadataReader for ExifReader {
    fn read_tags(&self, path: &Path) -> anyhow::Result<HashMap<String, String>> {
        let file = File::open(path)
            .with_context(|| format!("cannot open {}", path.display()))?;
        let mut bufreader = BufReader::new(&file);
        let exif = exif::Reader::new()
            .read_from_container(&mut bufreader)
            .with_context(|| format!("cannot read EXIF from {}", path.display()))?;

        let mut tags = HashMap::new();
        for field in exif.fields().filter(|f| f.ifd_num == In::PRIMARY) {
            // Keep ASCII values raw so date tags retain the colon layout
            let value = match &field.value {
                Value::Ascii(v) if !v.is_empty() => {
                    String::from_utf8_lossy(&v[0]).into_owned()
                }
                _ => field.display_value().to_string(),
            };
            tags.insert(field.tag.to_string(), value);
        }
        Ok(tags)
    }
}

/// Extract the capture date from a JPEG file. Missing tags, unreadable
/// files and malformed dates all degrade to `None`.
pub fn jpeg_date(reader: &dyn MetadataReader, path: &Path) -> Option<NaiveDateTime> {
    let tags = reader.read_tags(path).ok()?;
    let raw = tags.get(DATETIME_ORIGINAL)?;
    NaiveDateTime::parse_from_str(raw, EXIF_DATE_FORMAT).ok()
}

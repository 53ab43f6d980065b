use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context};
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

/// Container-level metadata returned by the probe, narrowed to the
/// fields this tool consumes.
#[derive(Debug, Default, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub format: ProbeFormat,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProbeFormat {
    #[serde(default)]
    pub tags: Option<ProbeTags>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProbeTags {
    pub creation_time: Option<String>,
}

/// Capability to probe a video container for format metadata.
/// Abstracted so extraction logic can be tested against canned responses.
pub trait VideoProber {
    fn probe(&self, path: &Path) -> anyhow::Result<ProbeOutput>;
}

/// Production prober that spawns ffprobe and parses its JSON output.
pub struct Ffprobe;

impl VideoProber for Ffprobe {
    fn probe(&self, path: &Path) -> anyhow::Result<ProbeOutput> {
        let output = Command::new("ffprobe")
            .args(["-v", "quiet", "-print_format", "json", "-show_format"])
            .arg(path)
            .output()
            .context("cannot run ffprobe")?;

        if !output.status.success() {
            bail!("ffprobe failed on {} ({})", path.display(), output.status);
        }

        serde_json::from_slice(&output.stdout)
            .with_context(|| format!("cannot parse ffprobe output for {}", path.display()))
    }
}

/// Extract the creation date from an MP4 file. The tag value is RFC 3339
/// with fractional seconds (`2021-07-04T09:15:30.500000Z`); fractional
/// seconds are discarded. Probe failures and malformed tags degrade to `None`.
pub fn mp4_date(prober: &dyn VideoProber, path: &Path) -> Option<NaiveDateTime> {
    let probe = prober.probe(path).ok()?;
    let raw = probe.format.tags?.creation_time?;
    DateTime::parse_from_rfc3339(&raw).map(|dt| dt.naive_utc()).ok()
}

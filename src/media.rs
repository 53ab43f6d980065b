/// Media category a file extension maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Jpeg,
    Mp4,
}

/// Extension-to-kind mapping. Passed in explicitly so tests can supply
/// alternate sets without touching process-wide state.
#[derive(Debug, Clone)]
pub struct ExtensionMap {
    pub jpeg: Vec<String>,
    pub video: Vec<String>,
}

impl Default for ExtensionMap {
    fn default() -> Self {
        Self {
            jpeg: ["jpg", "jpeg", "jpe", "jfif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            video: vec!["mp4".to_string()],
        }
    }
}

impl ExtensionMap {
    /// Classify a file extension, case-insensitively. `None` means the
    /// file is not a recognized media type.
    pub fn classify(&self, extension: &str) -> Option<MediaKind> {
        let ext = extension.to_lowercase();
        if self.jpeg.iter().any(|e| *e == ext) {
            Some(MediaKind::Jpeg)
        } else if self.video.iter().any(|e| *e == ext) {
            Some(MediaKind::Mp4)
        } else {
            None
        }
    }
}

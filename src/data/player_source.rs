use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};

/// Marker the radio player writes as the first lyrics line
static STREAMING_STATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Pandora [Ss]tation:").expect("static station pattern is valid")
});

/// Where the currently loaded track comes from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSource {
    /// The local library player, which the position probe can query
    Library,
    /// A streaming-radio player; no position probe, no sync
    StreamingRadio,
}

impl PlayerSource {
    /// Detect the source from the first line following the fixed fields.
    pub fn detect(first_remainder_line: &str) -> Self {
        if STREAMING_STATION_PATTERN.is_match(first_remainder_line) {
            PlayerSource::StreamingRadio
        } else {
            PlayerSource::Library
        }
    }

    /// Whether clients may sync their own position clock to this source
    pub fn can_sync(&self) -> bool {
        matches!(self, PlayerSource::Library)
    }
}

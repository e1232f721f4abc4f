/// Playback status decoded from the first line of a status dump
use serde::{Serialize, Deserialize};
use strum_macros::EnumString;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum PlaybackStatus {
    /// Player is actively playing media
    #[serde(rename = "playing")]
    Playing,
    /// Playback is paused
    #[serde(rename = "paused")]
    Paused,
    /// Playback is stopped
    #[serde(rename = "stopped")]
    Stopped,
    /// Status line could not be decoded
    #[serde(rename = "unknown")]
    Unknown,
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        PlaybackStatus::Unknown
    }
}

impl PlaybackStatus {
    /// Decode a status line such as `[Playing]`.
    ///
    /// The brackets are optional and matching is case-insensitive. Anything
    /// else decodes to `Unknown`; the raw line is still reported verbatim
    /// in the summary, so nothing is lost.
    pub fn from_status_line(line: &str) -> Self {
        let inner = line.trim();
        let inner = inner.strip_prefix('[').unwrap_or(inner);
        let inner = inner.strip_suffix(']').unwrap_or(inner);
        inner.trim().parse().unwrap_or(PlaybackStatus::Unknown)
    }
}

impl std::fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackStatus::Playing => write!(f, "playing"),
            PlaybackStatus::Paused => write!(f, "paused"),
            PlaybackStatus::Stopped => write!(f, "stopped"),
            PlaybackStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bracketed_lines() {
        assert_eq!(PlaybackStatus::from_status_line("[Playing]"), PlaybackStatus::Playing);
        assert_eq!(PlaybackStatus::from_status_line("[Paused]"), PlaybackStatus::Paused);
        assert_eq!(PlaybackStatus::from_status_line(" [Stopped] "), PlaybackStatus::Stopped);
    }

    #[test]
    fn test_decode_unknown_line() {
        assert_eq!(PlaybackStatus::from_status_line(""), PlaybackStatus::Unknown);
        assert_eq!(PlaybackStatus::from_status_line("[Buffering]"), PlaybackStatus::Unknown);
    }
}

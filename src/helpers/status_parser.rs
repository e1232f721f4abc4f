//! Line parser for the fixed-format status dump.
//!
//! ```text
//! [Playing]
//! Champs Elysées (2014)
//! Zaz
//! Paris
//! Zaz                 Paris    6%     _
//! noRating
//! <artwork URL>
//! 11/177
//! <lyrics or "Pandora Station: ..."> ...
//! ```

use log::{debug, info};
use thiserror::Error;

use crate::data::{PlaybackStatus, RawStatusRecord};

/// Minimum number of lines a usable dump must contain
pub const MIN_STATUS_LINES: usize = 7;

/// Number of positional fields before the free-text remainder
pub const FIXED_FIELD_COUNT: usize = 8;

/// Artist value the producer writes when nothing is loaded
pub const NULL_ARTIST_SENTINEL: &str = "(null)";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Short status file: {lines} lines, at least {min} required", min = MIN_STATUS_LINES)]
    TooShort { lines: usize },
}

/// Outcome of splitting a dump into its fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedStatus {
    /// No track is loaded; only the status line is meaningful
    NothingPlaying { player_state: String },
    /// A track is loaded and every field is available for derivation
    Loaded(RawStatusRecord),
}

/// Split the dump text into a `ParsedStatus`.
///
/// Splitting is strictly positional on `\n`. A dump with exactly seven lines
/// is accepted and yields an empty `position_length`. The remainder after the
/// eighth line is kept byte for byte, trailing line breaks included; the fixed
/// fields lose a trailing `\r`.
pub fn parse_status(text: &str) -> Result<ParsedStatus, FormatError> {
    let lines: Vec<&str> = text.split('\n').collect();

    if lines.len() < MIN_STATUS_LINES {
        return Err(FormatError::TooShort { lines: lines.len() });
    }

    let field = |n: usize| {
        lines
            .get(n)
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or("")
            .to_string()
    };

    let player_state = field(0);
    let artist = field(2);
    if artist.is_empty() || artist == NULL_ARTIST_SENTINEL {
        info!(
            "No track information in status dump (player {})",
            PlaybackStatus::from_status_line(&player_state)
        );
        return Ok(ParsedStatus::NothingPlaying { player_state });
    }

    let remainder = if lines.len() > FIXED_FIELD_COUNT {
        lines[FIXED_FIELD_COUNT..].join("\n")
    } else {
        String::new()
    };

    let record = RawStatusRecord {
        player_state,
        title_with_year: field(1),
        artist,
        album: field(3),
        rest: field(4),
        rated: field(5),
        art_url: field(6),
        position_length: field(7),
        remainder,
    };
    debug!(
        "Parsed status record for a {} player: {:?}",
        PlaybackStatus::from_status_line(&record.player_state),
        record
    );

    Ok(ParsedStatus::Loaded(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "[Playing]\n\
        Champs Elysées (2014)\n\
        Zaz\n\
        Paris\n\
        Zaz  Paris    6%     ★★½\n\
        rated\n\
        http://art/zaz.jpg\n\
        11/177\n\
        Zaz  Champs Elysées\n\
        Paris\n";

    #[test]
    fn test_positional_fields() {
        let parsed = parse_status(SAMPLE).unwrap();
        let record = match parsed {
            ParsedStatus::Loaded(record) => record,
            other => panic!("expected a loaded record, got {:?}", other),
        };

        assert_eq!(record.player_state, "[Playing]");
        assert_eq!(record.title_with_year, "Champs Elysées (2014)");
        assert_eq!(record.artist, "Zaz");
        assert_eq!(record.album, "Paris");
        assert_eq!(record.rest, "Zaz  Paris    6%     ★★½");
        assert_eq!(record.rated, "rated");
        assert_eq!(record.art_url, "http://art/zaz.jpg");
        assert_eq!(record.position_length, "11/177");
        assert_eq!(record.remainder, "Zaz  Champs Elysées\nParis\n");
    }

    #[test]
    fn test_too_short() {
        let err = parse_status("[Playing]\nTitle\nArtist\nAlbum\n").unwrap_err();
        assert_eq!(err, FormatError::TooShort { lines: 5 });
        assert!(parse_status("").is_err());
    }

    #[test]
    fn test_seven_lines_accepted() {
        let text = "[Paused]\nTitle\nArtist\nAlbum\nrest\nnoRating\nart";
        match parse_status(text).unwrap() {
            ParsedStatus::Loaded(record) => {
                assert_eq!(record.position_length, "");
                assert_eq!(record.remainder, "");
            }
            other => panic!("expected a loaded record, got {:?}", other),
        }
    }

    #[test]
    fn test_null_artist_short_circuits() {
        let text = "[Stopped]\n\n(null)\n\n\nnoRating\n\n0/0\n";
        assert_eq!(
            parse_status(text).unwrap(),
            ParsedStatus::NothingPlaying { player_state: "[Stopped]".to_string() }
        );

        let empty_artist = "[Stopped]\nTitle\n\nAlbum\n\nnoRating\n\n0/0\n";
        assert!(matches!(parse_status(empty_artist).unwrap(), ParsedStatus::NothingPlaying { .. }));
    }

    #[test]
    fn test_remainder_kept_verbatim() {
        let text = "[Playing]\nTitle\nArtist\nAlbum\nrest\nrated\nart\n1/2\nL1\n\n";
        match parse_status(text).unwrap() {
            ParsedStatus::Loaded(record) => {
                assert_eq!(record.position_length, "1/2");
                assert_eq!(record.remainder, "L1\n\n");
            }
            other => panic!("expected a loaded record, got {:?}", other),
        }
    }

    #[test]
    fn test_crlf_fixed_fields() {
        let text = "[Playing]\r\nTitle\r\nArtist\r\nAlbum\r\nrest\r\nrated\r\nart\r\n1/2\r\nL1\r\n";
        match parse_status(text).unwrap() {
            ParsedStatus::Loaded(record) => {
                assert_eq!(record.artist, "Artist");
                assert_eq!(record.position_length, "1/2");
                assert_eq!(record.remainder, "L1\r\n");
            }
            other => panic!("expected a loaded record, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_artist_is_a_track() {
        let text = "[Playing]\nTitle\n  \nAlbum\nrest\nnoRating\nart\n1/2\n";
        match parse_status(text).unwrap() {
            ParsedStatus::Loaded(record) => assert_eq!(record.artist, "  "),
            other => panic!("expected a loaded record, got {:?}", other),
        }
    }
}

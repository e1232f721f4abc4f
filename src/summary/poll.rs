use log::debug;

use crate::data::{PlayerSource, RawStatusRecord, SongIdentity, Summary, VersionTag};
use crate::helpers::position::split_position_length;
use crate::helpers::rating::extract_rating;
use crate::helpers::status_parser::{parse_status, FormatError, ParsedStatus};
use crate::helpers::title_splitter::split_title_year_loved;
use crate::players::PlaybackPositionState;

pub const PLACEHOLDER_TITLE: &str = "<song>";
pub const PLACEHOLDER_ARTIST: &str = "<artist>";
pub const PLACEHOLDER_ALBUM: &str = "<album>";

/// Project one status dump into a summary.
///
/// Mutates `state` exactly once. The caller must not run two polls against
/// the same state concurrently; `SummaryService` holds its lock for the
/// whole poll.
pub fn poll(
    state: &mut PlaybackPositionState,
    text: &str,
    version: VersionTag,
) -> Result<Summary, FormatError> {
    match parse_status(text)? {
        ParsedStatus::NothingPlaying { player_state } => {
            // A pending probe value is only valid for this poll
            state.discard_pending();
            Ok(placeholder_summary(version, player_state))
        }
        ParsedStatus::Loaded(record) => Ok(derive_summary(state, record, version)),
    }
}

/// Fixed record reported while nothing is loaded
pub fn placeholder_summary(version: VersionTag, player_state: String) -> Summary {
    Summary {
        version,
        player_state,
        title: PLACEHOLDER_TITLE.to_string(),
        artist: PLACEHOLDER_ARTIST.to_string(),
        album: PLACEHOLDER_ALBUM.to_string(),
        length: "0".to_string(),
        position: 0,
        year: String::new(),
        loved: false,
        rating: 0,
        art_url: String::new(),
        lyrics: String::new(),
        is_accurate: true,
        can_sync: false,
    }
}

fn derive_summary(
    state: &mut PlaybackPositionState,
    record: RawStatusRecord,
    version: VersionTag,
) -> Summary {
    let source = PlayerSource::detect(record.first_remainder_line());
    let rating = extract_rating(&record.rest, &record.rated);
    let title = split_title_year_loved(&record.title_with_year);
    let position_length = split_position_length(&record.position_length);

    let song = SongIdentity::new(&title.title, &record.artist, &record.album);
    let reading = state.observe(&song, position_length.position, source);
    debug!(
        "Position for {}: {} (accurate={}, source={:?})",
        song, reading.position, reading.accurate, source
    );

    Summary {
        version,
        player_state: record.player_state,
        title: title.title,
        artist: record.artist,
        album: record.album,
        length: position_length.length,
        position: reading.position,
        year: title.year,
        loved: title.loved,
        rating,
        art_url: record.art_url,
        lyrics: record.remainder,
        is_accurate: reading.accurate,
        can_sync: source.can_sync(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(title: &str, position_length: &str, lyrics: &str) -> String {
        format!(
            "[Playing]\n{}\nZaz\nParis\nZaz  Paris    6%     ★★½\nrated\nart/zaz.jpg\n{}\n{}\n",
            title, position_length, lyrics
        )
    }

    #[test]
    fn test_derived_fields() {
        let mut state = PlaybackPositionState::new();
        let text = dump("Champs Elysées (2014 ♥)", "11/177", "first\nsecond");
        let summary = poll(&mut state, &text, VersionTag::DEFAULT).unwrap();

        assert_eq!(summary.title, "Champs Elysées");
        assert_eq!(summary.year, "2014");
        assert!(summary.loved);
        assert_eq!(summary.rating, 50);
        assert_eq!(summary.length, "177");
        assert_eq!(summary.position, 11);
        assert!(!summary.is_accurate);
        assert!(summary.can_sync);
        assert_eq!(summary.lyrics, "first\nsecond\n");
        assert_eq!(summary.art_url, "art/zaz.jpg");
    }

    #[test]
    fn test_streaming_radio_cannot_sync() {
        let mut state = PlaybackPositionState::new();
        let text = dump("Allegro", "3/200", "Pandora Station: female\nZaz | Allegro | Paris");
        let summary = poll(&mut state, &text, VersionTag::DEFAULT).unwrap();
        assert!(!summary.can_sync);
        assert_eq!(summary.year, "");
        assert!(!summary.loved);
    }

    #[test]
    fn test_placeholder_is_idempotent() {
        let mut state = PlaybackPositionState::new();
        let text = "[Stopped]\n\n(null)\n\n\nnoRating\n\n0/0\n";

        let first = poll(&mut state, text, VersionTag::DEFAULT).unwrap();
        let second = poll(&mut state, text, VersionTag::DEFAULT).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, placeholder_summary(VersionTag::DEFAULT, "[Stopped]".to_string()));
    }

    #[test]
    fn test_placeholder_consumes_pending_probe() {
        let mut state = PlaybackPositionState::new();
        state.offer_probe_result(30);
        poll(&mut state, "[Stopped]\n\n(null)\n\n\nnoRating\n\n0/0\n", VersionTag::DEFAULT).unwrap();
        assert!(!state.has_pending());
    }

    #[test]
    fn test_short_dump_fails() {
        let mut state = PlaybackPositionState::new();
        let err = poll(&mut state, "a\nb\nc\nd\n", VersionTag::DEFAULT).unwrap_err();
        assert_eq!(err, FormatError::TooShort { lines: 4 });
        assert_eq!(state, PlaybackPositionState::new());
    }
}

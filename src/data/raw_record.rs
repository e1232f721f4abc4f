use serde::{Serialize, Deserialize};

/// The fixed fields of one status dump, in file order.
///
/// Field *n* is always line *n* of the dump; nothing is identified by content.
/// Everything after the eighth line is kept in `remainder`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStatusRecord {
    pub player_state: String,
    /// `Title`, `Title (YYYY)` or `Title (YYYY ♥)`
    pub title_with_year: String,
    pub artist: String,
    pub album: String,
    /// `Artist Album Pos%RatingGlyphs`
    pub rest: String,
    /// Rating sentinel, `noRating` when unrated
    pub rated: String,
    pub art_url: String,
    /// `<position>/<length>`
    pub position_length: String,
    /// Free text after the fixed fields, joined with newlines
    pub remainder: String,
}

impl RawStatusRecord {
    /// First line of the free text, used to recognise the radio player
    pub fn first_remainder_line(&self) -> &str {
        self.remainder.lines().next().unwrap_or("")
    }
}

/// Identity of the loaded track, compared between polls to detect a change
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongIdentity {
    pub title: String,
    pub artist: String,
    pub album: String,
}

impl SongIdentity {
    pub fn new(title: &str, artist: &str, album: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
        }
    }
}

impl std::fmt::Display for SongIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' by '{}' on '{}'", self.title, self.artist, self.album)
    }
}

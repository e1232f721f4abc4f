use crate::data::{EncodedSummary, Summary};
use crate::helpers::url_encoding::encode_value;
use crate::summary::projector::{project_fields, ProjectionFacts};

/// Compose the client record: fixed fields first, then the versioned ones,
/// every value percent-encoded.
pub fn assemble(summary: &Summary) -> EncodedSummary {
    let fixed: [(&'static str, String); 13] = [
        ("majorVersion", summary.version.major.to_string()),
        ("minorVersion", summary.version.minor.to_string()),
        ("PlayerState", summary.player_state.clone()),
        ("Title", summary.title.clone()),
        ("Artist", summary.artist.clone()),
        ("Album", summary.album.clone()),
        ("Length", summary.length.clone()),
        ("Position", summary.position.to_string()),
        ("Year", summary.year.clone()),
        ("Loved", summary.loved.to_string()),
        ("Rating", summary.rating.to_string()),
        ("ArtURL", summary.art_url.clone()),
        ("Lyrics", summary.lyrics.clone()),
    ];

    let facts = ProjectionFacts {
        is_accurate: summary.is_accurate,
        can_sync: summary.can_sync,
    };

    let mut encoded = EncodedSummary::new();
    for (key, value) in fixed {
        encoded.push(key, encode_value(&value));
    }
    for (key, value) in project_fields(summary.version, facts) {
        encoded.push(key, encode_value(&value.to_string()));
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VersionTag;

    fn sample(version: VersionTag) -> Summary {
        Summary {
            version,
            player_state: "[Playing]".to_string(),
            title: "Champs Elysées".to_string(),
            artist: "Zaz".to_string(),
            album: "Paris".to_string(),
            length: "177".to_string(),
            position: 11,
            year: "2014".to_string(),
            loved: true,
            rating: 50,
            art_url: "http://art/zaz.jpg".to_string(),
            lyrics: "line one\nline two".to_string(),
            is_accurate: false,
            can_sync: true,
        }
    }

    #[test]
    fn test_key_order() {
        let encoded = assemble(&sample(VersionTag::new(0, 3)));
        let keys: Vec<&str> = encoded.keys().collect();
        assert_eq!(keys, vec![
            "majorVersion", "minorVersion", "PlayerState", "Title", "Artist", "Album",
            "Length", "Position", "Year", "Loved", "Rating", "ArtURL", "Lyrics",
            "accurate", "IsAccuratePos", "canSync",
        ]);
    }

    #[test]
    fn test_values_are_encoded() {
        let encoded = assemble(&sample(VersionTag::new(0, 1)));
        assert_eq!(encoded.get("PlayerState"), Some("%5BPlaying%5D"));
        assert_eq!(encoded.get("Title"), Some("Champs%20Elys%C3%A9es"));
        assert_eq!(encoded.get("ArtURL"), Some("http%3A%2F%2Fart%2Fzaz.jpg"));
        assert_eq!(encoded.get("Lyrics"), Some("line%20one%0Aline%20two"));
        assert_eq!(encoded.get("Position"), Some("11"));
        assert_eq!(encoded.get("Loved"), Some("true"));
        assert_eq!(encoded.get("accurate"), Some("false"));
        assert!(!encoded.contains_key("IsAccuratePos"));
        assert!(!encoded.contains_key("canSync"));
    }
}

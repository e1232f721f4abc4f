use log::{debug, warn};

/// `rated` line value meaning the track carries no rating
pub const NO_RATING_SENTINEL: &str = "noRating";

/// Glyph written for an explicit zero rating
const ZERO_RATING_GLYPH: &str = "-";

/// Glyph written when the producer could not render the rating
const UNKNOWN_RATING_GLYPH: &str = "_";

const HALF_STAR: char = '½';
const WHOLE_STAR_POINTS: u32 = 20;
const HALF_STAR_POINTS: u32 = 10;
const MAX_RATING: u32 = 100;

/// Extract the 0-100 rating from the `rest` summary line.
///
/// `rest` looks like `Artist Album 6% ★★½`: the glyphs after the single `%`
/// are the stars. Anything unexpected yields `0`; the poll never fails on a
/// bad rating.
pub fn extract_rating(rest: &str, rated: &str) -> u8 {
    let rated = rated.trim();
    if rated.is_empty() || rated == NO_RATING_SENTINEL {
        return 0;
    }

    let parts: Vec<&str> = rest.split('%').collect();
    if parts.len() != 2 {
        warn!("Unexpected rating summary '{}': expected exactly one '%'", rest);
        return 0;
    }

    let glyphs = parts[1].trim();
    match glyphs {
        "" | UNKNOWN_RATING_GLYPH => {
            warn!("Missing rating glyphs in '{}'", rest);
            return 0;
        }
        ZERO_RATING_GLYPH => return 0,
        _ => {}
    }

    let mut stars: Vec<char> = glyphs.chars().filter(|c| !c.is_whitespace()).collect();
    let half = if stars.last() == Some(&HALF_STAR) {
        stars.pop();
        HALF_STAR_POINTS
    } else {
        0
    };
    // Only a trailing half-star is a half; anything before it is a whole star
    let points = stars.len() as u32 * WHOLE_STAR_POINTS + half;

    if points > MAX_RATING {
        warn!("Rating glyphs '{}' exceed five stars, clamping", glyphs);
    }
    let rating = points.min(MAX_RATING) as u8;
    debug!("Rating glyphs '{}' -> {}", glyphs, rating);
    rating
}

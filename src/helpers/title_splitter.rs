/// Title splitter module
///
/// The dump combines the title, the release year and the "loved" heart into
/// a single line: `Title`, `Title (YYYY)` or `Title (YYYY ♥)`.

use once_cell::sync::Lazy;
use regex::Regex;
use log::debug;

static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(\d{4}").expect("static year pattern is valid")
});

/// Parts of a combined title line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleParts {
    pub title: String,
    /// Empty when the line carries no parenthesized year
    pub year: String,
    pub loved: bool,
}

/// Split a combined title line into title, year and loved marker
///
/// # Examples
/// ```
/// use musicsummary::helpers::title_splitter::split_title_year_loved;
///
/// let parts = split_title_year_loved("Allegro (1999 ♥)");
/// assert_eq!(parts.title, "Allegro");
/// assert_eq!(parts.year, "1999");
/// assert!(parts.loved);
/// ```
pub fn split_title_year_loved(title_with_year: &str) -> TitleParts {
    if !YEAR_PATTERN.is_match(title_with_year) {
        return TitleParts {
            title: title_with_year.to_string(),
            ..TitleParts::default()
        };
    }

    // Title is everything before the first parenthesis, the year group is the last one
    let title = title_with_year
        .split('(')
        .next()
        .unwrap_or("")
        .trim()
        .to_string();

    let group = title_with_year.rsplit('(').next().unwrap_or("");
    let group = group.trim_end();
    let group = group.strip_suffix(')').unwrap_or(group);

    let mut tokens = group.split_whitespace();
    let year = tokens.next().unwrap_or("").to_string();
    let loved = tokens.next().is_some();

    debug!("Split title '{}' into '{}' / '{}' / loved={}", title_with_year, title, year, loved);

    TitleParts { title, year, loved }
}

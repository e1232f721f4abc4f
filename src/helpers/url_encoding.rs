/*!
 * Percent-encoding of summary values
 *
 * Every value handed to clients is percent-encoded so that titles, lyrics
 * and artwork paths survive any transport untouched.
 */

use log::debug;

/// Percent-encode a single summary value
///
/// # Example
/// ```
/// use musicsummary::helpers::url_encoding::encode_value;
/// assert_eq!(encode_value("Champs Elysées"), "Champs%20Elys%C3%A9es");
/// ```
pub fn encode_value(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decode a percent-encoded value back to the original string
///
/// Returns None if the decoded bytes are not valid UTF-8.
pub fn decode_value(encoded: &str) -> Option<String> {
    match urlencoding::decode(encoded) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            debug!("Failed to decode '{}': {}", encoded, e);
            None
        }
    }
}

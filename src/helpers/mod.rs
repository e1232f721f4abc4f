pub mod position;
pub mod rating;
pub mod status_parser;
pub mod status_reader;
pub mod title_splitter;
pub mod url_encoding;

pub use status_parser::{parse_status, FormatError, ParsedStatus};
pub use status_reader::{FileStatusSource, StatusSource};

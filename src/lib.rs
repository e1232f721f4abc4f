/// Data types: raw status record, version tag, summary
pub mod data;

/// Status dump reading, line parsing and field derivation
pub mod helpers;

/// Position tracking and the accuracy probe
pub mod players;

/// Poll, version projection and summary assembly
pub mod summary;

/// HTTP routes serving the summary
pub mod api;

/// Configuration file handling
pub mod config;

/// Logger setup
pub mod logging;

/// Shared constants
pub mod constants;

pub use data::{EncodedSummary, Summary, VersionTag};
pub use summary::{SummaryError, SummaryService};

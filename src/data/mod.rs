// Data structures for the now-playing summary

pub mod player_source;
pub mod player_state;
pub mod raw_record;
pub mod summary;
pub mod version;

// Re-export types from child modules
pub use player_source::*;
pub use player_state::*;
pub use raw_record::*;
pub use summary::*;
pub use version::*;

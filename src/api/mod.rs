// Import constants for use in API modules
pub use crate::constants::{API_PREFIX, MUSIC_PREFIX};

// Export the music summary routes
pub mod music;

// Export the server module
pub mod server;

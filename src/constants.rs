// Shared constants for the summary server

/// Prefix for general API routes
pub const API_PREFIX: &str = "/api";

/// Prefix for the music summary routes
pub const MUSIC_PREFIX: &str = "/music";

/// Status dump written by the monitoring process
pub const DEFAULT_STATUS_FILE: &str = "/tmp/.geekstatus";

/// Fixture served by the test route
pub const DEFAULT_TEST_FILE: &str = "_test_data/sample_music_summary_test_in.xxx";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8069;

pub const DEFAULT_CONFIG_FILE: &str = "musicsummary.json";

pub const DEFAULT_PROBE_APPLICATION: &str = "iTunes";

/// Position reported by the test route in place of the live value
pub const TEST_POSITION_MARKER: &str = "xyzzy";

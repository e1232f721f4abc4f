/// Player-side state and queries for the summary engine
pub mod position_tracker;
pub mod probe;

pub use position_tracker::{PlaybackPositionState, PositionReading};
pub use probe::{AppleScriptProbe, NullProbe, PositionProbe};

use log::info;

/// Create the probe described by the `probe` configuration section
///
/// Probing is enabled unless `enable` is false; `application` defaults to iTunes.
pub fn create_probe_from_config(config: Option<&serde_json::Value>) -> Box<dyn PositionProbe> {
    let enabled = config
        .and_then(|c| c.get("enable"))
        .and_then(|e| e.as_bool())
        .unwrap_or(true);

    if !enabled {
        info!("Position probe disabled in configuration");
        return Box::new(NullProbe);
    }

    let application = config
        .and_then(|c| c.get("application"))
        .and_then(|a| a.as_str())
        .unwrap_or(crate::constants::DEFAULT_PROBE_APPLICATION);

    info!("Using AppleScript position probe for {}", application);
    Box::new(AppleScriptProbe::new(application))
}

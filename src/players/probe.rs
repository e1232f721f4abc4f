use std::process::Command;
use log::{debug, warn};

/// Out-of-band, synchronous query of the local player.
///
/// Implementations block until the player answers; callers serialize polls,
/// so a slow probe delays the poll that asked for it and nothing else.
pub trait PositionProbe: Send + Sync {
    /// Whether the player process is running at all
    fn is_running(&self) -> bool;

    /// Whether the player is currently playing
    fn is_playing(&self) -> bool;

    /// Current playback position in whole seconds, if the player answers
    fn current_position(&self) -> Option<u32>;

    /// Get the name of this probe for log messages
    fn probe_name(&self) -> String;
}

/// Probe that never answers, used when probing is disabled
#[derive(Debug, Clone, Default)]
pub struct NullProbe;

impl PositionProbe for NullProbe {
    fn is_running(&self) -> bool {
        false
    }

    fn is_playing(&self) -> bool {
        false
    }

    fn current_position(&self) -> Option<u32> {
        None
    }

    fn probe_name(&self) -> String {
        "null".to_string()
    }
}

/// Probe that queries a macOS music application through `osascript`
#[derive(Debug, Clone)]
pub struct AppleScriptProbe {
    application: String,
}

impl AppleScriptProbe {
    pub fn new(application: &str) -> Self {
        Self {
            application: application.to_string(),
        }
    }

    pub fn application(&self) -> &str {
        &self.application
    }

    fn is_running_script(&self) -> String {
        format!(
            "tell application \"System Events\"\n\
             \x20 set ProcessList to name of every process\n\
             \x20 if \"{app}\" is in ProcessList then\n\
             \x20   return \"true\"\n\
             \x20 end if\n\
             end tell\n\
             return \"false\"\n",
            app = self.application
        )
    }

    fn tell_application(&self, command: &str) -> String {
        format!("tell application \"{}\" to {}", self.application, command)
    }

    /// Run one script and return its trimmed stdout, or None on any failure
    fn run_script(&self, script: &str) -> Option<String> {
        match Command::new("osascript").arg("-e").arg(script).output() {
            Ok(output) => {
                if output.status.success() {
                    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                    debug!("osascript returned '{}'", stdout);
                    Some(stdout)
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    warn!("osascript failed ({}): {}", output.status, stderr.trim());
                    None
                }
            }
            Err(e) => {
                warn!("Failed to execute osascript: {}", e);
                None
            }
        }
    }
}

impl PositionProbe for AppleScriptProbe {
    fn is_running(&self) -> bool {
        let running = parse_script_bool(self.run_script(&self.is_running_script()).as_deref());
        if !running {
            debug!("{} is not running", self.application);
        }
        running
    }

    fn is_playing(&self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.run_script(&self.tell_application("player state as string")).as_deref() == Some("playing")
    }

    fn current_position(&self) -> Option<u32> {
        if !self.is_running() {
            return None;
        }
        let output = self.run_script(&self.tell_application("get player position as Integer"))?;
        parse_script_position(&output)
    }

    fn probe_name(&self) -> String {
        format!("applescript:{}", self.application)
    }
}

/// Decode the `"true"`/`"false"` text returned by a script
fn parse_script_bool(output: Option<&str>) -> bool {
    matches!(output, Some(s) if s.eq_ignore_ascii_case("true"))
}

fn parse_script_position(output: &str) -> Option<u32> {
    match output.trim().parse::<u32>() {
        Ok(position) => Some(position),
        Err(e) => {
            warn!("Unparsable player position '{}': {}", output, e);
            None
        }
    }
}

use std::collections::HashMap;
use std::io::Write;
use log::{debug, info, LevelFilter};
use serde::{Deserialize, Serialize};
use env_logger::{Builder, Target, WriteStyle};

/// Logging subsystems of the summary server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoggingSubsystem {
    /// Main application logging
    #[serde(rename = "main")]
    Main,
    /// HTTP routes
    #[serde(rename = "api")]
    Api,
    /// Status dump reading and field derivation
    #[serde(rename = "parser")]
    Parser,
    /// Position tracking
    #[serde(rename = "tracker")]
    Tracker,
    /// Accuracy probe
    #[serde(rename = "probe")]
    Probe,
    /// Configuration loading
    #[serde(rename = "config")]
    Config,
    /// Third-party dependencies
    #[serde(rename = "deps")]
    Dependencies,
}

impl LoggingSubsystem {
    /// Get the module prefixes for this subsystem
    pub fn module_prefix(&self) -> &'static str {
        match self {
            LoggingSubsystem::Main => "musicsummary",
            LoggingSubsystem::Api => "musicsummary::api",
            LoggingSubsystem::Parser => "musicsummary::helpers",
            LoggingSubsystem::Tracker => "musicsummary::players::position_tracker,musicsummary::summary",
            LoggingSubsystem::Probe => "musicsummary::players::probe",
            LoggingSubsystem::Config => "musicsummary::config",
            LoggingSubsystem::Dependencies => "rocket,hyper",
        }
    }

    fn parse(name: &str) -> Option<LoggingSubsystem> {
        match name.to_lowercase().as_str() {
            "main" => Some(LoggingSubsystem::Main),
            "api" => Some(LoggingSubsystem::Api),
            "parser" => Some(LoggingSubsystem::Parser),
            "tracker" => Some(LoggingSubsystem::Tracker),
            "probe" => Some(LoggingSubsystem::Probe),
            "config" => Some(LoggingSubsystem::Config),
            "deps" | "dependencies" => Some(LoggingSubsystem::Dependencies),
            _ => None,
        }
    }
}

/// Logging configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Global log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Target for log output (stdout, stderr)
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default = "default_true")]
    pub timestamps: bool,

    #[serde(default = "default_true")]
    pub colors: bool,

    /// Subsystem-specific log levels; unknown names are used as module paths
    #[serde(default)]
    pub subsystems: HashMap<String, String>,

    #[serde(default)]
    pub include_module_path: bool,

    #[serde(default)]
    pub include_line_numbers: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_target() -> String {
    "stdout".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            target: default_target(),
            timestamps: true,
            colors: true,
            subsystems: HashMap::new(),
            include_module_path: false,
            include_line_numbers: false,
        }
    }
}

impl LoggingConfig {
    /// Read the optional `logging` section of the main configuration
    pub fn from_config(config: &serde_json::Value) -> Result<Self, String> {
        match config.get("logging") {
            Some(section) => serde_json::from_value(section.clone())
                .map_err(|e| format!("Failed to parse logging config: {}", e)),
            None => Ok(LoggingConfig::default()),
        }
    }

    /// Convert string log level to LevelFilter
    fn parse_log_level(level: &str) -> LevelFilter {
        match level.to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => {
                eprintln!("Warning: Unknown log level '{}', defaulting to 'info'", level);
                LevelFilter::Info
            }
        }
    }

    /// Module-level filters, expanded from subsystem names
    fn module_filters(&self) -> Vec<(String, LevelFilter)> {
        let mut filters = Vec::new();
        for (name, level) in &self.subsystems {
            let level_filter = Self::parse_log_level(level);
            match LoggingSubsystem::parse(name) {
                Some(subsystem) => {
                    for prefix in subsystem.module_prefix().split(',') {
                        filters.push((prefix.trim().to_string(), level_filter));
                    }
                }
                None => filters.push((name.clone(), level_filter)),
            }
        }
        filters.sort();
        filters
    }

    /// Build the env_logger style filter string, for log messages
    pub fn build_filter_string(&self) -> String {
        let mut parts = vec![self.level.clone()];
        for (module, level) in self.module_filters() {
            parts.push(format!("{}={}", module, level.as_str().to_lowercase()));
        }
        parts.join(",")
    }

    /// Initialize the logger with this configuration
    pub fn initialize_logger(&self) -> Result<(), String> {
        let filter_string = self.build_filter_string();

        let mut builder = Builder::new();
        builder.parse_env("RUST_LOG");
        builder.filter(None, Self::parse_log_level(&self.level));
        for (module, level) in self.module_filters() {
            builder.filter(Some(&module), level);
        }

        builder.write_style(if self.colors { WriteStyle::Auto } else { WriteStyle::Never });

        match self.target.to_lowercase().as_str() {
            "stdout" => {
                builder.target(Target::Stdout);
            }
            "stderr" => {
                builder.target(Target::Stderr);
            }
            other => return Err(format!("Unknown logging target: {}", other)),
        }

        let include_module_path = self.include_module_path;
        let include_line_numbers = self.include_line_numbers;
        let timestamps = self.timestamps;

        builder.format(move |buf, record| {
            let mut output = String::new();

            if timestamps {
                output.push_str(&format!("[{}] ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S")));
            }

            output.push_str(&format!("[{}] ", record.level()));

            if include_module_path {
                if let Some(module) = record.module_path() {
                    output.push_str(&format!("[{}] ", module));
                }
            }

            if include_line_numbers {
                if let (Some(file), Some(line)) = (record.file(), record.line()) {
                    output.push_str(&format!("[{}:{}] ", file, line));
                }
            }

            output.push_str(&format!("{}", record.args()));

            writeln!(buf, "{}", output)
        });

        builder.try_init()
            .map_err(|e| format!("Failed to initialize logger: {}", e))?;

        info!("Logging initialized with filter: {}", filter_string);
        debug!("Logging config: {:?}", self);
        Ok(())
    }
}

/// Initialize logging from the main configuration and command line flags
pub fn initialize_logging(config: &serde_json::Value, debug_mode: bool, verbose_mode: bool) -> Result<(), String> {
    let mut logging = LoggingConfig::from_config(config)?;

    if debug_mode || verbose_mode {
        logging.level = "debug".to_string();
    }

    logging.initialize_logger()
}

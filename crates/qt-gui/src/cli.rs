//! Command-line arguments.
//!
//! Everything here overrides the persisted settings for a single run.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser, Debug)]
#[command(
    name = "quality-time-viewer",
    version,
    about = "Quality-time report viewer",
    long_about = "Show a Quality-time report's subjects and metrics.\n\n\
                  View options can be passed as a query string, exactly as they\n\
                  appear in a shared report link."
)]
pub struct Cli {
    /// Report to open (default: the last opened report, or the first one).
    #[arg(long = "report", value_name = "UUID")]
    pub report: Option<String>,

    /// Origin of the report API (overrides the settings file).
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Origin of the metric record endpoint (overrides the settings file).
    #[arg(long = "record-url", value_name = "URL")]
    pub record_url: Option<String>,

    /// Initial query string, e.g. "?hidden_columns=trend&hide_metrics_not_requiring_action=true".
    #[arg(long = "query", value_name = "QUERY")]
    pub query: Option<String>,

    /// Enable the edit controls (add, copy, and move subjects).
    #[arg(long = "editor")]
    pub editor: bool,

    /// Settings file to use instead of the platform default.
    #[arg(long = "settings", value_name = "PATH")]
    pub settings_path: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// The parts of the command line the application needs at boot.
#[derive(Debug, Clone, Default)]
pub struct Startup {
    pub report: Option<String>,
    pub api_url: Option<String>,
    pub record_url: Option<String>,
    pub query: Option<String>,
    pub editor: bool,
    pub settings_path: Option<PathBuf>,
}

impl Cli {
    /// Logging configuration from the verbosity and format flags.
    pub fn log_config(&self) -> LogConfig {
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            use_env_filter: !self.verbosity.is_present(),
            format,
            log_file: self.log_file.clone(),
            ..LogConfig::default()
        }
    }

    /// Boot parameters for the application.
    pub fn startup(&self) -> Startup {
        Startup {
            report: self.report.clone(),
            api_url: self.api_url.clone(),
            record_url: self.record_url.clone(),
            query: self.query.clone(),
            editor: self.editor,
            settings_path: self.settings_path.clone(),
        }
    }
}

//! CLI argument parsing for presto-metrico
//!
//! # Options
//!
//! - `--coordinator`: Presto coordinator origin, e.g. http://coordinator:8080
//! - `--coordinator-env`: environment variable consulted when --coordinator
//!   is not given (default: PRESTO_COORDINATOR)
//! - `--dogstatsd`: dogstatsd agent address (default: 127.0.0.1:8125)
//! - `--interval`: seconds between metric sweeps (default: 15)
//! - `--namespace`: statsd prefix prepended to every gauge (default: data.presto.)
//! - `--http-timeout-ms`: coordinator request timeout (default: 5000)
//! - `--log-level` / `-l`: log level (trace/debug/info/warn/error)

use clap::{Parser, ValueEnum};

/// presto-metrico - Presto coordinator JMX metrics forwarder
///
/// Polls the coordinator's mbean endpoints on a fixed interval and forwards
/// curated numeric attributes to a dogstatsd agent as gauges.
#[derive(Parser, Debug)]
#[command(name = "presto-metrico")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address of the Presto coordinator (scheme + host[:port])
    #[arg(long, value_name = "ORIGIN")]
    pub coordinator: Option<String>,

    /// Environment variable that holds the coordinator address when
    /// --coordinator is not given
    #[arg(long, value_name = "NAME", default_value = "PRESTO_COORDINATOR")]
    pub coordinator_env: String,

    /// Address of the dogstatsd agent
    #[arg(
        long,
        value_name = "ADDR",
        default_value = "127.0.0.1:8125",
        env = "METRICO_DOGSTATSD"
    )]
    pub dogstatsd: String,

    /// Interval between metric sweeps, in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = 15,
        env = "METRICO_INTERVAL"
    )]
    pub interval: u64,

    /// Statsd namespace prepended to every gauge label
    #[arg(
        long,
        value_name = "PREFIX",
        default_value = "data.presto.",
        env = "METRICO_NAMESPACE"
    )]
    pub namespace: String,

    /// Coordinator HTTP timeout, in milliseconds
    #[arg(
        long,
        value_name = "MS",
        default_value_t = 5000,
        env = "METRICO_HTTP_TIMEOUT"
    )]
    pub http_timeout_ms: u64,

    /// Log level
    #[arg(
        short,
        long,
        value_enum,
        default_value = "info",
        env = "METRICO_LOG_LEVEL"
    )]
    pub log_level: LogLevel,
}

/// Log level options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level - default
    Info,
    /// Warn level
    Warn,
    /// Error level - least verbose
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["presto-metrico"]);
        assert_eq!(cli.coordinator, None);
        assert_eq!(cli.coordinator_env, "PRESTO_COORDINATOR");
        assert_eq!(cli.dogstatsd, "127.0.0.1:8125");
        assert_eq!(cli.interval, 15);
        assert_eq!(cli.namespace, "data.presto.");
        assert_eq!(cli.http_timeout_ms, 5000);
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_cli_with_options() {
        let cli = Cli::parse_from([
            "presto-metrico",
            "--coordinator",
            "http://coordinator:8080",
            "--dogstatsd",
            "10.0.0.1:8125",
            "--interval",
            "30",
            "--namespace",
            "staging.presto.",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.coordinator.as_deref(), Some("http://coordinator:8080"));
        assert_eq!(cli.dogstatsd, "10.0.0.1:8125");
        assert_eq!(cli.interval, 30);
        assert_eq!(cli.namespace, "staging.presto.");
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Trace.to_string(), "trace");
        assert_eq!(LogLevel::Info.to_string(), "info");
        assert_eq!(LogLevel::Error.to_string(), "error");
    }
}

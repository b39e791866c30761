//! Error types for presto-metrico
//!
//! Every error here is contained at the smallest enclosing unit of work
//! (one attribute or one category) and surfaces only as a log diagnostic;
//! none of them abort a poll cycle.

use thiserror::Error;

/// Errors raised while resolving, fetching or decoding a category's mbean.
#[derive(Error, Debug)]
pub enum CollectorError {
    /// HTTP client construction failed at startup
    #[error("failed to initialize HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    /// The category has no registered mbean path
    #[error("metric category {0:?} is not registered")]
    UnknownCategory(String),

    /// Connection or timeout failure talking to the coordinator
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not a decodable mbean payload
    #[error("decode error: {0}")]
    Decode(String),
}

/// Errors raised while normalizing an attribute value to f64.
#[derive(Error, Debug, PartialEq)]
pub enum CoerceError {
    /// The value was a string but not a parsable base-10 float
    #[error("could not parse numeric string {0:?}")]
    NonNumericString(String),

    /// The value had a shape that carries no single numeric reading
    #[error("unsupported value type: {0}")]
    UnsupportedType(&'static str),
}

/// Errors raised while forwarding a gauge to the metrics agent.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The UDP send (or socket setup) failed
    #[error("failed to send to statsd: {0}")]
    Io(#[from] std::io::Error),
}

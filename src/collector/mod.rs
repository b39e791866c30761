//! Coordinator mbean collection
//!
//! Fetches one category's mbean over the coordinator's REST API and decodes
//! the response body into a structured payload.
//!
//! # Example
//!
//! ```ignore
//! use presto_metrico::collector::JmxClient;
//! use presto_metrico::registry::Registry;
//!
//! let client = JmxClient::new("http://coordinator:8080", 5000)?;
//! let payload = client.fetch(&Registry::presto(), "queryManager").await?;
//! ```

mod client;
mod parser;

pub use client::JmxClient;
pub use parser::{parse_payload, AttributeValue, MbeanAttribute, MbeanPayload};

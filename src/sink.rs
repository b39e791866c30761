//! Dogstatsd gauge forwarding
//!
//! The dispatcher only ever emits gauges with sample rate 1.0; the rate
//! stays in the signature because the agent line protocol carries it.

use std::net::UdpSocket;

use crate::error::SinkError;

/// Gauge-emitting metrics sink.
///
/// Implementations must be safe to call from concurrently running cycles.
pub trait MetricSink: Send + Sync {
    /// Send one gauge sample.
    fn gauge(&self, name: &str, value: f64, sample_rate: f64) -> Result<(), SinkError>;
}

/// Dogstatsd client over a connected UDP socket.
///
/// The namespace is prepended verbatim to every gauge name, so a prefix
/// like "data.presto." must carry its own trailing dot.
pub struct DogstatsdSink {
    socket: UdpSocket,
    namespace: String,
}

impl DogstatsdSink {
    /// Connect to a dogstatsd agent.
    ///
    /// This is the one construction the process treats as fatal: without a
    /// sink there is nothing to forward to.
    pub fn new(addr: &str, namespace: &str) -> Result<Self, SinkError> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect(addr)?;

        Ok(Self {
            socket,
            namespace: namespace.to_string(),
        })
    }

    fn format_gauge(&self, name: &str, value: f64, sample_rate: f64) -> String {
        // Dogstatsd omits the rate suffix for unsampled metrics.
        if sample_rate < 1.0 {
            format!("{}{}:{}|g|@{}", self.namespace, name, value, sample_rate)
        } else {
            format!("{}{}:{}|g", self.namespace, name, value)
        }
    }
}

impl MetricSink for DogstatsdSink {
    fn gauge(&self, name: &str, value: f64, sample_rate: f64) -> Result<(), SinkError> {
        let line = self.format_gauge(name, value, sample_rate);
        self.socket.send(line.as_bytes())?;
        Ok(())
    }
}

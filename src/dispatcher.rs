//! Metric dispatch cycle
//!
//! One cycle sweeps every registered category: fetch its mbean, filter the
//! attributes through the allowlist, coerce each surviving value, and emit
//! one gauge per accepted attribute. Failures are contained at the unit they
//! occur in — a bad attribute never aborts its category, a bad category
//! never aborts the cycle, and the cycle itself never fails.

use tracing::{debug, warn};

use crate::collector::{JmxClient, MbeanPayload};
use crate::registry::{Allowlist, Registry};
use crate::sink::MetricSink;

/// Outcome counters for one cycle. Purely informational; there is no
/// overall success or failure to report.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleStats {
    /// Gauges accepted by the sink
    pub gauges_sent: u64,
    /// Attributes dropped by the allowlist
    pub attributes_filtered: u64,
    /// Attributes whose value could not be normalized to f64
    pub coerce_failures: u64,
    /// Gauges the sink refused
    pub sink_failures: u64,
    /// Categories that failed to resolve, fetch or decode
    pub categories_failed: u64,
}

/// Sweeps the registry and forwards accepted attributes as gauges.
pub struct Dispatcher {
    client: JmxClient,
    registry: Registry,
    allowlist: Allowlist,
}

impl Dispatcher {
    /// Create a dispatcher over the given lookup tables.
    pub fn new(client: JmxClient, registry: Registry, allowlist: Allowlist) -> Self {
        Self {
            client,
            registry,
            allowlist,
        }
    }

    /// Run one best-effort sweep over every registered category.
    pub async fn run_cycle(&self, sink: &dyn MetricSink) -> CycleStats {
        let mut stats = CycleStats::default();

        for category in self.registry.categories() {
            match self.client.fetch(&self.registry, category).await {
                Ok(payload) => self.dispatch_payload(category, &payload, sink, &mut stats),
                Err(err) => {
                    warn!(category, error = %err, "Failed to collect category");
                    stats.categories_failed += 1;
                }
            }
        }

        stats
    }

    fn dispatch_payload(
        &self,
        category: &str,
        payload: &MbeanPayload,
        sink: &dyn MetricSink,
        stats: &mut CycleStats,
    ) {
        for attribute in &payload.attributes {
            if !self.allowlist.is_allowed(&attribute.name) {
                debug!(attribute = %attribute.name, "no known metric");
                stats.attributes_filtered += 1;
                continue;
            }

            let value = match attribute.value.coerce() {
                Ok(value) => value,
                Err(err) => {
                    warn!(
                        category,
                        attribute = %attribute.name,
                        error = %err,
                        "Dropping attribute"
                    );
                    stats.coerce_failures += 1;
                    continue;
                }
            };

            let label = format!("{}.{}", category, attribute.name);
            match sink.gauge(&label, value, 1.0) {
                Ok(()) => stats.gauges_sent += 1,
                Err(err) => {
                    warn!(%label, error = %err, "Failed to send gauge");
                    stats.sink_failures += 1;
                }
            }
        }
    }
}

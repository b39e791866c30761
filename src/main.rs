//! presto-metrico - Presto coordinator JMX metrics forwarder
//!
//! This binary polls the coordinator's mbean endpoints on a fixed interval
//! and forwards curated numeric attributes to a dogstatsd agent as gauges.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tracing::{debug, info};

use presto_metrico::cli::Cli;
use presto_metrico::collector::JmxClient;
use presto_metrico::config::Config;
use presto_metrico::dispatcher::Dispatcher;
use presto_metrico::registry::{Allowlist, Registry};
use presto_metrico::sink::{DogstatsdSink, MetricSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    presto_metrico::init_logging(&cli.log_level.to_string())?;

    let config = Config::from_cli(&cli)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        coordinator = %config.coordinator,
        dogstatsd = %config.dogstatsd,
        "Starting presto-metrico"
    );

    // Failing to reach a sink is the only fatal condition; everything after
    // this point is contained per cycle.
    let sink: Arc<dyn MetricSink> =
        Arc::new(DogstatsdSink::new(&config.dogstatsd, &config.namespace)?);

    let client = JmxClient::new(&config.coordinator, config.http_timeout_ms)?;
    let dispatcher = Arc::new(Dispatcher::new(
        client,
        Registry::presto(),
        Allowlist::presto(),
    ));

    let mut ticker = tokio::time::interval(config.interval);
    // The first tick completes immediately; consume it so the first sweep
    // waits one full interval, like every later one.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // Each cycle runs on its own task so a slow coordinator
                // cannot delay the next tick. Cycles share no mutable state.
                let dispatcher = dispatcher.clone();
                let sink = sink.clone();
                tokio::spawn(async move {
                    info!("Sending metrics");
                    let stats = dispatcher.run_cycle(sink.as_ref()).await;
                    debug!(?stats, "Cycle complete");
                });
            }
            _ = signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}

use anyhow::Context;
use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

pub struct Telemetry<T>
where
    T: SubscriberExt + Send + Sync + 'static,
{
    pub subscriber: T,
}

/// Bunyan-formatted JSON subscriber writing to `sink`.
///
/// `default_filter` only applies when `RUST_LOG` is unset or unparsable.
pub fn get_subscriber<Sink>(
    name: &str,
    default_filter: &str,
    sink: Sink,
) -> Telemetry<impl SubscriberExt + Send + Sync + 'static>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    Telemetry {
        subscriber: Registry::default()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(name.to_string(), sink)),
    }
}

/// Installs the subscriber globally and bridges `log` records into it.
///
/// Fails when called a second time in the same process.
pub fn init_subscriber(
    telemetry: Telemetry<impl SubscriberExt + Send + Sync + 'static>,
) -> Result<(), anyhow::Error> {
    LogTracer::init().map_err(|e| anyhow::anyhow!("Failed to set logger: {e}"))?;
    set_global_default(telemetry.subscriber).context("Failed to set subscriber")?;
    Ok(())
}


use anyhow::Result;
use once_cell::sync::OnceCell;
use opentelemetry::metrics::Histogram;
use opentelemetry::{global, KeyValue};
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

static RECOMPUTE_MS: OnceCell<Histogram<f64>> = OnceCell::new();

/// `RUST_LOG` if set, otherwise `fallback` (or `info`).
pub fn filter_from_env(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or("info")))
}

/// Installs the global subscriber: fmt to stderr, so stdout stays clean for
/// breakdown output.
pub fn init(service_name: &str, fallback_filter: Option<&str>) -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let subscriber = Registry::default()
        .with(filter_from_env(fallback_filter))
        .with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!(service = service_name, version = env!("CARGO_PKG_VERSION"), "telemetry ready");
    Ok(())
}

fn histogram() -> Histogram<f64> {
    RECOMPUTE_MS
        .get_or_init(|| {
            global::meter("gold_pricing")
                .f64_histogram("recompute_duration_ms")
                .with_unit("ms")
                .with_description("Duration of one pricing recomputation in ms")
                .build()
        })
        .clone()
}

/// Runs `f` and records its duration under `op`.
pub fn time<F, T>(op: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = f();
    let ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram().record(ms, &[KeyValue::new("op", op)]);
    out
}

/// INFO span with a static name; the dynamic name goes in `span_name`.
pub fn make_info_span(name: &str, component: &str) -> tracing::Span {
    tracing::span!(
        target: "gold_pricing",
        Level::INFO,
        "op",
        span_name = %name,
        component = component
    )
}

//! Console logging with optional OpenTelemetry export.
//!
//! If `OTEL_EXPORTER_OTLP_ENDPOINT` is set and reachable, traces and logs are
//! also sent to the collector. Otherwise only console logging is used.

use anyhow::Context;
use opentelemetry::trace::TracerProvider;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::env;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_SERVICE_NAME: &str = "larder-server";
const DEFAULT_FILTER: &str = "info,larder_server=debug,larder_core=debug";

/// Keeps the exporters alive; flushes them on drop.
#[derive(Default)]
pub struct TelemetryGuard {
    trace_provider: Option<SdkTracerProvider>,
    log_provider: Option<SdkLoggerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.trace_provider.take() {
            if let Err(e) = provider.shutdown() {
                eprintln!("failed to shut down trace provider: {e}");
            }
        }
        if let Some(provider) = self.log_provider.take() {
            if let Err(e) = provider.shutdown() {
                eprintln!("failed to shut down log provider: {e}");
            }
        }
    }
}

/// Quick TCP check so a missing collector doesn't stall every export.
fn collector_reachable(endpoint: &str) -> bool {
    let host_port = endpoint
        .trim_start_matches("http://")
        .trim_start_matches("https://")
        .trim_end_matches('/');

    host_port
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .map(|addr| TcpStream::connect_timeout(&addr, Duration::from_millis(100)).is_ok())
        .unwrap_or(false)
}

pub fn init_telemetry() -> anyhow::Result<TelemetryGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = tracing_subscriber::fmt::layer();

    let endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .ok()
        .filter(|e| !e.is_empty());
    let reachable = endpoint.as_deref().map(collector_reachable).unwrap_or(false);

    let mut guard = TelemetryGuard::default();
    let mut otel_trace_layer = None;
    let mut otel_log_layer = None;
    let service_name =
        env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());

    if let (Some(endpoint), true) = (endpoint.as_deref(), reachable) {
        let resource = opentelemetry_sdk::Resource::builder()
            .with_service_name(service_name.clone())
            .build();

        let trace_exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .context("Failed to create OTLP trace exporter")?;

        let trace_provider = SdkTracerProvider::builder()
            .with_batch_exporter(trace_exporter)
            .with_resource(resource.clone())
            .build();

        let tracer = trace_provider.tracer(DEFAULT_SERVICE_NAME);
        opentelemetry::global::set_tracer_provider(trace_provider.clone());
        otel_trace_layer = Some(tracing_opentelemetry::layer().with_tracer(tracer));

        let log_exporter = opentelemetry_otlp::LogExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .context("Failed to create OTLP log exporter")?;

        let log_provider = SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build();

        otel_log_layer = Some(OpenTelemetryTracingBridge::new(&log_provider));

        guard.trace_provider = Some(trace_provider);
        guard.log_provider = Some(log_provider);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_trace_layer)
        .with(otel_log_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    match (endpoint, reachable) {
        (Some(endpoint), true) => tracing::info!(
            "OpenTelemetry enabled, exporting traces and logs to {} as {}",
            endpoint,
            service_name
        ),
        (Some(endpoint), false) => tracing::info!(
            "OpenTelemetry endpoint {} not reachable, using console logging only",
            endpoint
        ),
        (None, _) => {
            tracing::debug!("OTEL_EXPORTER_OTLP_ENDPOINT not set, using console logging only")
        }
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_collector_is_detected() {
        // Port 1 on localhost is essentially never listening.
        assert!(!collector_reachable("http://127.0.0.1:1"));
    }

    #[test]
    fn unparseable_endpoint_is_unreachable() {
        assert!(!collector_reachable("not a host"));
    }
}

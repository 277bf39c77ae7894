//! OpenTelemetry-based observability infrastructure.
//!
//! Provides metrics, traces, and structured logging via the OpenTelemetry
//! protocol (OTLP). Telemetry is fire-and-forget: nothing here can affect
//! a pipeline outcome.

use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::{MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use photobook_error::{PhotobookResult, ServerError, ServerErrorKind};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Configuration for observability infrastructure.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// OTLP endpoint for traces and metrics (e.g., "http://localhost:4318")
    pub otlp_endpoint: String,
    /// Log level filter (e.g., "info", "debug")
    pub log_level: String,
    /// Enable JSON-formatted logs for production
    pub json_logs: bool,
    /// Service name identifier
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: "http://localhost:4318".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            service_name: "photobook-server".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Handles to the installed providers, for graceful shutdown.
pub struct ObservabilityGuard {
    tracer_provider: SdkTracerProvider,
    meter_provider: SdkMeterProvider,
}

impl ObservabilityGuard {
    /// Flush pending traces and metrics and shut the providers down.
    pub fn shutdown(self) {
        if let Err(e) = self.tracer_provider.shutdown() {
            tracing::warn!(error = %e, "Tracer provider shutdown failed");
        }
        if let Err(e) = self.meter_provider.shutdown() {
            tracing::warn!(error = %e, "Meter provider shutdown failed");
        }
    }
}

/// Initialize the OpenTelemetry observability stack.
///
/// Sets up:
/// - Distributed tracing via OTLP
/// - Metrics export via OTLP
/// - Structured logging with trace correlation
///
/// # Errors
///
/// Returns an error if an exporter cannot be built or the log filter is
/// invalid.
pub fn init_observability(config: &ObservabilityConfig) -> PhotobookResult<ObservabilityGuard> {
    // Resource identifying this service
    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .with_attribute(KeyValue::new(
            "service.version",
            config.service_version.clone(),
        ))
        .build();

    // Tracing
    let span_exporter = SpanExporter::builder()
        .with_http()
        .with_endpoint(format!("{}/v1/traces", config.otlp_endpoint))
        .build()
        .map_err(|e| ServerError::new(ServerErrorKind::Observability(e.to_string())))?;

    let tracer_provider = SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();

    // Metrics
    let metric_exporter = MetricExporter::builder()
        .with_http()
        .with_endpoint(format!("{}/v1/metrics", config.otlp_endpoint))
        .build()
        .map_err(|e| ServerError::new(ServerErrorKind::Observability(e.to_string())))?;

    let meter_provider = SdkMeterProvider::builder()
        .with_periodic_exporter(metric_exporter)
        .with_resource(resource)
        .build();

    global::set_meter_provider(meter_provider.clone());

    // Tracing subscriber with trace correlation
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| ServerError::new(ServerErrorKind::Observability(e.to_string())))?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let tracer = tracer_provider.tracer(config.service_name.clone());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(OpenTelemetryLayer::new(tracer))
        .init();

    Ok(ObservabilityGuard {
        tracer_provider,
        meter_provider,
    })
}

//! Trace Export Config

use std::time::Duration;

use clap::Args;

/// OpenTelemetry trace export settings. Export is off unless `OTEL_ENABLED` is set.
#[derive(Debug, Args)]
pub struct TelemetryConfig {
    /// Export request traces over OTLP
    #[arg(long = "otel-enabled", env = "OTEL_ENABLED", default_value_t = false)]
    pub enabled: bool,

    /// Continue traces from incoming `traceparent` headers
    #[arg(
        long = "otel-parent-propagation",
        env = "OTEL_PARENT_PROPAGATION_ENABLED",
        default_value_t = false
    )]
    pub parent_propagation: bool,

    /// OTLP gRPC collector endpoint
    #[arg(
        long = "otel-endpoint",
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub endpoint: String,

    /// OTLP export timeout in seconds
    #[arg(
        long = "otel-timeout-seconds",
        env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS",
        default_value_t = 3_u64
    )]
    pub timeout_seconds: u64,

    /// Reported `service.name`
    #[arg(long = "otel-service-name", env = "OTEL_SERVICE_NAME", default_value = "storefront-json")]
    pub service_name: String,

    /// Reported `service.version`
    #[arg(
        long = "otel-service-version",
        env = "OTEL_SERVICE_VERSION",
        default_value = env!("CARGO_PKG_VERSION")
    )]
    pub service_version: String,

    /// Reported `deployment.environment.name`
    #[arg(
        long = "otel-environment",
        env = "OTEL_DEPLOYMENT_ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: String,

    /// Fraction of root traces to sample, clamped to [0.0, 1.0]
    #[arg(long = "otel-sample-ratio", env = "OTEL_TRACE_SAMPLE_RATIO", default_value_t = 1.0_f64)]
    pub sample_ratio: f64,
}

impl TelemetryConfig {
    pub fn export_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Parent contexts are only honoured while export is on.
    pub fn propagates_parent(&self) -> bool {
        self.enabled && self.parent_propagation
    }

    /// Sample ratio within [0.0, 1.0]; NaN samples everything.
    pub fn clamped_sample_ratio(&self) -> f64 {
        if self.sample_ratio.is_nan() {
            return 1.0;
        }

        self.sample_ratio.clamp(0.0, 1.0)
    }
}

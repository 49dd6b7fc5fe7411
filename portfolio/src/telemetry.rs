use anyhow::{Context, Result};
use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
    KeyValue,
};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{metrics::SdkMeterProvider, Resource};
use std::time::Duration;
use tracing::info;

/// Site telemetry metrics
pub struct SiteMetrics {
    // Hero headline
    pub roles_completed: Counter<u64>,

    // Contact form
    pub contact_dispatches: Counter<u64>,
    pub contact_latency: Histogram<f64>,

    // Navigation
    pub section_scrolls: Counter<u64>,
}

impl SiteMetrics {
    pub fn new(meter: &Meter) -> Self {
        let roles_completed = meter
            .u64_counter("portfolio.hero.roles_completed")
            .with_description("Roles typed out and deleted by the hero headline")
            .build();

        let contact_dispatches = meter
            .u64_counter("portfolio.contact.dispatches")
            .with_description("Contact form submissions by strategy and outcome")
            .build();

        let contact_latency = meter
            .f64_histogram("portfolio.contact.latency_ms")
            .with_description("Contact dispatch latency in milliseconds")
            .build();

        let section_scrolls = meter
            .u64_counter("portfolio.navigation.scrolls")
            .with_description("Section scroll requests")
            .build();

        Self {
            roles_completed,
            contact_dispatches,
            contact_latency,
            section_scrolls,
        }
    }

    pub fn record_role_completed(&self, role: &str) {
        self.roles_completed
            .add(1, &[KeyValue::new("role", role.to_string())]);
    }

    pub fn record_contact_dispatch(&self, strategy: &str, outcome: &str, duration_ms: f64) {
        let attrs = [
            KeyValue::new("strategy", strategy.to_string()),
            KeyValue::new("outcome", outcome.to_string()),
        ];
        self.contact_dispatches.add(1, &attrs);
        self.contact_latency.record(duration_ms, &attrs);
    }

    pub fn record_section_scroll(&self, section: &str, performed: bool) {
        self.section_scrolls.add(
            1,
            &[
                KeyValue::new("section", section.to_string()),
                KeyValue::new("performed", performed.to_string()),
            ],
        );
    }
}

/// Initialize OTLP metric export
pub fn init_metrics(endpoint: Option<String>, service_name: &str) -> Result<(SdkMeterProvider, SiteMetrics)> {
    let endpoint = endpoint.unwrap_or_else(|| "http://localhost:4318".to_string());

    info!("Initializing OTLP telemetry: endpoint={}", endpoint);

    let export_config = opentelemetry_otlp::ExportConfig {
        endpoint: Some(endpoint.clone()),
        timeout: Duration::from_secs(10),
        ..Default::default()
    };

    let exporter = opentelemetry_otlp::MetricExporter::builder()
        .with_http()
        .with_export_config(export_config)
        .build()
        .context("building OTLP metric exporter")?;

    let reader = opentelemetry_sdk::metrics::PeriodicReader::builder(
        exporter,
        opentelemetry_sdk::runtime::Tokio,
    )
    .with_interval(Duration::from_secs(30))
    .build();

    let resource = Resource::new(vec![
        KeyValue::new("service.name", service_name.to_string()),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = SdkMeterProvider::builder()
        .with_reader(reader)
        .with_resource(resource)
        .build();

    global::set_meter_provider(provider.clone());

    let meter = global::meter("portfolio");
    let metrics = SiteMetrics::new(&meter);

    Ok((provider, metrics))
}

pub fn shutdown_metrics(provider: SdkMeterProvider) -> Result<()> {
    info!("Shutting down telemetry");
    provider
        .shutdown()
        .context("shutting down meter provider")?;
    Ok(())
}

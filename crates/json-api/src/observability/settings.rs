//! Request diagnostics settings, fixed once at startup.

use std::{sync::OnceLock, time::Duration};

use crate::config::observability::ObservabilityConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct RuntimeSettings {
    /// Requests slower than this are logged at `warn`.
    pub(super) slow_request_threshold: Duration,

    /// Adopt an incoming `traceparent` as the request span's parent.
    pub(super) propagate_parent: bool,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            slow_request_threshold: Duration::from_secs(1),
            propagate_parent: false,
        }
    }
}

impl From<&ObservabilityConfig> for RuntimeSettings {
    fn from(config: &ObservabilityConfig) -> Self {
        Self {
            slow_request_threshold: Duration::from_millis(config.slow_request_threshold_ms),
            propagate_parent: config.otel_enabled && config.otel_parent_propagation_enabled,
        }
    }
}

static SETTINGS: OnceLock<RuntimeSettings> = OnceLock::new();

/// Later calls are ignored.
pub(super) fn install(config: &ObservabilityConfig) {
    let _first = SETTINGS.set(RuntimeSettings::from(config));
}

pub(super) fn current() -> RuntimeSettings {
    SETTINGS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(otel_enabled: bool, propagation: bool, threshold_ms: u64) -> ObservabilityConfig {
        ObservabilityConfig {
            otel_enabled,
            otel_parent_propagation_enabled: propagation,
            otel_exporter_otlp_endpoint: "http://localhost:4317".to_string(),
            otel_exporter_otlp_timeout_seconds: 3,
            otel_service_name: "storefront-json".to_string(),
            otel_service_version: "test".to_string(),
            otel_deployment_environment: "test".to_string(),
            otel_trace_sample_ratio: 1.0,
            slow_request_threshold_ms: threshold_ms,
        }
    }

    #[test]
    fn propagation_requires_export() {
        assert!(!RuntimeSettings::from(&config(false, true, 1_000)).propagate_parent);
        assert!(RuntimeSettings::from(&config(true, true, 1_000)).propagate_parent);
    }

    #[test]
    fn threshold_is_read_in_milliseconds() {
        assert_eq!(
            RuntimeSettings::from(&config(true, false, 250)).slow_request_threshold,
            Duration::from_millis(250)
        );
    }
}

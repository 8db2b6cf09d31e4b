use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use stylematch::config::{AppConfig, DataConfig};
use stylematch::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Table locations for one-shot CLI commands.
pub(crate) fn data_config() -> Result<DataConfig, AppError> {
    Ok(AppConfig::load()?.data)
}

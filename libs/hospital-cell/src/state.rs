use std::sync::Arc;

use tokio::sync::RwLock;

use shared_config::AppConfig;

use crate::services::HospitalService;

/// Shared handler state. Every store lives behind the one lock, so a
/// registration, booking or bill runs to completion before the next mutation.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub hospital: Arc<RwLock<HospitalService>>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, hospital: HospitalService) -> Self {
        Self {
            config,
            hospital: Arc::new(RwLock::new(hospital)),
        }
    }

    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let hospital = HospitalService::from_config(&config);
        Self::new(config, hospital)
    }
}

use std::sync::Arc;

use thiserror::Error;

use crate::bramon::{ApiError, BramonClient};
use crate::radiants::{RadiantCatalog, RadiantError};

use super::config::Config;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("BRAMON client: {0}")]
    Client(#[from] ApiError),
    #[error("radiant catalog: {0}")]
    Radiants(#[from] RadiantError),
}

/// Read-only state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: BramonClient,
    pub radiants: Arc<RadiantCatalog>,
}

impl AppState {
    /// Build the HTTP client and load the radiant catalog named in `config`.
    pub fn from_config(config: Config) -> Result<Self, StateError> {
        let radiants = RadiantCatalog::load(&config.gallery.radiants_file)?;
        Self::new(config, radiants)
    }

    pub fn new(config: Config, radiants: RadiantCatalog) -> Result<Self, StateError> {
        if config.bramon.api_key.is_empty() {
            log::warn!("No BRAMON API key configured; requests will likely be rejected");
        }
        let client = BramonClient::new(&config.bramon)?;

        Ok(AppState {
            config: Arc::new(config),
            client,
            radiants: Arc::new(radiants),
        })
    }
}

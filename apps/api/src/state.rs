use crate::config::Config;
use crate::storage::TransientStorage;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Request-scoped file storage rooted at `config.upload_dir`.
    pub storage: TransientStorage,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let storage = TransientStorage::new(config.upload_dir.clone());
        Self { config, storage }
    }
}

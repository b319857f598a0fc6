use std::sync::Arc;

use crate::blueprint::OptionCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub catalog: Arc<OptionCatalog>,
}

impl AppState {
    pub fn new(catalog: OptionCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

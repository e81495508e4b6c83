use std::sync::Arc;

use crate::application::services::ShortenerService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    /// Base for returned short URLs; `None` means derive it from `Host`.
    pub public_base_url: Option<String>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>, public_base_url: Option<String>) -> Self {
        Self {
            shortener,
            public_base_url,
        }
    }
}

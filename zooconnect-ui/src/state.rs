//! Shared application state for the UI server.

use std::sync::Arc;

use zooconnect::catalog::Catalog;
use zooconnect::io::config::SiteConfig;
use zooconnect::io::media::MediaLoader;

use crate::pages::Pages;

/// Shared state accessible from all request handlers.
///
/// Everything here is read-only after start-up.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<SiteConfig>,
    pub media: Arc<MediaLoader>,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: SiteConfig) -> Self {
        let media = MediaLoader::new(&config.media);
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            media: Arc::new(media),
            pages: Arc::new(Pages::new()),
        }
    }
}

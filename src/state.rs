//! Shared state injected into every handler.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::UrlService;
use crate::domain::access_event::AccessEvent;

/// Handler state: the alias service and the sending half of the access queue.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub access_sender: mpsc::Sender<AccessEvent>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, access_sender: mpsc::Sender<AccessEvent>) -> Self {
        Self {
            url_service,
            access_sender,
        }
    }
}

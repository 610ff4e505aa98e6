use std::sync::Arc;

use crate::collaborators::{CallInitiator, DeliveryGateway, ProfileGateway};
use crate::interview::question::QuestionGenerator;
use crate::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every collaborator is built once at startup and swappable for a test double.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
    pub profiles: Arc<dyn ProfileGateway>,
    pub questions: Arc<dyn QuestionGenerator>,
    pub delivery: Arc<dyn DeliveryGateway>,
    pub calls: Arc<dyn CallInitiator>,
}

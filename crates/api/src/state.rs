use std::sync::Arc;

use meritbadge_core::criteria::CriteriaRegistry;

use crate::config::ServerConfig;
use crate::store::ProjectStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The immutable criteria registry, loaded once at startup.
    pub registry: Arc<CriteriaRegistry>,
    /// In-memory project store.
    pub store: Arc<ProjectStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

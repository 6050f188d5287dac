//! Route definitions for the criteria catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::criteria;
use crate::state::AppState;

/// Criteria routes mounted at `/criteria`.
///
/// ```text
/// GET /    -> list_criteria
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(criteria::list_criteria))
}

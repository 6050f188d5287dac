pub mod badges;
pub mod criteria;
pub mod health;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /criteria                     criteria catalog (public)
///
/// /projects                     list, create
/// /projects/{id}                get, update, delete
/// /projects/{id}/score          live-preview score report
/// ```
///
/// Badge and health routes are mounted at the root by `main.rs`:
///
/// ```text
/// /health                       service health
/// /projects/{id}/badge.svg      project badge
/// /badges/{input}               static badge (level name or 0-99)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/criteria", criteria::router())
        .nest("/projects", projects::router())
}

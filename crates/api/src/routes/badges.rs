//! Route definitions for SVG badges.
//!
//! Badge routes live at the root (not under `/api/v1`) so that README
//! embeds get short, stable URLs.

use axum::routing::get;
use axum::Router;

use crate::handlers::badges;
use crate::state::AppState;

/// Badge routes mounted at the root.
///
/// ```text
/// GET /projects/{id}/badge.svg   -> project_badge
/// GET /badges/{input}            -> static_badge (level name or 0-99)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects/{id}/badge.svg", get(badges::project_badge))
        .route("/badges/{input}", get(badges::static_badge))
}

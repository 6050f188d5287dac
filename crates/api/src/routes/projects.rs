//! Route definitions for project CRUD and scoring.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes mounted at `/projects`.
///
/// ```text
/// GET    /             -> list_projects
/// POST   /             -> create_project
/// GET    /{id}         -> get_project
/// PATCH  /{id}         -> update_project
/// DELETE /{id}         -> delete_project
/// GET    /{id}/score   -> get_score
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/{id}",
            get(projects::get_project)
                .patch(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/{id}/score", get(projects::get_score))
}

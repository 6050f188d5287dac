//! Handlers serving SVG badges.

use axum::extract::{Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::IntoResponse;

use meritbadge_core::badge::{self, BadgeInput};
use meritbadge_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// GET /projects/{id}/badge.svg
///
/// The project's current badge: an in-progress percentage badge until
/// passing is reached, then the highest achieved level badge. Served with
/// `no-cache` since the score changes as answers are edited.
pub async fn project_badge(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = state.store.get(id).await?;
    let input = BadgeInput::for_project(project.badge_level(), project.passing_percentage());

    Ok((
        [(CONTENT_TYPE, SVG_CONTENT_TYPE), (CACHE_CONTROL, "no-cache")],
        badge::render(input),
    ))
}

/// GET /badges/{input}
///
/// A static badge for a level name (`passing`, `silver`, `gold`) or a
/// percentage 0-99, with or without a `.svg` suffix. Static badges never
/// change, so they are cacheable for a long time. An unrenderable value is
/// a missing resource, not a client error.
pub async fn static_badge(Path(input): Path<String>) -> AppResult<impl IntoResponse> {
    let name = input.strip_suffix(".svg").unwrap_or(&input);
    let badge_input = BadgeInput::parse(name)
        .ok_or_else(|| AppError::NotFound(format!("No badge for '{name}'")))?;

    Ok((
        [
            (CONTENT_TYPE, SVG_CONTENT_TYPE),
            (CACHE_CONTROL, "public, max-age=864000"),
        ],
        badge::render(badge_input),
    ))
}

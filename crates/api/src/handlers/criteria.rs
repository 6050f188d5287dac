//! Handlers for the criteria catalog.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use indexmap::IndexMap;

use meritbadge_core::criteria::{Criterion, Level};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/criteria
///
/// The full catalog grouped by level, in catalog order. This is the data a
/// client-side evaluator mirror consumes; it includes the flags the scoring
/// rules depend on (category, na_allowed, met_url_required, ...).
pub async fn list_criteria(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut levels: IndexMap<&'static str, Vec<Criterion>> = IndexMap::new();
    for level in Level::ALL {
        levels.insert(level.name(), state.registry.criteria(level).to_vec());
    }

    Ok(Json(DataResponse { data: levels }))
}

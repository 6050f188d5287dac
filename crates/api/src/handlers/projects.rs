//! Handlers for project CRUD and scoring.
//!
//! Answer validation (unknown criterion names, disallowed N/A, malformed
//! justification text) happens here, before anything reaches the store, so
//! the evaluator never sees input the registry would reject.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use validator::Validate;

use meritbadge_core::criteria::Level;
use meritbadge_core::evaluator::{self, CriterionResult};
use meritbadge_core::project::{self, AnswerSet};
use meritbadge_core::sanitize;
use meritbadge_core::scoring::{self, Satisfaction};
use meritbadge_core::status::CriterionStatus;
use meritbadge_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::store::{NewProject, ProjectChanges};

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectBody {
    #[validate(length(min = 1, max = 254))]
    pub name: String,
    #[validate(length(max = 8192))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(custom(function = validate_url_field))]
    pub homepage_url: String,
    #[serde(default)]
    #[validate(custom(function = validate_url_field))]
    pub repo_url: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectBody {
    #[validate(length(min = 1, max = 254))]
    pub name: Option<String>,
    #[validate(length(max = 8192))]
    pub description: Option<String>,
    #[validate(custom(function = validate_url_field))]
    pub homepage_url: Option<String>,
    #[validate(custom(function = validate_url_field))]
    pub repo_url: Option<String>,
    /// Criterion answers merged into the existing set by name.
    pub answers: Option<AnswerSet>,
}

/// Project URLs may be traversed by the service, so they get the strict
/// pattern rather than the loose in-justification URL detection.
fn validate_url_field(value: &str) -> Result<(), validator::ValidationError> {
    if sanitize::url_acceptable(value) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("url"))
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/projects
///
/// Create a project. A homepage or repository URL is required.
pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<CreateProjectBody>,
) -> AppResult<impl IntoResponse> {
    body.validate()?;
    if body.homepage_url.is_empty() && body.repo_url.is_empty() {
        return Err(AppError::BadRequest(
            "A homepage or repository URL is required".to_string(),
        ));
    }

    let now = chrono::Utc::now();
    let project = state
        .store
        .insert(
            &state.registry,
            NewProject {
                name: body.name,
                description: body.description,
                homepage_url: body.homepage_url,
                repo_url: body.repo_url,
            },
            now,
        )
        .await;

    tracing::info!(project_id = project.id, name = %project.name, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = state.store.list().await;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = state.store.get(id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// PATCH /api/v1/projects/{id}
///
/// Update project metadata and/or criterion answers. Percentages and the
/// passing-transition timestamps are recomputed before the response.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateProjectBody>,
) -> AppResult<impl IntoResponse> {
    body.validate()?;
    if let Some(answers) = &body.answers {
        project::validate_answers(&state.registry, answers)?;
    }

    let changes = ProjectChanges {
        name: body.name,
        description: body.description,
        homepage_url: body.homepage_url,
        repo_url: body.repo_url,
        answers: body.answers,
    };

    let now = chrono::Utc::now();
    let updated = state.store.update(&state.registry, id, changes, now).await?;

    tracing::info!(
        project_id = id,
        passing_percentage = updated.passing_percentage(),
        badge_level = updated.badge_level(),
        "Project updated"
    );

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.store.remove(id).await?;
    tracing::info!(project_id = id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// One criterion's evaluation in a score report.
#[derive(Debug, Serialize)]
pub struct CriterionScore {
    pub status: CriterionStatus,
    pub result: CriterionResult,
    pub enough: bool,
}

/// The live-preview payload: everything the project form needs to paint
/// icons, panel headers, and the progress bar.
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub badge_level: &'static str,
    pub percentages: IndexMap<&'static str, u8>,
    pub satisfaction: IndexMap<&'static str, Satisfaction>,
    pub results: IndexMap<&'static str, IndexMap<String, CriterionScore>>,
}

/// GET /api/v1/projects/{id}/score
pub async fn get_score(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = state.store.get(id).await?;
    let registry = &state.registry;

    let mut percentages = IndexMap::new();
    let mut satisfaction = IndexMap::new();
    let mut results = IndexMap::new();

    for level in Level::ALL {
        percentages.insert(
            level.name(),
            scoring::badge_percentage(registry, level, &project.answers),
        );
        satisfaction.insert(
            level.name(),
            scoring::satisfaction(registry, level, &project.answers),
        );

        let mut level_results = IndexMap::new();
        for criterion in registry.active(level) {
            let answer = project.answers.get(&criterion.name);
            let status = answer.map(|a| a.status).unwrap_or_default();
            let justification = answer.and_then(|a| a.justification.as_deref());
            let result = evaluator::criterion_result(criterion, status, justification);
            level_results.insert(
                criterion.name.clone(),
                CriterionScore {
                    status,
                    result,
                    enough: result.is_enough(),
                },
            );
        }
        results.insert(level.name(), level_results);
    }

    let report = ScoreReport {
        badge_level: scoring::badge_level(&project.badge_percentages),
        percentages,
        satisfaction,
        results,
    };

    Ok(Json(DataResponse { data: report }))
}

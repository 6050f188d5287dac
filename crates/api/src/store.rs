//! In-memory project store.
//!
//! Stands in for the out-of-scope persistence layer: a `RwLock` around a
//! map of projects, with monotonically assigned ids. Badge percentages are
//! recomputed on every write so readers never see a stale score.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use meritbadge_core::criteria::CriteriaRegistry;
use meritbadge_core::error::CoreError;
use meritbadge_core::project::{AnswerSet, Project};
use meritbadge_core::types::{DbId, Timestamp};

/// Fields accepted when creating a project.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub homepage_url: String,
    pub repo_url: String,
}

/// Fields accepted when updating a project; `None` leaves a field alone.
/// Submitted answers are merged into the existing answer set by name.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub homepage_url: Option<String>,
    pub repo_url: Option<String>,
    pub answers: Option<AnswerSet>,
}

#[derive(Debug)]
struct StoreInner {
    next_id: DbId,
    projects: BTreeMap<DbId, Project>,
}

/// Concurrent project store shared by all handlers.
#[derive(Debug)]
pub struct ProjectStore {
    inner: RwLock<StoreInner>,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                next_id: 1,
                projects: BTreeMap::new(),
            }),
        }
    }

    /// Insert a new project and return it with its assigned id.
    pub async fn insert(
        &self,
        registry: &CriteriaRegistry,
        new: NewProject,
        now: Timestamp,
    ) -> Project {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let mut project = Project::new(
            id,
            new.name,
            new.description,
            new.homepage_url,
            new.repo_url,
            now,
        );
        project.update_badge_percentages(registry, now);
        inner.projects.insert(id, project.clone());
        project
    }

    /// All projects in id order.
    pub async fn list(&self) -> Vec<Project> {
        let inner = self.inner.read().await;
        inner.projects.values().cloned().collect()
    }

    pub async fn get(&self, id: DbId) -> Result<Project, CoreError> {
        let inner = self.inner.read().await;
        inner
            .projects
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })
    }

    /// Apply changes to a project, recomputing its badge percentages.
    ///
    /// Answers must already have been validated against the registry; the
    /// store merges them without re-checking.
    pub async fn update(
        &self,
        registry: &CriteriaRegistry,
        id: DbId,
        changes: ProjectChanges,
        now: Timestamp,
    ) -> Result<Project, CoreError> {
        let mut inner = self.inner.write().await;
        let project = inner.projects.get_mut(&id).ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;

        if let Some(name) = changes.name {
            project.name = name;
        }
        if let Some(description) = changes.description {
            project.description = Some(description);
        }
        if let Some(homepage_url) = changes.homepage_url {
            project.homepage_url = homepage_url;
        }
        if let Some(repo_url) = changes.repo_url {
            project.repo_url = repo_url;
        }
        if let Some(answers) = changes.answers {
            for (name, answer) in answers {
                project.answers.insert(name, answer);
            }
        }

        project.updated_at = now;
        project.update_badge_percentages(registry, now);
        Ok(project.clone())
    }

    pub async fn remove(&self, id: DbId) -> Result<(), CoreError> {
        let mut inner = self.inner.write().await;
        inner
            .projects
            .remove(&id)
            .map(|_| ())
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.projects.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

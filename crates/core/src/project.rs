//! Project answers and the project record.
//!
//! A project holds one (status, justification) pair per criterion name,
//! plus derived badge percentages. Persistence is out of scope here; the
//! api crate keeps projects in an in-memory store and calls back into this
//! module to validate answers and recompute scores.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::criteria::CriteriaRegistry;
use crate::error::CoreError;
use crate::sanitize;
use crate::scoring;
use crate::status::CriterionStatus;
use crate::types::{DbId, Timestamp};

/// Maximum length for a justification, in characters.
pub const MAX_TEXT_LENGTH: usize = 8192;

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// One submitted status+justification pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionAnswer {
    #[serde(default)]
    pub status: CriterionStatus,
    /// Free-text explanation; a missing value evaluates as empty.
    #[serde(default)]
    pub justification: Option<String>,
}

/// Criterion name -> answer, in submission order.
pub type AnswerSet = IndexMap<String, CriterionAnswer>;

/// Validate submitted answers against the registry before they are stored.
///
/// The criterion catalog and the answer names must be kept in lockstep by
/// the surrounding system; an unknown name is rejected loudly rather than
/// silently dropped. `N/A` is legal only where every level defining the
/// criterion allows it, since one answer feeds all levels.
pub fn validate_answers(
    registry: &CriteriaRegistry,
    answers: &AnswerSet,
) -> Result<(), CoreError> {
    for (name, answer) in answers {
        let levels = registry.levels_of(name).ok_or_else(|| {
            CoreError::Validation(format!("Unknown criterion '{name}'"))
        })?;

        if answer.status == CriterionStatus::Na {
            let allowed = levels.iter().all(|&level| {
                registry
                    .get(level, name)
                    .is_some_and(|criterion| criterion.na_allowed)
            });
            if !allowed {
                return Err(CoreError::Validation(format!(
                    "N/A is not an allowed status for criterion '{name}'"
                )));
            }
        }

        if let Some(justification) = &answer.justification {
            if justification.chars().count() > MAX_TEXT_LENGTH {
                return Err(CoreError::Validation(format!(
                    "Justification for '{name}' exceeds {MAX_TEXT_LENGTH} characters"
                )));
            }
            if !sanitize::text_acceptable(justification) {
                return Err(CoreError::Validation(format!(
                    "Justification for '{name}' contains disallowed control characters"
                )));
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A project being self-certified against the criteria catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub homepage_url: String,
    pub repo_url: String,
    pub answers: AnswerSet,
    /// Per-level percentages, lowest level first. Recomputed on every write.
    pub badge_percentages: Vec<u8>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// When the passing percentage first reached 100, if ever.
    pub achieved_passing_at: Option<Timestamp>,
    /// When the passing percentage last dropped back below 100, if ever.
    pub lost_passing_at: Option<Timestamp>,
}

impl Project {
    pub fn new(
        id: DbId,
        name: String,
        description: Option<String>,
        homepage_url: String,
        repo_url: String,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            description,
            homepage_url,
            repo_url,
            answers: AnswerSet::new(),
            badge_percentages: vec![0; crate::criteria::Level::ALL.len()],
            created_at: now,
            updated_at: now,
            achieved_passing_at: None,
            lost_passing_at: None,
        }
    }

    /// The display badge level; assumes `badge_percentages` is current.
    pub fn badge_level(&self) -> &'static str {
        scoring::badge_level(&self.badge_percentages)
    }

    pub fn passing_percentage(&self) -> u8 {
        self.badge_percentages.first().copied().unwrap_or(0)
    }

    /// Recompute all badge percentages from the current answers, tracking
    /// transitions of the passing percentage across the 100% boundary.
    pub fn update_badge_percentages(&mut self, registry: &CriteriaRegistry, now: Timestamp) {
        let old = self.passing_percentage();
        self.badge_percentages = scoring::badge_percentages(registry, &self.answers);
        self.update_passing_times(old, now);
    }

    fn update_passing_times(&mut self, old_percentage: u8, now: Timestamp) {
        let new_percentage = self.passing_percentage();
        if new_percentage == 100 && old_percentage < 100 {
            self.achieved_passing_at = Some(now);
        } else if new_percentage < 100 && old_percentage == 100 {
            self.lost_passing_at = Some(now);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

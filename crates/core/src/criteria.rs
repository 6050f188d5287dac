//! The criterion catalog: categories, badge levels, and the registry.
//!
//! The registry is an explicitly constructed, immutable value built once at
//! startup from a JSON catalog and passed by reference into the evaluator
//! and scoring functions. An empty or malformed catalog is a fatal
//! configuration error, not something evaluation tolerates silently.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The default criteria catalog compiled into the crate. A deployment may
/// substitute its own catalog file with the same shape.
pub const DEFAULT_CATALOG: &str = include_str!("../data/criteria.json");

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Importance tier of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Required for the badge at this level.
    Must,
    /// Strongly recommended; an honest unmet explanation can satisfy it.
    Should,
    /// Optional; any explicit answer satisfies it.
    Suggested,
}

impl Category {
    /// The catalog string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Must => "MUST",
            Self::Should => "SHOULD",
            Self::Suggested => "SUGGESTED",
        }
    }
}

/// A badge level. Each level's badge requires 100% of its own active
/// criteria plus 100% of all lower levels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Passing = 0,
    Silver = 1,
    Gold = 2,
}

impl Level {
    /// All levels, lowest first.
    pub const ALL: [Level; 3] = [Level::Passing, Level::Silver, Level::Gold];

    /// Zero-based level index (`passing` = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The level name used in catalogs, routes, and badge text.
    pub fn name(self) -> &'static str {
        match self {
            Self::Passing => "passing",
            Self::Silver => "silver",
            Self::Gold => "gold",
        }
    }

    /// Parse a level from its name, numeric form, or synonym
    /// (`bronze` = `passing`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "passing" | "bronze" | "0" => Some(Self::Passing),
            "silver" | "1" => Some(Self::Silver),
            "gold" | "2" => Some(Self::Gold),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Criterion
// ---------------------------------------------------------------------------

/// One checklist item a project is scored against.
#[derive(Debug, Clone, Serialize)]
pub struct Criterion {
    pub name: String,
    pub level: Level,
    pub category: Category,
    /// Present in the catalog but not yet enforced; excluded from both the
    /// numerator and denominator of every percentage.
    pub future: bool,
    /// Whether `N/A` is a legal status for this criterion.
    pub na_allowed: bool,
    /// Whether a `Met` status requires a URL in its justification.
    pub met_url_required: bool,
    /// Whether a `Met` status requires a minimum-length justification.
    pub met_justification_required: bool,
    /// Whether an `N/A` status requires a minimum-length justification.
    pub na_justification_required: bool,
}

/// Catalog entry shape: per-criterion fields without the name and level,
/// which come from the surrounding JSON structure.
#[derive(Debug, Deserialize)]
struct CriterionSpec {
    category: Category,
    #[serde(default)]
    future: bool,
    #[serde(default)]
    na_allowed: bool,
    #[serde(default)]
    met_url_required: bool,
    #[serde(default)]
    met_justification_required: bool,
    #[serde(default)]
    na_justification_required: bool,
}

/// Catalog file shape: level name -> criterion name -> fields, in
/// presentation order.
type Catalog = IndexMap<String, IndexMap<String, CriterionSpec>>;

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// The immutable criterion registry, grouped by level.
#[derive(Debug)]
pub struct CriteriaRegistry {
    levels: [Vec<Criterion>; 3],
    levels_by_name: HashMap<String, Vec<Level>>,
}

impl CriteriaRegistry {
    /// Build the registry from the compiled-in default catalog.
    pub fn embedded() -> Result<Self, CoreError> {
        Self::from_json_str(DEFAULT_CATALOG)
    }

    /// Build the registry from a JSON catalog string.
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let catalog: Catalog = serde_json::from_str(raw)
            .map_err(|e| CoreError::Config(format!("Malformed criteria catalog: {e}")))?;
        Self::from_catalog(catalog)
    }

    fn from_catalog(catalog: Catalog) -> Result<Self, CoreError> {
        let mut levels: [Vec<Criterion>; 3] = Default::default();
        let mut levels_by_name: HashMap<String, Vec<Level>> = HashMap::new();

        for (level_name, specs) in catalog {
            let level = Level::parse(&level_name).ok_or_else(|| {
                CoreError::Config(format!("Unknown criteria level '{level_name}'"))
            })?;

            for (name, spec) in specs {
                if name.is_empty() {
                    return Err(CoreError::Config(format!(
                        "Criterion with empty name at level '{level_name}'"
                    )));
                }
                if spec.na_justification_required && !spec.na_allowed {
                    return Err(CoreError::Config(format!(
                        "Criterion '{name}' requires an N/A justification but \
                         does not allow N/A"
                    )));
                }

                levels_by_name.entry(name.clone()).or_default().push(level);
                levels[level.index()].push(Criterion {
                    name,
                    level,
                    category: spec.category,
                    future: spec.future,
                    na_allowed: spec.na_allowed,
                    met_url_required: spec.met_url_required,
                    met_justification_required: spec.met_justification_required,
                    na_justification_required: spec.na_justification_required,
                });
            }
        }

        let registry = Self {
            levels,
            levels_by_name,
        };
        if registry.is_empty() {
            return Err(CoreError::Config(
                "Criteria catalog contains no criteria".to_string(),
            ));
        }
        Ok(registry)
    }

    /// All criteria at a level, in catalog order (including future ones).
    pub fn criteria(&self, level: Level) -> &[Criterion] {
        &self.levels[level.index()]
    }

    /// The criteria at a level that are currently enforced.
    pub fn active(&self, level: Level) -> impl Iterator<Item = &Criterion> {
        self.criteria(level).iter().filter(|c| !c.future)
    }

    /// Look up one criterion by level and name.
    pub fn get(&self, level: Level, name: &str) -> Option<&Criterion> {
        self.criteria(level).iter().find(|c| c.name == name)
    }

    /// The levels at which a criterion name appears, lowest first.
    pub fn levels_of(&self, name: &str) -> Option<&[Level]> {
        self.levels_by_name.get(name).map(Vec::as_slice)
    }

    /// Whether any level defines a criterion with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.levels_by_name.contains_key(name)
    }

    /// Total number of criterion entries across all levels.
    pub fn len(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Per-criterion status evaluation.
//!
//! `criterion_result` is a pure function of the criterion definition and the
//! submitted (status, justification) pair: no hidden state, no I/O. Any
//! client-side live preview of these rules must reproduce them exactly; the
//! contract-vector fixture under `tests/fixtures/` pins the behavior both
//! sides must satisfy.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::criteria::{Category, Criterion};
use crate::status::CriterionStatus;

/// Minimum justification length (in characters) for the Should-Unmet rule
/// and the justification-required flags.
pub const MIN_SHOULD_LENGTH: usize = 5;

/// The canonical URL detection pattern: scheme followed by at least five
/// non-space characters. Justification URLs are never traversed by the
/// service, so this is intentionally loose; contrast with the strict
/// [`crate::sanitize::url_acceptable`] applied to project URLs.
pub const URL_PATTERN: &str = r"https?://[^ ]{5}";

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Result enum
// ---------------------------------------------------------------------------

/// Outcome of evaluating one criterion. The UI maps these to
/// pass/partial/fail/question icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionResult {
    /// Met (or a permitted N/A) with all required justification present.
    Passing,
    /// Unmet, but acceptable: a Suggested criterion answered explicitly, or
    /// a Should criterion with an honest unmet explanation.
    Barely,
    /// Unmet on a Must criterion.
    Failing,
    /// Met, but the required URL is missing from the justification.
    UrlRequired,
    /// A required minimum-length justification is missing.
    JustificationRequired,
    /// Still at the default `?` status.
    Unknown,
}

impl CriterionResult {
    /// Whether this outcome satisfies the criterion for badge purposes.
    pub fn is_enough(self) -> bool {
        matches!(self, Self::Passing | Self::Barely)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Does the text contain a URL anywhere?
pub fn contains_url(text: &str) -> bool {
    URL_RE.is_match(text)
}

/// Is the justification long enough to count as an explanation?
pub fn justification_good(justification: &str) -> bool {
    justification.chars().count() >= MIN_SHOULD_LENGTH
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate one criterion. A missing justification is treated as empty.
///
/// Check order is significant: Unknown short-circuits first, then the
/// status-specific rules run against the coerced justification text.
pub fn criterion_result(
    criterion: &Criterion,
    status: CriterionStatus,
    justification: Option<&str>,
) -> CriterionResult {
    let justification = justification.unwrap_or("");
    match status {
        CriterionStatus::Unknown => CriterionResult::Unknown,
        CriterionStatus::Met => met_result(criterion, justification),
        CriterionStatus::Unmet => unmet_result(criterion, justification),
        CriterionStatus::Na => na_result(criterion, justification),
    }
}

fn met_result(criterion: &Criterion, justification: &str) -> CriterionResult {
    if criterion.met_url_required && !contains_url(justification) {
        CriterionResult::UrlRequired
    } else if criterion.met_justification_required && !justification_good(justification) {
        CriterionResult::JustificationRequired
    } else {
        CriterionResult::Passing
    }
}

fn unmet_result(criterion: &Criterion, justification: &str) -> CriterionResult {
    if criterion.category == Category::Suggested
        || (criterion.category == Category::Should && justification_good(justification))
    {
        CriterionResult::Barely
    } else if criterion.category == Category::Should {
        CriterionResult::JustificationRequired
    } else {
        CriterionResult::Failing
    }
}

fn na_result(criterion: &Criterion, justification: &str) -> CriterionResult {
    if criterion.na_justification_required && !justification_good(justification) {
        CriterionResult::JustificationRequired
    } else {
        CriterionResult::Passing
    }
}

/// Whether the (status, justification) pair satisfies the criterion.
pub fn enough(
    criterion: &Criterion,
    status: CriterionStatus,
    justification: Option<&str>,
) -> bool {
    criterion_result(criterion, status, justification).is_enough()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Aggregation of per-criterion verdicts into percentages and badge levels.

use serde::Serialize;

use crate::criteria::{CriteriaRegistry, Criterion, Level};
use crate::evaluator;
use crate::project::AnswerSet;
use crate::status::CriterionStatus;

/// Display levels walked by [`badge_level`], lowest first. `in_progress` is
/// the pre-passing display state, not a criteria level.
pub const BADGE_LEVELS: &[&str] = &["in_progress", "passing", "silver", "gold"];

// ---------------------------------------------------------------------------
// Percentage
// ---------------------------------------------------------------------------

/// Convert an enough-count into an integer percentage.
///
/// Returns 0 when `portion` is 0, which also covers an empty denominator.
pub fn to_percentage(portion: usize, total: usize) -> u8 {
    if portion == 0 {
        return 0;
    }
    ((portion as f64 * 100.0) / total as f64).round() as u8
}

fn answer_enough(criterion: &Criterion, answers: &AnswerSet) -> bool {
    match answers.get(&criterion.name) {
        Some(answer) => evaluator::enough(
            criterion,
            answer.status,
            answer.justification.as_deref(),
        ),
        None => evaluator::enough(criterion, CriterionStatus::Unknown, None),
    }
}

/// Percentage of a level's active criteria satisfied by the answers.
/// Future criteria are excluded from both numerator and denominator.
pub fn badge_percentage(
    registry: &CriteriaRegistry,
    level: Level,
    answers: &AnswerSet,
) -> u8 {
    let mut total = 0usize;
    let mut met = 0usize;
    for criterion in registry.active(level) {
        total += 1;
        if answer_enough(criterion, answers) {
            met += 1;
        }
    }
    to_percentage(met, total)
}

/// Percentages for every level, lowest first.
pub fn badge_percentages(registry: &CriteriaRegistry, answers: &AnswerSet) -> Vec<u8> {
    Level::ALL
        .iter()
        .map(|&level| badge_percentage(registry, level, answers))
        .collect()
}

/// Whether every active criterion at the level is satisfied.
/// Short-circuits on the first failure; there is no partial credit here.
pub fn badge_achieved(
    registry: &CriteriaRegistry,
    level: Level,
    answers: &AnswerSet,
) -> bool {
    registry.active(level).all(|c| answer_enough(c, answers))
}

// ---------------------------------------------------------------------------
// Badge level
// ---------------------------------------------------------------------------

/// Map per-level percentages to the display level name.
///
/// Walks `in_progress -> passing -> silver -> gold`, returning the first
/// entry whose percentage is below 100; a project that has completed every
/// level is gold.
pub fn badge_level(percentages: &[u8]) -> &'static str {
    for (index, level) in BADGE_LEVELS.iter().enumerate() {
        if index == percentages.len() {
            return level;
        }
        if percentages[index] < 100 {
            return level;
        }
    }
    BADGE_LEVELS[BADGE_LEVELS.len() - 1]
}

// ---------------------------------------------------------------------------
// Satisfaction summary
// ---------------------------------------------------------------------------

/// The red-to-green progress color for a 0.0..=1.0 completion fraction,
/// mirrored by the client-side progress bar.
pub fn progress_color(value: f64) -> String {
    let hue = (value * 120.0).round() as i32;
    format!("hsl({hue}, 100%, 50%)")
}

/// Per-level enough/total counts served to the client for panel headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Satisfaction {
    pub enough: usize,
    pub total: usize,
    pub text: String,
    pub color: String,
}

/// Compute the satisfaction summary for one level.
pub fn satisfaction(
    registry: &CriteriaRegistry,
    level: Level,
    answers: &AnswerSet,
) -> Satisfaction {
    let total = registry.active(level).count();
    let enough = registry
        .active(level)
        .filter(|c| answer_enough(c, answers))
        .count();
    Satisfaction {
        enough,
        total,
        text: format!("{enough}/{total}"),
        color: progress_color(enough as f64 / (total.max(1) as f64)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::CriterionAnswer;

    fn registry() -> CriteriaRegistry {
        CriteriaRegistry::from_json_str(
            r#"{
                "passing": {
                    "a_must": {"category": "MUST"},
                    "b_should": {"category": "SHOULD"},
                    "c_suggested": {"category": "SUGGESTED"},
                    "d_future": {"category": "MUST", "future": true}
                },
                "silver": {
                    "s_must": {"category": "MUST"}
                },
                "gold": {
                    "g_must": {"category": "MUST"}
                }
            }"#,
        )
        .unwrap()
    }

    fn met(name: &str) -> (String, CriterionAnswer) {
        (
            name.to_string(),
            CriterionAnswer {
                status: CriterionStatus::Met,
                justification: None,
            },
        )
    }

    // -- to_percentage --------------------------------------------------------

    #[test]
    fn percentage_zero_portion_is_zero() {
        assert_eq!(to_percentage(0, 10), 0);
        assert_eq!(to_percentage(0, 0), 0);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(to_percentage(2, 3), 67);
        assert_eq!(to_percentage(1, 3), 33);
        assert_eq!(to_percentage(3, 3), 100);
        assert_eq!(to_percentage(1, 2), 50);
    }

    // -- badge_percentage -----------------------------------------------------

    #[test]
    fn no_answers_scores_zero() {
        let registry = registry();
        let answers = AnswerSet::new();
        assert_eq!(badge_percentage(&registry, Level::Passing, &answers), 0);
    }

    #[test]
    fn future_criteria_excluded_from_denominator() {
        let registry = registry();
        // Three active criteria at passing; d_future does not count.
        let answers: AnswerSet = [met("a_must"), met("b_should"), met("c_suggested")]
            .into_iter()
            .collect();
        assert_eq!(badge_percentage(&registry, Level::Passing, &answers), 100);
    }

    #[test]
    fn future_criteria_excluded_from_numerator() {
        let registry = registry();
        let answers: AnswerSet = [met("d_future")].into_iter().collect();
        assert_eq!(badge_percentage(&registry, Level::Passing, &answers), 0);
    }

    #[test]
    fn partial_answers_round() {
        let registry = registry();
        let answers: AnswerSet = [met("a_must"), met("b_should")].into_iter().collect();
        assert_eq!(badge_percentage(&registry, Level::Passing, &answers), 67);
    }

    #[test]
    fn percentage_is_monotonic_in_single_flips() {
        let registry = registry();
        let mut answers: AnswerSet = [met("a_must")].into_iter().collect();
        let before = badge_percentage(&registry, Level::Passing, &answers);

        answers.insert(
            "b_should".to_string(),
            CriterionAnswer {
                status: CriterionStatus::Met,
                justification: None,
            },
        );
        let after = badge_percentage(&registry, Level::Passing, &answers);
        assert!(after >= before);
    }

    // -- badge_achieved -------------------------------------------------------

    #[test]
    fn achieved_requires_every_active_criterion() {
        let registry = registry();
        let mut answers: AnswerSet = [met("a_must"), met("b_should"), met("c_suggested")]
            .into_iter()
            .collect();
        assert!(badge_achieved(&registry, Level::Passing, &answers));

        // Flip one MUST back to Unknown.
        answers.insert(
            "a_must".to_string(),
            CriterionAnswer {
                status: CriterionStatus::Unknown,
                justification: None,
            },
        );
        assert!(!badge_achieved(&registry, Level::Passing, &answers));
    }

    // -- badge_level ----------------------------------------------------------

    #[test]
    fn badge_level_walks_levels_in_order() {
        assert_eq!(badge_level(&[50, 0, 0]), "in_progress");
        assert_eq!(badge_level(&[100, 40, 0]), "passing");
        assert_eq!(badge_level(&[100, 100, 99]), "silver");
        assert_eq!(badge_level(&[100, 100, 100]), "gold");
    }

    #[test]
    fn badge_level_with_no_levels_is_in_progress() {
        assert_eq!(badge_level(&[]), "in_progress");
    }

    // -- progress_color -------------------------------------------------------

    #[test]
    fn progress_color_spans_red_to_green() {
        assert_eq!(progress_color(0.0), "hsl(0, 100%, 50%)");
        assert_eq!(progress_color(0.5), "hsl(60, 100%, 50%)");
        assert_eq!(progress_color(1.0), "hsl(120, 100%, 50%)");
    }

    // -- satisfaction ---------------------------------------------------------

    #[test]
    fn satisfaction_counts_and_text() {
        let registry = registry();
        let answers: AnswerSet = [met("a_must")].into_iter().collect();
        let s = satisfaction(&registry, Level::Passing, &answers);
        assert_eq!(s.enough, 1);
        assert_eq!(s.total, 3);
        assert_eq!(s.text, "1/3");
        assert_eq!(s.color, progress_color(1.0 / 3.0));
    }

    #[test]
    fn satisfaction_of_empty_level_does_not_divide_by_zero() {
        let registry = CriteriaRegistry::from_json_str(
            r#"{"passing": {"only": {"category": "MUST"}}}"#,
        )
        .unwrap();
        let s = satisfaction(&registry, Level::Gold, &AnswerSet::new());
        assert_eq!(s.text, "0/0");
        assert_eq!(s.color, progress_color(0.0));
    }
}

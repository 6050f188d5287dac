//! Replays the shared evaluator contract fixture.
//!
//! The fixture is the behavioral contract for the per-criterion scoring
//! rules. Any other implementation of these rules (a browser live preview,
//! a reporting script) must replay the same file and match every vector;
//! this test keeps the canonical implementation honest.

use serde::Deserialize;

use meritbadge_core::criteria::{Category, Criterion, Level};
use meritbadge_core::evaluator::{self, CriterionResult, MIN_SHOULD_LENGTH, URL_PATTERN};
use meritbadge_core::status::CriterionStatus;

const FIXTURE: &str = include_str!("fixtures/contract_vectors.json");

#[derive(Deserialize)]
struct Fixture {
    url_pattern: String,
    min_should_length: usize,
    vectors: Vec<Vector>,
}

#[derive(Deserialize)]
struct Vector {
    name: String,
    criterion: CriterionFields,
    status: String,
    justification: Option<String>,
    result: String,
    enough: bool,
}

#[derive(Deserialize)]
struct CriterionFields {
    category: Category,
    #[serde(default)]
    na_allowed: bool,
    #[serde(default)]
    met_url_required: bool,
    #[serde(default)]
    met_justification_required: bool,
    #[serde(default)]
    na_justification_required: bool,
}

impl CriterionFields {
    fn to_criterion(&self, name: &str) -> Criterion {
        Criterion {
            name: name.to_string(),
            level: Level::Passing,
            category: self.category,
            future: false,
            na_allowed: self.na_allowed,
            met_url_required: self.met_url_required,
            met_justification_required: self.met_justification_required,
            na_justification_required: self.na_justification_required,
        }
    }
}

fn load_fixture() -> Fixture {
    serde_json::from_str(FIXTURE).expect("contract fixture parses")
}

fn result_name(result: CriterionResult) -> &'static str {
    match result {
        CriterionResult::Passing => "passing",
        CriterionResult::Barely => "barely",
        CriterionResult::Failing => "failing",
        CriterionResult::UrlRequired => "url_required",
        CriterionResult::JustificationRequired => "justification_required",
        CriterionResult::Unknown => "unknown",
    }
}

#[test]
fn fixture_pins_the_canonical_constants() {
    let fixture = load_fixture();
    assert_eq!(fixture.url_pattern, URL_PATTERN);
    assert_eq!(fixture.min_should_length, MIN_SHOULD_LENGTH);
}

#[test]
fn every_vector_matches_the_evaluator() {
    let fixture = load_fixture();
    assert!(fixture.vectors.len() >= 25, "fixture looks truncated");

    for vector in &fixture.vectors {
        let criterion = vector.criterion.to_criterion(&vector.name);
        let status = CriterionStatus::parse_lenient(&vector.status);
        let justification = vector.justification.as_deref();

        let result = evaluator::criterion_result(&criterion, status, justification);
        assert_eq!(
            result_name(result),
            vector.result,
            "vector '{}' produced {:?}",
            vector.name,
            result
        );
        assert_eq!(
            result.is_enough(),
            vector.enough,
            "vector '{}' enough mismatch",
            vector.name
        );
    }
}

#[test]
fn vectors_are_idempotent() {
    let fixture = load_fixture();
    for vector in &fixture.vectors {
        let criterion = vector.criterion.to_criterion(&vector.name);
        let status = CriterionStatus::parse_lenient(&vector.status);
        let justification = vector.justification.as_deref();

        let first = evaluator::criterion_result(&criterion, status, justification);
        let second = evaluator::criterion_result(&criterion, status, justification);
        assert_eq!(first, second, "vector '{}' not idempotent", vector.name);
    }
}

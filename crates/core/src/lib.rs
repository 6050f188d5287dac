//! Domain logic for the meritbadge best-practices badge service.
//!
//! This crate is pure: no I/O, no async, no web types. The HTTP layer in
//! `meritbadge-api` loads a [`criteria::CriteriaRegistry`] once at startup
//! and passes it by reference into the evaluation and scoring functions
//! here. Everything in this crate is safe to call concurrently from any
//! number of request-handling tasks.

pub mod badge;
pub mod criteria;
pub mod error;
pub mod evaluator;
pub mod project;
pub mod sanitize;
pub mod scoring;
pub mod status;
pub mod types;

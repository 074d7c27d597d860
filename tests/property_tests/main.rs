//! Property-based tests for the funnel estimator
//!
//! These tests generate arbitrary but valid industries, scenarios and
//! configurations and check that every estimate keeps its ordering,
//! flooring and rounding guarantees.

mod funnel_invariants;

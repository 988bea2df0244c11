//! Cross-area validation scenarios.
//!
//! Tests cover:
//! - Result algebra (validity, merge order, repeatability)
//! - SRD boundaries for point buy, multiclassing, and spell levels
//! - Findings that must never block a character

mod result_rules;

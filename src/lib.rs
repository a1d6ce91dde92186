//! Loan application evaluation with differential bias probing.
//!
//! The crate evaluates loan applications against fixed financial
//! thresholds, extracts applications from free-text prompts on a
//! best-effort basis, probes the evaluation pipeline for sensitivity to
//! protected attributes, and renders mitigation guidance.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

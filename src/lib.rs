//! # bean-patch
//!
//! A one-shot, idempotent source patcher that adds JavaBean-style getters to
//! generated Java classes exposing record-style accessors.
//!
//! ## Architecture
//!
//! - **scan**: candidate source file discovery under the configured roots
//! - **extract**: structural pattern match of record-style accessor declarations
//! - **naming**: bean-style getter name derivation
//! - **synth**: marker comment and getter block generation
//! - **insert**: block placement before the class's final closing brace
//! - **patch**: per-file pipeline and outcome classification
//! - **report**: per-file status lines and machine-readable run summary
//! - **cli**: command-line interface

pub mod cli;
pub mod extract;
pub mod insert;
pub mod naming;
pub mod patch;
pub mod report;
pub mod scan;
pub mod synth;

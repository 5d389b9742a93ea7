//! Conformance engine for jobcheck contracts.
//!
//! Compares what a job script's handler reads and returns against its
//! declared contract and produces findings:
//! - E001: no entry handler found
//! - E002: spread in a returned object
//! - E003: computed key in a returned object
//! - E004: input used but undeclared
//! - E005: output declared but not produced
//! - E006: output produced but undeclared
//! - W001: input declared but unused
//! - W002: outputs unverifiable due to non-literal return

pub mod codes;
pub mod comparator;
pub mod engine;
pub mod scan;
pub mod types;

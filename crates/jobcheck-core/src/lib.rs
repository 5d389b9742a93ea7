//! Core types, contract loading, and configuration for jobcheck.
//!
//! This crate provides the foundational data structures used across all jobcheck crates:
//! - [`types`] — The declared [`Contract`](types::Contract) of a job script
//! - [`contract`] — Contract loading and JSON Schema validation
//! - [`config`] — Configuration loading from `.jobcheck/jobcheck.json`

pub mod config;
pub mod contract;
pub mod types;

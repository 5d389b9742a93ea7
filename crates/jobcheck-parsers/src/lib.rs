//! Syntax-level analysis of job scripts.
//!
//! - [`treesitter`] parses JavaScript/TypeScript sources into trees.
//! - [`handler`] locates the exported entry handler.
//! - [`params`] and [`returns`] infer which input fields the handler reads
//!   and which output fields it returns, behind the [`collector::Collector`] trait.
//! - [`walker`] discovers job scripts and their contracts on disk.

pub mod collector;
pub mod handler;
pub mod params;
pub mod returns;
pub(crate) mod syntax;
pub mod treesitter;
pub mod walker;

//! Common types and utilities for the algotrace instrumenter.
//!
//! This crate provides foundational types used across all algotrace crates:
//! - Common enums (`NewLineKind`)
//! - Parser and walker limits
//! - Line/column positions for diagnostics
//! - Diagnostics shared by the parser, the instrumenter and the CLI

// Common types - Shared constants to break circular dependencies
pub mod common;
pub use common::NewLineKind;

// Centralized limits and thresholds
pub mod limits;

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Diagnostics
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

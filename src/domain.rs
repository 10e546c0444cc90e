//! Domain models for dependency extraction.
//!
//! This module contains the token cleaning rules, the document model, and
//! the dependency graph builder.

/// Package identifiers and the token cleaner.
pub mod identifier;
pub use identifier::{Identifier, clean};

/// Splitting of composite requirement entries.
pub mod requirement;
pub use requirement::{clean_requirement, split_requirement};

mod document;
pub use document::{Document, DocumentSource};

pub mod graph;
pub use graph::{BuildError, DependencyGraph, Edge, build};

//! Dependency graphs from RPM spec files
//!
//! Each spec file's `Requires` entries are cleaned into package identifiers
//! and recorded as `package -> requirement` edges, which can be written out as
//! a Graphviz DOT digraph.

pub mod domain;
pub use domain::{BuildError, DependencyGraph, Document, DocumentSource, Edge, Identifier, build};

/// Spec file loading and DOT output.
pub mod storage;
pub use storage::{LoadError, SpecFileLoader};

use std::path::Path;

use crate::storage::spec_file::LoadError;

/// The dependency-relevant view of one package metadata document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// The declared package name, uncleaned.
    pub name: String,
    /// Raw requirement entries, in declaration order.
    pub requires: Vec<String>,
}

impl Document {
    /// Creates a document from a name and its raw requirement entries.
    #[must_use]
    pub fn new<N, I, R>(name: N, requires: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            name: name.into(),
            requires: requires.into_iter().map(Into::into).collect(),
        }
    }
}

/// Something that can load a [`Document`] given its path.
///
/// The graph builder only depends on this trait, so callers can supply
/// documents from any format (or from memory, in tests).
pub trait DocumentSource {
    /// Loads the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be found, read, or parsed.
    fn load(&self, path: &Path) -> Result<Document, LoadError>;
}

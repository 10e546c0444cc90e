//! Loading package documents from RPM spec files.
//!
//! Only the main package preamble is read: every line up to the first section
//! directive (`%package`, `%description`, `%prep`, ...). Within it, the `Name`
//! tag gives the package name and each `Requires` tag (optionally qualified,
//! as in `Requires(post):`) contributes one raw requirement entry. Macros are
//! left unexpanded.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    sync::LazyLock,
};

use regex::Regex;

use crate::domain::{Document, DocumentSource};

/// Matches `Tag: value` and `Tag(qualifier): value` preamble lines.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tag>[A-Za-z][A-Za-z0-9]*)(?:\([^)]*\))?\s*:\s*(?P<value>\S.*?)\s*$")
        .expect("tag pattern is valid")
});

/// Directives that end the main package preamble.
const SECTIONS: &[&str] = &[
    "package",
    "description",
    "prep",
    "build",
    "install",
    "check",
    "clean",
    "files",
    "changelog",
    "pre",
    "post",
    "preun",
    "postun",
    "pretrans",
    "posttrans",
    "verifyscript",
    "triggerin",
    "triggerun",
    "triggerpostun",
];

/// Errors that can occur when loading a document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document was not found.
    #[error("document not found")]
    NotFound,
    /// An I/O error occurred.
    #[error("failed to read document")]
    Io(#[from] io::Error),
    /// The preamble has no `Name` tag.
    #[error("no 'Name' tag found in the package preamble")]
    MissingName,
}

/// The dependency-relevant contents of an RPM spec file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecFile {
    name: String,
    requires: Vec<String>,
}

impl SpecFile {
    /// Parses a spec file from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read (including invalid UTF-8)
    /// or if the preamble declares no package name.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut name = None;
        let mut requires = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if is_section(line) {
                break;
            }
            if line.is_empty() || line.starts_with('#') || line.starts_with('%') {
                continue;
            }

            let Some(captures) = TAG.captures(line) else {
                continue;
            };
            let value = &captures["value"];

            match &captures["tag"] {
                tag if tag.eq_ignore_ascii_case("name") => name = Some(value.to_string()),
                tag if tag.eq_ignore_ascii_case("requires") => requires.push(value.to_string()),
                _ => {}
            }
        }

        let name = name.ok_or(LoadError::MissingName)?;
        Ok(Self { name, requires })
    }

    /// Reads and parses the spec file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the file does not exist, and
    /// otherwise fails as [`SpecFile::read`] does.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|io_error| match io_error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound,
            _ => LoadError::Io(io_error),
        })?;

        Self::read(BufReader::new(file))
    }

    /// The declared package name, with macros unexpanded.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw `Requires` entries, in file order.
    #[must_use]
    pub fn requires(&self) -> &[String] {
        &self.requires
    }
}

impl From<SpecFile> for Document {
    fn from(spec: SpecFile) -> Self {
        let SpecFile { name, requires } = spec;
        Self { name, requires }
    }
}

/// A [`DocumentSource`] that reads RPM spec files from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecFileLoader;

impl DocumentSource for SpecFileLoader {
    fn load(&self, path: &Path) -> Result<Document, LoadError> {
        SpecFile::load(path).map(Document::from)
    }
}

fn is_section(line: &str) -> bool {
    let Some(directive) = line.strip_prefix('%') else {
        return false;
    };
    let word = directive
        .split(|c: char| c.is_whitespace())
        .next()
        .unwrap_or_default();
    SECTIONS.contains(&word)
}

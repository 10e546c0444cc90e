use std::{fmt, ops::Deref};

/// Version comparison operators, in the order they are checked.
///
/// `=` is checked before `>=` and `<=`, so any token containing either of
/// those is truncated at the `=` and keeps the leading `>` or `<`.
const VERSION_OPERATORS: [&str; 5] = ["=", ">=", ">", "<", "<="];

/// Substring rewrites applied after version truncation, in order.
const REWRITES: [(&str, &str); 8] = [
    ("(x86-32)", ""),
    ("-", "_"),
    ("(", ""),
    (")", ""),
    (".", ""),
    (",", ""),
    ("%{", ""),
    ("}", ""),
];

/// A normalised package name, used as a node label in the dependency graph.
///
/// Identifiers are compared by exact string equality. An identifier may be
/// empty if cleaning removed every character of the raw token.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Cleans a raw requirement token into a package [`Identifier`].
///
/// The token is first truncated before the first version operator found,
/// checking operators in the fixed order `=`, `>=`, `>`, `<`, `<=`. At most one
/// truncation happens. Then, in order: the `(x86-32)` architecture marker is
/// removed, hyphens become underscores, parentheses, dots and commas are
/// dropped, macro markers `%{` and `}` are dropped, and surrounding whitespace
/// is trimmed.
///
/// The steps do not commute, so their order is fixed.
///
/// ```
/// use specgraph::domain::identifier::clean;
///
/// assert_eq!(clean("pkg-name = 1.2.3"), "pkg_name");
/// assert_eq!(clean("glibc(x86-32)"), "glibc");
/// assert_eq!(clean("%{name}-devel"), "name_devel");
/// ```
#[must_use]
pub fn clean(token: &str) -> Identifier {
    let truncated = truncate_at_version(token);

    let rewritten = REWRITES
        .iter()
        .fold(truncated.to_string(), |acc, (from, to)| acc.replace(from, to));

    Identifier(rewritten.trim().to_string())
}

fn truncate_at_version(token: &str) -> &str {
    VERSION_OPERATORS
        .iter()
        .find_map(|op| token.find(op))
        .map_or(token, |pos| &token[..pos])
}

use crate::domain::identifier::{Identifier, clean};

/// Splits a raw requirement entry into its comma-separated sub-tokens.
///
/// Sub-tokens are returned uncleaned, in the order they appear. An empty
/// entry yields a single empty sub-token.
#[must_use = "sub-tokens are produced lazily"]
pub fn split_requirement(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
}

/// Splits a raw requirement entry and cleans each sub-token.
#[must_use = "identifiers are produced lazily"]
pub fn clean_requirement(raw: &str) -> impl Iterator<Item = Identifier> + '_ {
    split_requirement(raw).map(clean)
}

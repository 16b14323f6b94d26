//! Field exclusion set: the names skipped during a structural comparison.

use std::collections::BTreeSet;

/// Set of field names to exclude from a structural comparison.
///
/// Order is irrelevant and duplicates are harmless. Names match by field name
/// alone, not by path: a nested field sharing a name with an excluded field is
/// excluded at every depth where the name occurs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    names: BTreeSet<String>,
}

impl FieldSet {
    /// Build a field set from a list of names (the call-site rendering of the
    /// original variadic parameter).
    pub fn new(names: &[&str]) -> Self {
        names.iter().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate the excluded names in deterministic (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for FieldSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

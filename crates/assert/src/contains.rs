//! Membership testing under field-excluding structural equality.

use assertkit_core::{FieldSet, StructuralEq, check_exclusions};

/// Whether any element of `haystack` is structurally equal to `needle`,
/// skipping every field whose name appears in `ignored_fields`.
///
/// Scans in order and short-circuits on the first match. An empty haystack
/// yields `false`.
///
/// # Panics
///
/// Same usage-error behavior as [`equals_ignoring_fields`]: panics on an
/// invalid exclusion request, even when the haystack is empty.
///
/// [`equals_ignoring_fields`]: crate::equals_ignoring_fields
pub fn contains_ignoring_fields<T>(haystack: &[T], needle: &T, ignored_fields: &[&str]) -> bool
where
    T: StructuralEq,
{
    let excluded = FieldSet::new(ignored_fields);
    if let Err(err) = check_exclusions::<T>(&excluded) {
        panic!("{err}");
    }

    haystack
        .iter()
        .any(|element| element.structural_eq(needle, &excluded))
}

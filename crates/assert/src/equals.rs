//! Deep structural equality with named-field exclusion.

use assertkit_core::{FieldSet, StructuralEq, check_exclusions};

/// Deep structural equality between `actual` and `expected`, skipping every
/// field whose name appears in `ignored_fields`.
///
/// Exclusion matches by field name at every nesting depth, not by path: a
/// nested field sharing a name with an ignored field is skipped too. With no
/// ignored fields this is ordinary deep structural equality. Timestamp fields
/// compare by instant, independent of their zone representation.
///
/// # Panics
///
/// Panics when `ignored_fields` is non-empty and the shape of `T` has no named
/// fields, or when an ignored name does not occur anywhere within `T`'s shape.
/// Both indicate a mistake in the calling test, not a runtime condition.
pub fn equals_ignoring_fields<T>(actual: &T, expected: &T, ignored_fields: &[&str]) -> bool
where
    T: StructuralEq,
{
    let excluded = FieldSet::new(ignored_fields);
    if let Err(err) = check_exclusions::<T>(&excluded) {
        panic!("{err}");
    }

    let equal = actual.structural_eq(expected, &excluded);
    if !equal {
        tracing::trace!(ignored = ?ignored_fields, "structural comparison found a difference");
    }
    equal
}

//! Structural equality engine with named-field exclusion.
//!
//! Comparison is driven by the [`StructuralEq`] trait: leaves (scalars,
//! timestamps) compare by value, containers recurse, and record types opt in
//! via [`impl_structural_eq!`](crate::impl_structural_eq), which threads the
//! exclusion set through every field comparison.

use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone};

use crate::error::UsageError;
use crate::field_set::FieldSet;

/// Deep structural equality with named-field exclusion.
///
/// Implementations must be pure: no mutation of either operand, no side
/// effects, result depending only on the two values and the exclusion set.
pub trait StructuralEq {
    /// Compare `self` against `other`, treating every field whose name is in
    /// `excluded` as equal, at every nesting depth where the name occurs.
    fn structural_eq(&self, other: &Self, excluded: &FieldSet) -> bool;

    /// Record every named field reachable from this shape.
    ///
    /// Leaves (scalars, timestamps) contribute nothing; containers delegate to
    /// their element shape; record types contribute their own field names and
    /// recurse into each field's shape.
    fn collect_field_names(out: &mut BTreeSet<&'static str>) {
        let _ = out;
    }
}

/// Validate an exclusion set against the shape of `T`.
///
/// An empty set is always valid. A non-empty set is a usage error when `T`
/// exposes no named fields at all, or when an excluded name does not occur
/// anywhere within `T`'s shape.
pub fn check_exclusions<T>(excluded: &FieldSet) -> Result<(), UsageError>
where
    T: StructuralEq + ?Sized,
{
    if excluded.is_empty() {
        return Ok(());
    }

    let mut reachable = BTreeSet::new();
    T::collect_field_names(&mut reachable);

    for name in excluded.iter() {
        if reachable.is_empty() {
            return Err(UsageError::shape_has_no_fields(name));
        }
        if !reachable.contains(name) {
            return Err(UsageError::unknown_field(name));
        }
    }

    Ok(())
}

/// Implement [`StructuralEq`] for a record type by listing its named fields.
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Order {
///     reference: String,
///     created_at: DateTime<Utc>,
/// }
///
/// impl_structural_eq!(Order { reference: String, created_at: DateTime<Utc> });
/// ```
///
/// Every listed field participates in comparison unless its name appears in
/// the exclusion set; the field types must implement [`StructuralEq`]
/// themselves so nested records, sequences and timestamps recurse correctly.
#[macro_export]
macro_rules! impl_structural_eq {
    ($t:ty { $($field:ident: $fty:ty),+ $(,)? }) => {
        impl $crate::StructuralEq for $t {
            fn structural_eq(&self, other: &Self, excluded: &$crate::FieldSet) -> bool {
                true $(
                    && (excluded.contains(stringify!($field))
                        || $crate::StructuralEq::structural_eq(
                            &self.$field,
                            &other.$field,
                            excluded,
                        ))
                )+
            }

            fn collect_field_names(out: &mut ::std::collections::BTreeSet<&'static str>) {
                $(
                    out.insert(stringify!($field));
                    <$fty as $crate::StructuralEq>::collect_field_names(out);
                )+
            }
        }
    };
}

macro_rules! impl_structural_eq_leaf {
    ($($t:ty),+ $(,)?) => {
        $(
            impl StructuralEq for $t {
                fn structural_eq(&self, other: &Self, _excluded: &FieldSet) -> bool {
                    self == other
                }
            }
        )+
    };
}

impl_structural_eq_leaf!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    &str,
);

/// Timestamps are leaves: chrono's `DateTime` equality already compares the
/// zone-independent instant, which is exactly the required semantics. Their
/// internal representation exposes no named fields to the exclusion mechanism.
impl<Tz: TimeZone> StructuralEq for DateTime<Tz> {
    fn structural_eq(&self, other: &Self, _excluded: &FieldSet) -> bool {
        self == other
    }
}

impl<T: StructuralEq> StructuralEq for Option<T> {
    fn structural_eq(&self, other: &Self, excluded: &FieldSet) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.structural_eq(b, excluded),
            _ => false,
        }
    }

    fn collect_field_names(out: &mut BTreeSet<&'static str>) {
        T::collect_field_names(out);
    }
}

/// Sequences compare element-wise in order; lengths must match.
impl<T: StructuralEq> StructuralEq for [T] {
    fn structural_eq(&self, other: &Self, excluded: &FieldSet) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.structural_eq(b, excluded))
    }

    fn collect_field_names(out: &mut BTreeSet<&'static str>) {
        T::collect_field_names(out);
    }
}

impl<T: StructuralEq> StructuralEq for Vec<T> {
    fn structural_eq(&self, other: &Self, excluded: &FieldSet) -> bool {
        self.as_slice().structural_eq(other.as_slice(), excluded)
    }

    fn collect_field_names(out: &mut BTreeSet<&'static str>) {
        T::collect_field_names(out);
    }
}

impl<T: StructuralEq, const N: usize> StructuralEq for [T; N] {
    fn structural_eq(&self, other: &Self, excluded: &FieldSet) -> bool {
        self.as_slice().structural_eq(other.as_slice(), excluded)
    }

    fn collect_field_names(out: &mut BTreeSet<&'static str>) {
        T::collect_field_names(out);
    }
}

//! `assertkit-core` — structural comparison engine.
//!
//! This crate contains the **pure comparison machinery** behind the assertion
//! predicates in `assertkit`: the [`StructuralEq`] trait, the [`FieldSet`]
//! exclusion set, exclusion validation, and the [`impl_structural_eq!`] macro
//! that wires record types into the engine.

pub mod error;
pub mod field_set;
pub mod structural;

pub use error::UsageError;
pub use field_set::FieldSet;
pub use structural::{StructuralEq, check_exclusions};

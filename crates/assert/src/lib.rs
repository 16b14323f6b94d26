//! `assertkit` — assertion-support predicates for test suites.
//!
//! Three independent utilities, consumed as boolean predicates by whatever
//! assertion framework the calling test uses:
//!
//! - [`equals_ignoring_fields`]: deep structural equality that skips a set of
//!   named fields at any nesting depth.
//! - [`contains_ignoring_fields`]: membership testing under that same
//!   field-excluding equality.
//! - [`are_times_closer_than`]: whether two timestamps denote instants within
//!   a maximum allowed distance of each other.
//!
//! Record types participate in structural comparison via
//! [`impl_structural_eq!`].

pub mod contains;
pub mod equals;
pub mod time;

pub use assertkit_core::{FieldSet, StructuralEq, UsageError, impl_structural_eq};
pub use contains::contains_ignoring_fields;
pub use equals::equals_ignoring_fields;
pub use time::are_times_closer_than;

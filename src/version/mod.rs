//! Version specifier comparison, classification and selection
//!
//! Everything here is pure string-and-number work: no I/O, no registry
//! lookups. [`coerce`] decides whether a specifier names a comparable
//! version, [`range_score`] ranks comparator permissiveness, and
//! [`select_highest`] folds a dependency's specifiers into the one the
//! monorepo should converge on.

pub mod coerce;
pub mod range;
pub mod selector;

pub use coerce::coerce;
pub use range::{range_score, with_semver_range};
pub use selector::select_highest;

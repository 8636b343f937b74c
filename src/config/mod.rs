//! # Configuration Module
//!
//! Everything that decides what an invocation of versync will do, before
//! any manifest is read:
//!
//! - **CliOptions**: what the command line said ([`options`])
//! - **RcConfig**: what the rcfile says ([`rcfile`])
//! - **Resolved**: the merge of both over the hardcoded defaults
//!   ([`resolved`]), including the compiled semver and version groups
//!   ([`groups`])
//!
//! Each command then wraps the shared options in its own small config
//! struct (`ListConfig`, `FixConfig`, ...) carrying its flags.
//!
//! ## Example
//!
//! ```
//! use versync::config::resolved::Resolved;
//! use versync::config::options::CliOptions;
//! use versync::config::rcfile::RcConfig;
//!
//! // With nothing configured, every dependency type is in scope and the
//! // group lists hold just their catch-alls.
//! let resolved = Resolved::from_layers(&RcConfig::default(), &CliOptions::default())?;
//! assert_eq!(resolved.dependency_types.len(), 7);
//! assert_eq!(resolved.version_groups.group_count(), 1);
//! # Ok::<(), versync::error::VersyncError>(())
//! ```

pub mod fix;
pub mod format;
pub mod groups;
pub mod list;
pub mod mismatches;
pub mod options;
pub mod ranges;
pub mod rcfile;
pub mod resolved;

pub use fix::FixConfig;
pub use format::FormatConfig;
pub use list::ListConfig;
pub use mismatches::MismatchesConfig;
pub use options::CliOptions;
pub use ranges::RangesConfig;
pub use rcfile::RcConfig;
pub use resolved::Resolved;

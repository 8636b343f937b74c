//! Selection of the highest version specifier in a set
//!
//! Folds every specifier declared for one dependency name into the single
//! specifier the whole monorepo should converge on: the numerically highest
//! semver-shaped entry, with comparator permissiveness breaking ties. The
//! result is independent of input order.

use semver::Version;

use crate::constants::ranges;
use crate::version::coerce::coerce;
use crate::version::range::range_score;

/// Fold a sequence of specifiers into the one to converge on.
///
/// `*` is absorbing: once seen, the result is `*` no matter what follows.
/// Specifiers that do not coerce are skipped. Among the rest the highest
/// coerced version wins, and specifiers naming the same version are ranked
/// by [`range_score`]. An input with no `*` and nothing semver-shaped
/// (including an empty input) folds to the empty string, which callers must
/// treat as "no determinable target".
pub fn select_highest<I, S>(specifiers: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut highest = String::new();
    let mut highest_version: Option<Version> = None;

    for specifier in specifiers {
        let specifier = specifier.as_ref();
        if specifier == ranges::ANY || highest == ranges::ANY {
            highest = ranges::ANY.to_string();
            highest_version = None;
            continue;
        }
        let Some(version) = coerce(specifier) else {
            continue;
        };
        let adopt = match &highest_version {
            None => true,
            Some(current) => {
                version > *current
                    || (version == *current && range_score(specifier) > range_score(&highest))
            }
        };
        if adopt {
            highest = specifier.to_string();
            highest_version = Some(version);
        }
    }

    highest
}

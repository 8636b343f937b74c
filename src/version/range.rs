//! Comparator-range classification and rewriting
//!
//! Ranks a specifier's comparator class by how permissive it is, and rewrites
//! specifiers to carry a configured comparator. The rank only matters when
//! two specifiers name the same underlying version: the looser range wins,
//! because it is satisfied by a superset of what the narrower one accepts.

use crate::constants::ranges;
use crate::version::coerce::coerce;

/// Rank a specifier's comparator class from least (0) to most (8) permissive.
///
/// The table is `<` 0, `<=` 1, exact 2, `~` 3, any specifier containing
/// `.x` 4, `^` 5, `>=` 6, `>` 7, `*` 8. Checks run in a fixed order: the
/// `.x` test sits between the `^` and `~` prefix tests, so `^1.x.x` ranks 5
/// while `~1.x.x` ranks 4. Unclassifiable input ranks 0.
pub fn range_score(specifier: &str) -> u8 {
    if specifier.is_empty() {
        return 0;
    }
    if specifier == ranges::ANY {
        return 8;
    }
    match comparator_prefix(specifier) {
        ranges::GT => 7,
        ranges::GTE => 6,
        ranges::MINOR => 5,
        _ if specifier.contains(ranges::LOOSE) => 4,
        ranges::PATCH => 3,
        ranges::EXACT => 2,
        ranges::LTE => 1,
        ranges::LT => 0,
        _ => 0,
    }
}

/// Rewrite a semver-shaped specifier to carry the given comparator range.
///
/// Specifiers that do not coerce pass through untouched. The `*` range
/// replaces the specifier entirely and the `.x` range produces `major.x.x`;
/// every other range is prepended to the numeric part of the specifier,
/// with any `.x` segments pinned to `.0` first.
pub fn with_semver_range(range: &str, specifier: &str) -> String {
    let Some(version) = coerce(specifier) else {
        return specifier.to_string();
    };
    if range == ranges::ANY {
        return ranges::ANY.to_string();
    }
    if range == ranges::LOOSE {
        return format!("{}.x.x", version.major);
    }
    let tail = numeric_tail(specifier).replace(ranges::LOOSE, ".0");
    format!("{range}{tail}")
}

/// The characters before the first digit, or the whole string if it has none.
fn comparator_prefix(specifier: &str) -> &str {
    first_digit(specifier).map_or(specifier, |at| &specifier[..at])
}

fn numeric_tail(specifier: &str) -> &str {
    first_digit(specifier).map_or(specifier, |at| &specifier[at..])
}

fn first_digit(specifier: &str) -> Option<usize> {
    specifier.find(|c: char| c.is_ascii_digit())
}

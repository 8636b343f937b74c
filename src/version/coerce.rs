//! Coercion of loose version specifiers into comparable versions
//!
//! npm manifests declare versions in many shapes. Only a subset of them name
//! a concrete release that can be compared numerically:
//! - Exact: `1.2.3`
//! - Comparator-prefixed: `>=1.2.3`, `~1.2.3`, `^1.2.3`
//! - x-ranges: `1.x.x`, `1.2.x`
//!
//! URLs, git references, `file:` paths, dist tags such as `latest`, and
//! shorthand repository references (`expressjs/express`) name no release at
//! all and coerce to `None`.

use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

// Optional comparator followed by a major.minor.patch triple, anchored at
// the start so URLs with embedded versions do not slip through.
static SEMVER_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:<=|>=|<|>|~|\^)?(\d+)\.(\d+|x)\.(\d+|x)").unwrap());

/// Extract the comparable version a specifier names, if it names one.
///
/// An `x` segment counts as `0` and any pre-release or build text after the
/// triple is ignored, so `1.x.x` and `>=1.0.0-beta.1` both coerce to
/// `1.0.0`.
pub fn coerce(specifier: &str) -> Option<Version> {
    if specifier.contains(char::is_whitespace) {
        return None;
    }
    let captures = SEMVER_SHAPE.captures(specifier)?;
    Some(Version::new(
        segment(captures.get(1)?.as_str())?,
        segment(captures.get(2)?.as_str())?,
        segment(captures.get(3)?.as_str())?,
    ))
}

fn segment(text: &str) -> Option<u64> {
    if text == "x" {
        return Some(0);
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_version_coerces() {
        assert_eq!(coerce("1.2.3"), Some(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_comparator_prefixes_coerce() {
        assert_eq!(coerce("<1.0.0"), Some(Version::new(1, 0, 0)));
        assert_eq!(coerce("<=1.0.0"), Some(Version::new(1, 0, 0)));
        assert_eq!(coerce("~1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(coerce("^1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(coerce(">=1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(coerce(">1.2.3"), Some(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_x_segments_count_as_zero() {
        assert_eq!(coerce("1.x.x"), Some(Version::new(1, 0, 0)));
        assert_eq!(coerce("1.2.x"), Some(Version::new(1, 2, 0)));
    }

    #[test]
    fn test_prerelease_text_is_ignored() {
        assert_eq!(coerce("1.2.3-beta.1"), Some(Version::new(1, 2, 3)));
        assert_eq!(coerce(">=2.0.0-rc.1+build.5"), Some(Version::new(2, 0, 0)));
    }

    #[test]
    fn test_wildcard_does_not_coerce() {
        assert_eq!(coerce("*"), None);
    }

    #[test]
    fn test_non_semver_references_do_not_coerce() {
        let specifiers = [
            "http://asdf.com/asdf.tar.gz",
            "file:../foo/bar",
            "latest",
            "git+ssh://git@github.com:npm/cli.git#v1.0.27",
            "git+ssh://git@github.com:npm/cli#semver:^5.0",
            "git+https://isaacs@github.com/npm/cli.git",
            "git://github.com/npm/cli.git#v1.0.27",
            "expressjs/express",
            "mochajs/mocha#4727d357ea",
            "user/repo#feature/branch",
        ];
        for specifier in specifiers {
            assert_eq!(coerce(specifier), None, "{specifier} should not coerce");
        }
    }

    #[test]
    fn test_whitespace_does_not_coerce() {
        assert_eq!(coerce(">= 1.2.3"), None);
        assert_eq!(coerce("1.2.3 - 2.0.0"), None);
    }

    #[test]
    fn test_incomplete_triple_does_not_coerce() {
        assert_eq!(coerce("1"), None);
        assert_eq!(coerce("1.2"), None);
    }
}

//! Integration tests for versync using the library interface

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use versync::config::options::CliOptions;
use versync::config::{FixConfig, FormatConfig, RangesConfig};
use versync::disk::FsDisk;
use versync::executors::{fix, format, ranges};
use versync::input::get_input;
use versync::installations::{InstallationIndex, collect_installations};
use versync::reports::{JsonReportGenerator, ReportGenerator};

fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A yarn-style monorepo with two version mismatches (chalk, jest), one
/// dependency nobody can order (ancient), and one consistent dependency
/// (lodash).
fn create_monorepo(temp_dir: &TempDir) {
    let root = temp_dir.path();

    write_file(
        &root.join("package.json"),
        r#"{
  "name": "monorepo",
  "version": "1.0.0",
  "workspaces": ["packages/*"],
  "devDependencies": {
    "jest": "24.0.0"
  }
}
"#,
    );

    write_file(
        &root.join("packages/app/package.json"),
        r#"{
  "name": "app",
  "version": "0.1.0",
  "dependencies": {
    "chalk": "2.3.0",
    "lodash": "4.17.11",
    "ancient": "git+https://github.com/wheels/ancient.git"
  },
  "devDependencies": {
    "jest": "23.0.0"
  }
}
"#,
    );

    write_file(
        &root.join("packages/lib/package.json"),
        r#"{
  "name": "lib",
  "version": "0.2.0",
  "dependencies": {
    "chalk": "2.4.2",
    "lodash": "4.17.11",
    "ancient": "latest"
  }
}
"#,
    );
}

fn build_index(disk: &FsDisk, options: &CliOptions) -> InstallationIndex {
    let input = get_input(disk, options).unwrap();
    InstallationIndex::new(
        collect_installations(&input.manifests, &input.resolved),
        &input.resolved,
    )
}

#[test]
fn test_discovery_follows_the_workspaces_globs() {
    let temp_dir = TempDir::new().unwrap();
    create_monorepo(&temp_dir);
    let disk = FsDisk::with_cwd(temp_dir.path());

    let input = get_input(&disk, &CliOptions::default()).unwrap();

    let mut names: Vec<&str> = input
        .manifests
        .iter()
        .filter_map(|manifest| manifest.name())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["app", "lib", "monorepo"]);
}

#[test]
fn test_mismatch_detection_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    create_monorepo(&temp_dir);
    let disk = FsDisk::with_cwd(temp_dir.path());

    let index = build_index(&disk, &CliOptions::default());

    let mismatched: Vec<&str> = index
        .mismatched()
        .iter()
        .map(|bucket| bucket.name())
        .collect();
    assert_eq!(mismatched, vec!["ancient", "chalk", "jest"]);

    let chalk = index
        .buckets()
        .iter()
        .find(|bucket| bucket.name() == "chalk")
        .unwrap();
    assert_eq!(chalk.expected(), "2.4.2");

    let ancient = index
        .buckets()
        .iter()
        .find(|bucket| bucket.name() == "ancient")
        .unwrap();
    assert_eq!(ancient.expected(), "");
}

#[test]
fn test_json_report_round_trips_through_serde() {
    let temp_dir = TempDir::new().unwrap();
    create_monorepo(&temp_dir);
    let disk = FsDisk::with_cwd(temp_dir.path());

    let index = build_index(&disk, &CliOptions::default());
    let report = JsonReportGenerator::new(true).generate_report(&index).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(json["has_mismatches"], true);
    assert_eq!(json["mismatch_count"], 3);

    let chalk = json["dependencies"]
        .as_array()
        .unwrap()
        .iter()
        .find(|dependency| dependency["name"] == "chalk")
        .unwrap();
    assert_eq!(chalk["expected"], "2.4.2");
}

#[test]
fn test_fix_rewrites_only_the_disagreeing_manifests() {
    let temp_dir = TempDir::new().unwrap();
    create_monorepo(&temp_dir);
    let disk = FsDisk::with_cwd(temp_dir.path());
    let root_before = fs::read_to_string(temp_dir.path().join("package.json")).unwrap();
    let lib_before = fs::read_to_string(temp_dir.path().join("packages/lib/package.json")).unwrap();

    fix::run_with_disk(
        FixConfig {
            options: CliOptions::default(),
            dry_run: false,
        },
        &disk,
    )
    .unwrap();

    let app = fs::read_to_string(temp_dir.path().join("packages/app/package.json")).unwrap();
    assert!(app.contains(r#""chalk": "2.4.2""#));
    assert!(app.contains(r#""jest": "24.0.0""#));
    // unorderable and consistent dependencies are untouched
    assert!(app.contains(r#""ancient": "git+https://github.com/wheels/ancient.git""#));
    assert!(app.contains(r#""lodash": "4.17.11""#));

    // every winning specifier already lived in these two files
    let root_after = fs::read_to_string(temp_dir.path().join("package.json")).unwrap();
    let lib_after = fs::read_to_string(temp_dir.path().join("packages/lib/package.json")).unwrap();
    assert_eq!(root_before, root_after);
    assert_eq!(lib_before, lib_after);
}

#[test]
fn test_fix_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    create_monorepo(&temp_dir);
    let disk = FsDisk::with_cwd(temp_dir.path());

    fix::run_with_disk(
        FixConfig {
            options: CliOptions::default(),
            dry_run: false,
        },
        &disk,
    )
    .unwrap();

    let index = build_index(&disk, &CliOptions::default());
    let still_mismatched: Vec<&str> = index
        .mismatched()
        .iter()
        .map(|bucket| bucket.name())
        .collect();
    assert_eq!(still_mismatched, vec!["ancient"]);

    let app_after_first =
        fs::read_to_string(temp_dir.path().join("packages/app/package.json")).unwrap();

    fix::run_with_disk(
        FixConfig {
            options: CliOptions::default(),
            dry_run: false,
        },
        &disk,
    )
    .unwrap();

    let app_after_second =
        fs::read_to_string(temp_dir.path().join("packages/app/package.json")).unwrap();
    assert_eq!(app_after_first, app_after_second);
}

#[test]
fn test_fix_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    create_monorepo(&temp_dir);
    let disk = FsDisk::with_cwd(temp_dir.path());
    let before = fs::read_to_string(temp_dir.path().join("packages/app/package.json")).unwrap();

    fix::run_with_disk(
        FixConfig {
            options: CliOptions::default(),
            dry_run: true,
        },
        &disk,
    )
    .unwrap();

    let after = fs::read_to_string(temp_dir.path().join("packages/app/package.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_fix_narrowed_to_one_dependency_type() {
    let temp_dir = TempDir::new().unwrap();
    create_monorepo(&temp_dir);
    let disk = FsDisk::with_cwd(temp_dir.path());

    fix::run_with_disk(
        FixConfig {
            options: CliOptions {
                dev: true,
                ..Default::default()
            },
            dry_run: false,
        },
        &disk,
    )
    .unwrap();

    let app = fs::read_to_string(temp_dir.path().join("packages/app/package.json")).unwrap();
    assert!(app.contains(r#""jest": "24.0.0""#));
    // the prod mismatch is out of scope for a devDependencies-only run
    assert!(app.contains(r#""chalk": "2.3.0""#));
}

#[test]
fn test_format_orders_properties() {
    let temp_dir = TempDir::new().unwrap();
    write_file(
        &temp_dir.path().join("package.json"),
        r#"{"scripts": {"test": "jest"}, "version": "1.0.0", "dependencies": {"zod": "3.0.0", "axios": "1.0.0"}, "name": "messy", "keywords": ["zeta", "alpha"]}"#,
    );
    let disk = FsDisk::with_cwd(temp_dir.path());

    format::run_with_disk(
        FormatConfig {
            options: CliOptions {
                source: vec!["package.json".to_string()],
                ..Default::default()
            },
        },
        &disk,
    )
    .unwrap();

    let formatted = fs::read_to_string(temp_dir.path().join("package.json")).unwrap();
    assert_eq!(
        formatted,
        r#"{
  "name": "messy",
  "version": "1.0.0",
  "scripts": {
    "test": "jest"
  },
  "dependencies": {
    "axios": "1.0.0",
    "zod": "3.0.0"
  },
  "keywords": [
    "alpha",
    "zeta"
  ]
}
"#
    );
}

#[test]
fn test_format_leaves_a_formatted_file_alone() {
    let temp_dir = TempDir::new().unwrap();
    let contents = r#"{
  "name": "tidy",
  "version": "1.0.0"
}
"#;
    write_file(&temp_dir.path().join("package.json"), contents);
    let disk = FsDisk::with_cwd(temp_dir.path());

    format::run_with_disk(
        FormatConfig {
            options: CliOptions {
                source: vec!["package.json".to_string()],
                ..Default::default()
            },
        },
        &disk,
    )
    .unwrap();

    let after = fs::read_to_string(temp_dir.path().join("package.json")).unwrap();
    assert_eq!(contents, after);
}

#[test]
fn test_ranges_applies_the_configured_range_style() {
    let temp_dir = TempDir::new().unwrap();
    create_monorepo(&temp_dir);
    let disk = FsDisk::with_cwd(temp_dir.path());

    ranges::run_with_disk(
        RangesConfig {
            options: CliOptions {
                semver_range: Some("^".to_string()),
                ..Default::default()
            },
        },
        &disk,
    )
    .unwrap();

    let app = fs::read_to_string(temp_dir.path().join("packages/app/package.json")).unwrap();
    assert!(app.contains(r#""chalk": "^2.3.0""#));
    assert!(app.contains(r#""lodash": "^4.17.11""#));
    assert!(app.contains(r#""jest": "^23.0.0""#));
    // non-semver specifiers and the version property pass through untouched
    assert!(app.contains(r#""ancient": "git+https://github.com/wheels/ancient.git""#));
    assert!(app.contains(r#""version": "0.1.0""#));
}

#[test]
fn test_rcfile_source_patterns_drive_discovery() {
    let temp_dir = TempDir::new().unwrap();
    create_monorepo(&temp_dir);
    write_file(
        &temp_dir.path().join(".versyncrc.json"),
        r#"{"source": ["packages/app/package.json"]}"#,
    );
    let disk = FsDisk::with_cwd(temp_dir.path());

    let input = get_input(&disk, &CliOptions::default()).unwrap();

    assert_eq!(input.manifests.len(), 1);
    assert_eq!(input.manifests[0].name(), Some("app"));
}

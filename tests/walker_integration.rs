//! Integration tests for file selection over real directory trees.

use std::fs;
use std::path::{Path, PathBuf};

use paramlimit::{Limits, Options, Target, Walker};
use tempfile::TempDir;

/// Build a small Go module layout:
///
/// ```text
/// main.go  main_test.go  gen_models.go  README.md
/// pkg/util.go  pkg/deep/deep.go
/// vendor/dep/dep.go  testdata/fixture.go  .git/hooks/hook.go
/// ```
fn fixture_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let files = [
        "main.go",
        "main_test.go",
        "gen_models.go",
        "README.md",
        "pkg/util.go",
        "pkg/deep/deep.go",
        "vendor/dep/dep.go",
        "testdata/fixture.go",
        ".git/hooks/hook.go",
    ];
    for file in files {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "package x\n").unwrap();
    }

    temp
}

fn relative(root: &Path, files: Vec<PathBuf>) -> Vec<String> {
    files
        .into_iter()
        .map(|f| {
            f.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn collect(options: Options, target: Target) -> Vec<String> {
    let root = target.path.clone();
    let files = Walker::new(&options).collect_files(&target).unwrap();
    relative(&root, files)
}

#[test]
fn test_non_recursive_visits_root_files_only() {
    let temp = fixture_tree();
    let files = collect(
        Options::new(Limits::unlimited()),
        Target::new(temp.path(), false),
    );
    assert_eq!(files, vec!["gen_models.go", "main.go"]);
}

#[test]
fn test_recursive_skips_fixed_directories() {
    let temp = fixture_tree();
    let files = collect(
        Options::new(Limits::unlimited()),
        Target::new(temp.path(), true),
    );
    assert_eq!(
        files,
        vec!["gen_models.go", "main.go", "pkg/deep/deep.go", "pkg/util.go"]
    );
}

#[test]
fn test_recursive_option_applies_to_all_targets() {
    let temp = fixture_tree();
    let files = collect(
        Options::new(Limits::unlimited()).recursive(true),
        Target::new(temp.path(), false),
    );
    assert!(files.contains(&"pkg/util.go".to_string()));
}

#[test]
fn test_include_tests() {
    let temp = fixture_tree();
    let files = collect(
        Options::new(Limits::unlimited()).include_tests(true),
        Target::new(temp.path(), false),
    );
    assert_eq!(files, vec!["gen_models.go", "main.go", "main_test.go"]);
}

#[test]
fn test_exclude_patterns() {
    let temp = fixture_tree();
    let files = collect(
        Options::new(Limits::unlimited())
            .exclude_patterns(["gen_*.go", "deep.go"])
            .recursive(true),
        Target::new(temp.path(), false),
    );
    assert_eq!(files, vec!["main.go", "pkg/util.go"]);
}

#[test]
fn test_root_named_like_skipped_directory_is_visited() {
    let temp = fixture_tree();
    let vendor = temp.path().join("vendor");
    let files = collect(Options::new(Limits::unlimited()), Target::new(&vendor, true));
    assert_eq!(files, vec!["dep/dep.go"]);
}

#[test]
fn test_substituted_deny_list() {
    let temp = fixture_tree();
    let walker = Walker::new(&Options::new(Limits::unlimited())).with_skip_dirs(["pkg"]);
    let files = walker
        .collect_files(&Target::new(temp.path(), true))
        .unwrap();
    let files = relative(temp.path(), files);

    assert!(files.contains(&"vendor/dep/dep.go".to_string()));
    assert!(!files.iter().any(|f| f.starts_with("pkg/")));
}

#[test]
fn test_file_target_returned_as_is() {
    let temp = fixture_tree();
    let file = temp.path().join("README.md");
    let files = Walker::new(&Options::default())
        .collect_files(&Target::new(&file, false))
        .unwrap();
    assert_eq!(files, vec![file]);
}

#[test]
fn test_missing_target_is_error() {
    let temp = TempDir::new().unwrap();
    let result = Walker::new(&Options::default())
        .collect_files(&Target::new(temp.path().join("nope"), true));
    assert!(matches!(result, Err(paramlimit::Error::Io { .. })));
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_loop_is_not_followed() {
    use paramlimit::Runner;

    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("pkg")).unwrap();
    fs::write(root.join("pkg/a.go"), "package pkg\n\nfunc f(a, b int) {}\n").unwrap();
    std::os::unix::fs::symlink("..", root.join("pkg/loop")).unwrap();

    let files = collect(
        Options::new(Limits::unlimited()),
        Target::new(root, true),
    );
    assert_eq!(files, vec!["pkg/a.go"]);

    let summary = Runner::new(Options::new(Limits::uniform(1)))
        .run(&[Target::new(root, true)])
        .unwrap();
    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.issues.len(), 1);
}

//! Integration tests for dirtally


use assert_cmd::Command;
use dirtally::{OutputConfig, ScanConfig, Scanner, TreeReporter};
use harness::{TestTree, run_dirtally, two_files_one_subdir};
use predicates::prelude::*;

fn scan(tree: &TestTree) -> dirtally::ScanReport {
    let mut scanner = Scanner::new(ScanConfig::default());
    assert!(scanner.add_root(tree.path()));
    scanner.traverse()
}

#[test]
fn test_two_files_one_subdir_counts() {
    let tree = two_files_one_subdir();
    let report = scan(&tree);

    let root = report.get(tree.path()).expect("root recorded");
    assert_eq!((root.files, root.subdirs), (2, 1));
    let sub = report.get(&tree.path().join("S")).expect("S recorded");
    assert_eq!((sub.files, sub.subdirs), (0, 0));
    assert_eq!(report.total_files(), 2);
    assert_eq!(report.total_subdirectories(), 1);
}

#[test]
fn test_every_directory_recorded_once() {
    let tree = TestTree::new();
    tree.populate(3, 2, 2);
    let report = scan(&tree);

    // 1 + 2 + 4 + 8 directories, each holding 2 files
    assert_eq!(report.len(), 15);
    assert_eq!(report.total_files(), 30);
    let sum: usize = report.records().iter().map(|r| r.files).sum();
    assert_eq!(sum, report.total_files());
    assert_eq!(report.total_subdirectories(), 14);
}

#[test]
fn test_traverse_twice_matches() {
    let tree = TestTree::new();
    tree.populate(2, 3, 1);
    let mut scanner = Scanner::new(ScanConfig::default());
    scanner.add_root(tree.path());

    let first = scanner.traverse();
    let second = scanner.traverse();

    let mut a = first.records().to_vec();
    let mut b = second.records().to_vec();
    a.sort_by(|x, y| x.path.cmp(&y.path));
    b.sort_by(|x, y| x.path.cmp(&y.path));
    assert_eq!(a, b);
    assert_eq!(first.totals(), second.totals());
}

#[test]
fn test_add_root_file_and_missing_rejected() {
    let tree = TestTree::new();
    let file = tree.add_file("plain.txt", "x");
    let mut scanner = Scanner::new(ScanConfig::default());

    assert!(!scanner.add_root(&file));
    assert!(!scanner.add_root(tree.path().join("missing")));
    assert_eq!(scanner.roots().len(), 0);
}

#[test]
fn test_report_renders_tree() {
    let tree = two_files_one_subdir();
    let report = scan(&tree);
    let output = TreeReporter::new(OutputConfig::default())
        .format(&report)
        .unwrap();

    assert!(output.starts_with("Complete Directory Tree:\n"));
    assert!(output.contains("── S\n"));
    assert!(output.contains("└── Files: 2\n"));
    assert!(output.contains("Total Subdirectories: 1\n"));
    assert!(output.ends_with("Total Files: 2\n"));
}

#[test]
fn test_cli_basic_output() {
    let tree = two_files_one_subdir();

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &["."]);
    assert!(success, "dirtally should succeed");
    assert!(stdout.contains("Complete Directory Tree:"), "{}", stdout);
    assert!(stdout.contains("--- Directory Statistics ---"), "{}", stdout);
    assert!(stdout.contains("Total Root Directories: 1"), "{}", stdout);
    assert!(stdout.contains("Total Subdirectories: 1"), "{}", stdout);
    assert!(stdout.contains("Total Files: 2"), "{}", stdout);
    assert!(stdout.ends_with("Total directories: 1\nTotal files: 2\n"), "{}", stdout);
}

#[test]
fn test_cli_invalid_root_is_reported_and_skipped() {
    let tree = two_files_one_subdir();

    Command::cargo_bin("dirtally")
        .unwrap()
        .current_dir(tree.path())
        .args(["a.txt", "S"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid directory skipped:"))
        .stderr(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("Total Root Directories: 1"))
        .stdout(predicate::str::contains("Total directories: 1"));
}

#[test]
fn test_cli_summary_reports_registered_roots() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");
    tree.add_dir("S");

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.ends_with("Total directories: 1\nTotal files: 1\n"), "{}", stdout);

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &[".", "S"]);
    assert!(success);
    assert!(stdout.contains("Total directories: 2\n"), "{}", stdout);
}

#[test]
fn test_cli_json_output() {
    let tree = two_files_one_subdir();

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &[".", "--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["totals"]["files"], 2);
    assert_eq!(value["totals"]["directories"], 2);
    assert_eq!(value["totals"]["subdirectories"], 1);
    assert_eq!(value["directories"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_cli_order_flag() {
    let tree = TestTree::new();
    tree.add_dir("a/deep");
    tree.add_dir("b");

    let (by_path, _, ok) = run_dirtally(tree.path(), &[".", "--order", "path"]);
    assert!(ok);
    let (by_depth, _, ok) = run_dirtally(tree.path(), &[".", "--order", "depth"]);
    assert!(ok);

    // Path order keeps deep under a; depth order lists b before deep
    assert!(by_path.find("── deep").unwrap() < by_path.find("── b\n").unwrap());
    assert!(by_depth.find("── b\n").unwrap() < by_depth.find("── deep").unwrap());
}

#[test]
fn test_cli_no_color_codes_when_piped() {
    let tree = two_files_one_subdir();
    let (stdout, _stderr, success) = run_dirtally(tree.path(), &["."]);
    assert!(success);
    assert!(!stdout.contains('\x1b'), "piped output should not be colored");
}

#[test]
fn test_cli_rejects_unknown_order() {
    Command::cargo_bin("dirtally")
        .unwrap()
        .args(["--order", "size"])
        .assert()
        .failure();
}

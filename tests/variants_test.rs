//! Integration tests for `makewalk variants`

mod common;

use common::TestWorkspace;
use std::process::Command;

/// Helper to run makewalk variants
fn run_variants(workspace: &TestWorkspace, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_makewalk"));
    cmd.arg("-C").arg(workspace.path());
    cmd.arg("variants");
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute makewalk variants")
}

#[test]
fn test_variants_listed_in_order() {
    let workspace = TestWorkspace::new();
    workspace.write_variant_list(&["foo", "bar"]);

    let output = run_variants(&workspace, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "foo.mk\nbar.mk\n");
}

#[test]
fn test_variants_accumulate_across_lines() {
    let workspace = TestWorkspace::new();
    workspace.create_file(
        "__VariantConfig__/variant.mk",
        "VARIANTS := foo\nCC := qcc\nVARIANTS := bar\n",
    );

    let output = run_variants(&workspace, &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "foo.mk\nbar.mk\n");
}

#[test]
fn test_variants_json_output() {
    let workspace = TestWorkspace::new();
    workspace.write_variant_list(&["foo", "bar"]);

    let output = run_variants(&workspace, &["--json"]);

    assert!(output.status.success());
    let variants: Vec<String> =
        serde_json::from_slice(&output.stdout).expect("variants --json must emit valid JSON");
    assert_eq!(variants, vec!["foo.mk", "bar.mk"]);
}

#[test]
fn test_empty_variant_list_is_reported() {
    let workspace = TestWorkspace::new();
    workspace.create_file("__VariantConfig__/variant.mk", "CC := qcc\n");

    let output = run_variants(&workspace, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No variants"));
}

#[test]
fn test_missing_master_list_is_fatal() {
    let workspace = TestWorkspace::new();

    let output = run_variants(&workspace, &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("master variant list"), "stderr: {stderr}");
}

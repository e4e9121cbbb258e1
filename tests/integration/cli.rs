//! Tests for the `pdm` binary: argument handling, output, exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use crate::common::{build_zip, repo_artifact_path};

fn pdm() -> Command {
    Command::cargo_bin("pdm").unwrap()
}

#[test]
fn resolve_prints_the_canonical_name() {
    let repo = TempDir::new().unwrap();
    let artifact = repo_artifact_path(
        repo.path(),
        "com.jetbrains",
        "jbr",
        "17.0.1",
        "jbr-17.0.1.tar.gz",
    );
    fs::write(&artifact, b"").unwrap();

    pdm()
        .arg("resolve")
        .arg(&artifact)
        .arg("--runtime")
        .arg(&artifact)
        .assert()
        .success()
        .stdout("17.0.1\n");
}

#[test]
fn resolve_fails_for_unrecognized_artifacts() {
    let repo = TempDir::new().unwrap();
    let artifact = repo_artifact_path(repo.path(), "org.example", "thing", "1.0", "thing.zip");
    fs::write(&artifact, b"").unwrap();

    pdm()
        .arg("resolve")
        .arg(&artifact)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no recognized dependency set"));
}

#[test]
fn resolve_fails_with_parse_error_for_short_paths() {
    pdm()
        .arg("resolve")
        .arg("/short.zip")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown structure"));
}

#[test]
fn extract_populates_the_cache_dir_and_prints_the_target() {
    let work = TempDir::new().unwrap();
    let cache_root = TempDir::new().unwrap();
    let archive = work.path().join("dep.zip");
    build_zip(&archive, &[("lib/a.jar", b"a" as &[u8])]);

    let expected_target = cache_root.path().join("IC-2024.2");

    pdm()
        .arg("extract")
        .arg(&archive)
        .arg("--name")
        .arg("IC-2024.2")
        .arg("--cache-dir")
        .arg(cache_root.path())
        .assert()
        .success()
        .stdout(format!("{}\n", expected_target.display()));

    assert!(expected_target.join("lib/a.jar").exists());
    assert!(expected_target.join(".extracted").exists());

    // Second invocation is a cache hit and succeeds identically.
    pdm()
        .arg("extract")
        .arg(&archive)
        .arg("--name")
        .arg("IC-2024.2")
        .arg("--cache-dir")
        .arg(cache_root.path())
        .assert()
        .success();
}

#[test]
fn extract_honors_the_cache_dir_environment_variable() {
    let work = TempDir::new().unwrap();
    let cache_root = TempDir::new().unwrap();
    let archive = work.path().join("dep.zip");
    build_zip(&archive, &[("a.txt", b"a" as &[u8])]);

    pdm()
        .env("PDM_CACHE_DIR", cache_root.path())
        .arg("extract")
        .arg(&archive)
        .arg("--name")
        .arg("17.0.1")
        .assert()
        .success();

    assert!(cache_root.path().join("17.0.1/a.txt").exists());
}

#[test]
fn extract_requires_a_name_or_an_explicit_target() {
    pdm().arg("extract").arg("dep.zip").assert().failure();
}

#[test]
fn extract_rejects_unsupported_archive_types() {
    let work = TempDir::new().unwrap();
    let archive = work.path().join("dep.rar");
    fs::write(&archive, b"not an archive").unwrap();

    pdm()
        .arg("extract")
        .arg(&archive)
        .arg("--target-dir")
        .arg(work.path().join("target"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown archive type"));
}

#[test]
fn collect_prints_sorted_jar_paths() {
    let cache_root = TempDir::new().unwrap();
    let root = cache_root.path().join("com.jetbrains.plugins-tooling-1.0");
    for jar in ["pluginB/lib/z.jar", "pluginA/lib/x.jar"] {
        let path = root.join(jar);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
    }

    pdm()
        .arg("collect")
        .arg(&root)
        .assert()
        .success()
        .stdout(format!(
            "{}\n{}\n",
            root.join("pluginA/lib/x.jar").display(),
            root.join("pluginB/lib/z.jar").display()
        ));
}

#[test]
fn collect_fails_for_a_missing_plugin_container() {
    pdm()
        .arg("collect")
        .arg("/definitely/not/there/com.jetbrains.plugins-tooling-1.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn collect_of_an_sdk_root_without_lib_prints_nothing() {
    let dir = TempDir::new().unwrap();

    pdm()
        .arg("collect")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("");
}

//! End-to-end pipeline tests over real archives.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use pdm_cli::cache;
use pdm_cli::collector;
use pdm_cli::extractor;
use pdm_cli::resolver::{RecognizedPaths, TargetResolver};

use crate::common::{build_tar_gz, build_zip, relative_files, repo_artifact_path};

#[test]
fn platform_distribution_flows_through_all_three_stages() {
    let repo = TempDir::new().unwrap();
    let cache_root = TempDir::new().unwrap();

    // A platform SDK archive: lib jars, an excluded test-framework jar, the
    // bundled Ant distribution, and a product descriptor.
    let artifact = repo_artifact_path(
        repo.path(),
        "com.jetbrains.intellij.idea",
        "ideaIC",
        "2024.2",
        "ideaIC-2024.2.zip",
    );
    build_zip(
        &artifact,
        &[
            ("lib/app.jar", b"app bytes" as &[u8]),
            ("lib/util.jar", b"util bytes"),
            ("lib/junit.jar", b"bundled junit"),
            ("lib/ant/lib/ant.jar", b"ant bytes"),
            ("bin/idea.sh", b"#!/bin/sh"),
            (
                "product-info.json",
                br#"{"name":"IntelliJ IDEA","version":"2024.2","productCode":"IC"}"#,
            ),
        ],
    );

    // Stage 1: resolve.
    let resolver = TargetResolver::new(RecognizedPaths::new(
        [artifact.clone()],
        [],
        [],
    ));
    let name = resolver.resolve(&artifact).unwrap();
    assert_eq!(name, "IC-2024.2");

    // Stage 2: extract into <cache-root>/<name>.
    let target = cache::target_dir(cache_root.path(), &name);
    extractor::extract(&artifact, &target, None, None).unwrap();
    assert_eq!(fs::read(target.join("lib/app.jar")).unwrap(), b"app bytes");

    // Stage 3: collect.
    let jars = collector::collect(&target).unwrap();
    assert_eq!(
        jars,
        HashSet::from([
            target.join("lib/app.jar"),
            target.join("lib/util.jar"),
            target.join("lib/ant/lib/ant.jar"),
        ])
    );
}

#[test]
fn plugin_container_flows_through_all_three_stages() {
    let repo = TempDir::new().unwrap();
    let cache_root = TempDir::new().unwrap();

    // Default marketplace channel, so the canonical name starts with the
    // marketplace group and the collector routes it to the plugin branch.
    let artifact = repo_artifact_path(
        repo.path(),
        "com.jetbrains.plugins",
        "tooling",
        "1.2.3",
        "tooling-1.2.3.zip",
    );
    build_zip(
        &artifact,
        &[
            ("pluginA/lib/x.jar", b"x bytes" as &[u8]),
            ("pluginA/lib/y.txt", b"not a jar"),
            ("pluginB/lib/z.jar", b"z bytes"),
        ],
    );

    let resolver = TargetResolver::new(RecognizedPaths::new([], [artifact.clone()], []));
    let name = resolver.resolve(&artifact).unwrap();
    assert_eq!(name, "com.jetbrains.plugins-tooling-1.2.3");

    let target = cache::target_dir(cache_root.path(), &name);
    extractor::extract(&artifact, &target, None, None).unwrap();

    let jars = collector::collect(&target).unwrap();
    assert_eq!(
        jars,
        HashSet::from([
            target.join("pluginA/lib/x.jar"),
            target.join("pluginB/lib/z.jar"),
        ])
    );
}

#[test]
fn runtime_tarball_extracts_under_its_version() {
    let repo = TempDir::new().unwrap();
    let cache_root = TempDir::new().unwrap();

    let artifact = repo_artifact_path(
        repo.path(),
        "com.jetbrains",
        "jbr",
        "17.0.1",
        "jbr-17.0.1.tar.gz",
    );
    build_tar_gz(
        &artifact,
        &[
            ("bin/java", b"\x7fELF java" as &[u8]),
            ("lib/libjvm.so", b"\x7fELF jvm"),
        ],
    );

    let resolver = TargetResolver::new(RecognizedPaths::new([], [], [artifact.clone()]));
    let name = resolver.resolve(&artifact).unwrap();
    assert_eq!(name, "17.0.1");

    let target = cache::target_dir(cache_root.path(), &name);
    extractor::extract(&artifact, &target, None, None).unwrap();

    assert_eq!(
        relative_files(&target),
        vec![
            PathBuf::from(".extracted"),
            PathBuf::from("bin/java"),
            PathBuf::from("lib/libjvm.so"),
        ]
    );
}

#[test]
fn repeated_extraction_reuses_the_cache_across_stages() {
    let repo = TempDir::new().unwrap();
    let cache_root = TempDir::new().unwrap();

    let artifact = repo_artifact_path(
        repo.path(),
        "com.jetbrains.intellij.goland",
        "goland",
        "2024.1",
        "goland-2024.1.zip",
    );
    build_zip(&artifact, &[("lib/go.jar", b"go bytes" as &[u8])]);

    let resolver = TargetResolver::new(RecognizedPaths::new(
        [artifact.clone()],
        [],
        [],
    ));
    let name = resolver.resolve(&artifact).unwrap();
    let target = cache::target_dir(cache_root.path(), &name);

    extractor::extract(&artifact, &target, None, None).unwrap();

    // Mutate the extracted tree; a cache hit must not undo it.
    fs::write(target.join("lib/go.jar"), b"mutated").unwrap();

    // Resolving again yields the same name, and extracting again is a no-op.
    let name_again = resolver.resolve(&artifact).unwrap();
    assert_eq!(name_again, name);
    extractor::extract(&artifact, &target, None, None).unwrap();
    assert_eq!(fs::read(target.join("lib/go.jar")).unwrap(), b"mutated");

    // With a freshness validator and an untouched archive, still a no-op.
    let validator = |marker: &std::path::Path| cache::marker_is_fresh(marker, &artifact);
    extractor::extract(&artifact, &target, Some(&validator), None).unwrap();
    assert_eq!(fs::read(target.join("lib/go.jar")).unwrap(), b"mutated");
}

#[test]
fn failed_extraction_does_not_corrupt_other_targets() {
    let repo = TempDir::new().unwrap();
    let cache_root = TempDir::new().unwrap();

    let good = repo_artifact_path(repo.path(), "com.jetbrains", "jbr", "17.0.1", "jbr.tar.gz");
    build_tar_gz(&good, &[("bin/java", b"java" as &[u8])]);
    let good_target = cache::target_dir(cache_root.path(), "17.0.1");
    extractor::extract(&good, &good_target, None, None).unwrap();

    // An unsupported archive fails its own resolution...
    let bad = repo.path().join("dependency.rar");
    fs::write(&bad, b"not an archive").unwrap();
    let bad_target = cache::target_dir(cache_root.path(), "broken");
    assert!(extractor::extract(&bad, &bad_target, None, None).is_err());

    // ...while the neighboring target's cache state is untouched.
    assert!(good_target.join(".extracted").exists());
    assert_eq!(fs::read(good_target.join("bin/java")).unwrap(), b"java");
}

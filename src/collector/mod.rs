//! Classpath artifact collection over extracted dependency roots.
//!
//! [`collect`] walks an already-extracted (or directory-shaped) dependency
//! root and returns the set of `.jar` files that belong on the build
//! classpath. Two layouts are recognized:
//!
//! - **Plugin container** - the root's own name starts with the marketplace
//!   group literal, marking it as a container of plugin installations. Each
//!   immediate subdirectory is one plugin; its jars sit directly inside its
//!   `lib/` subdirectory. Nothing below `lib/` is descended into.
//! - **Platform SDK installation** - anything else. Jars come from the
//!   installation's `lib/` directory (minus bundled test-framework jars that
//!   would shadow project-declared versions) plus the bundled Ant
//!   distribution under `lib/ant/lib/`.
//!
//! Traversal is read-only; the result has set semantics, de-duplicated by
//! path identity, with no ordering guarantee.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{EXCLUDED_PLATFORM_JARS, LIBRARY_EXTENSION, MARKETPLACE_GROUP, PLUGIN_LIB_DIR};
use crate::core::PdmError;
use crate::models::ProductInfo;


/// Collect the classpath contribution of an extracted dependency root.
///
/// # Errors
///
/// Returns an error when directory traversal fails or when a present
/// `product-info.json` cannot be parsed. A missing `lib/` directory is not an
/// error; it yields an empty set.
pub fn collect(dependency_root: &Path) -> Result<HashSet<PathBuf>, PdmError> {
    let root_name = dependency_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if root_name.starts_with(MARKETPLACE_GROUP) {
        debug!(root = %dependency_root.display(), "Collecting plugin container jars");
        collect_plugin_jars(dependency_root)
    } else {
        debug!(root = %dependency_root.display(), "Collecting platform SDK jars");
        collect_platform_jars(dependency_root)
    }
}

/// Collect jars from a container of plugin installations.
///
/// Layout is `<root>/<plugin-dir>/lib/*.jar`, one level of `lib`, no
/// recursion.
fn collect_plugin_jars(container_root: &Path) -> Result<HashSet<PathBuf>, PdmError> {
    let mut jars = HashSet::new();

    for entry in fs::read_dir(container_root)? {
        let plugin_dir = entry?.path();
        if !plugin_dir.is_dir() {
            continue;
        }

        let lib_dir = plugin_dir.join(PLUGIN_LIB_DIR);
        if lib_dir.is_dir() {
            jars.extend(jars_directly_inside(&lib_dir)?);
        }
    }

    Ok(jars)
}

/// Collect the classpath jars of a platform SDK installation.
///
/// Mirrors the platform's own development-classpath convention: everything in
/// `lib/` except the bundled test-framework jars, plus the Ant jars under
/// `lib/ant/lib/`.
pub fn collect_platform_jars(installation_root: &Path) -> Result<HashSet<PathBuf>, PdmError> {
    if let Some(info) = ProductInfo::find(installation_root)? {
        debug!(
            product = %info.name,
            version = %info.version,
            "Detected platform product descriptor"
        );
    }

    let lib_dir = installation_root.join(PLUGIN_LIB_DIR);
    if !lib_dir.is_dir() {
        return Ok(HashSet::new());
    }

    let mut jars: HashSet<PathBuf> = jars_directly_inside(&lib_dir)?
        .into_iter()
        .filter(|jar| {
            jar.file_name()
                .map(|n| n.to_string_lossy())
                .is_none_or(|name| !EXCLUDED_PLATFORM_JARS.contains(&name.as_ref()))
        })
        .collect();

    let ant_lib_dir = lib_dir.join("ant").join(PLUGIN_LIB_DIR);
    if ant_lib_dir.is_dir() {
        jars.extend(jars_directly_inside(&ant_lib_dir)?);
    }

    Ok(jars)
}

/// List `.jar` files directly inside `dir`, non-recursively, files only.
fn jars_directly_inside(dir: &Path) -> Result<Vec<PathBuf>, PdmError> {
    let mut jars = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(LIBRARY_EXTENSION))
        {
            jars.push(path);
        }
    }
    Ok(jars)
}

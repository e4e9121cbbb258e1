//! Target resolution for extracted dependencies.
//!
//! Given the filesystem path of a resolved artifact, the [`TargetResolver`]
//! decides which kind of dependency it is and derives the canonical name of
//! the directory the artifact extracts into. The name embeds the artifact's
//! coordinates, so identical coordinates always resolve to the same target on
//! every run and every machine - the extractor's marker-file caching depends
//! on that determinism.
//!
//! # Classification
//!
//! The resolver does not inspect archive content. Classification is driven by
//! three externally supplied recognized-dependency sets, injected through the
//! [`DependencySets`] trait:
//!
//! | Membership | Kind | Canonical name |
//! |---|---|---|
//! | platform set | Platform SDK distribution | `<product-code>-<version>`, e.g. `IC-2024.2` |
//! | plugin set | Marketplace plugin | `<group>-<artifact>-<version>[@<channel>]` |
//! | runtime set | JetBrains Runtime | `<version>` |
//!
//! Membership is disjoint by construction; an artifact belonging to no set is
//! a classification failure, never a silent default.
//!
//! # Plugin channels
//!
//! Marketplace plugins encode their release channel in the group id. The
//! default channel publishes under exactly [`MARKETPLACE_GROUP`]; a named
//! channel prefixes it, e.g. `eap.com.jetbrains.plugins` is the `eap`
//! channel. Any other group id fails resolution even when the artifact was
//! pre-classified as a plugin.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{MARKETPLACE_GROUP, RUNTIME_ARTIFACT, RUNTIME_GROUP};
use crate::core::PdmError;
use crate::models::{Coordinates, PlatformType};


/// Membership predicates for the three recognized dependency sets.
///
/// Produced by the build-graph collaborator that resolved the dependencies in
/// the first place; the resolver only consumes membership, it never computes
/// it. Implementations must keep the three sets disjoint.
pub trait DependencySets {
    /// Whether `path` belongs to the platform distribution set.
    fn contains_platform(&self, path: &Path) -> bool;

    /// Whether `path` belongs to the platform plugin set.
    fn contains_plugin(&self, path: &Path) -> bool;

    /// Whether `path` belongs to the bundled runtime set.
    fn contains_runtime(&self, path: &Path) -> bool;
}

/// Path-set-backed [`DependencySets`] implementation.
///
/// The common case: the collaborator hands over three explicit path
/// collections and membership is plain set lookup.
#[derive(Debug, Default, Clone)]
pub struct RecognizedPaths {
    platform: HashSet<PathBuf>,
    plugins: HashSet<PathBuf>,
    runtimes: HashSet<PathBuf>,
}

impl RecognizedPaths {
    /// Build recognized sets from three path collections.
    pub fn new(
        platform: impl IntoIterator<Item = PathBuf>,
        plugins: impl IntoIterator<Item = PathBuf>,
        runtimes: impl IntoIterator<Item = PathBuf>,
    ) -> Self {
        Self {
            platform: platform.into_iter().collect(),
            plugins: plugins.into_iter().collect(),
            runtimes: runtimes.into_iter().collect(),
        }
    }
}

impl DependencySets for RecognizedPaths {
    fn contains_platform(&self, path: &Path) -> bool {
        self.platform.contains(path)
    }

    fn contains_plugin(&self, path: &Path) -> bool {
        self.plugins.contains(path)
    }

    fn contains_runtime(&self, path: &Path) -> bool {
        self.runtimes.contains(path)
    }
}

/// The kind of dependency an artifact was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A platform SDK distribution, e.g. an IntelliJ IDEA installation archive
    Platform,
    /// A marketplace plugin bundle
    Plugin,
    /// A bundled JetBrains Runtime
    Runtime,
}

/// Resolves the canonical extraction-target name for a dependency artifact.
///
/// Pure function over its inputs: no persisted state, no filesystem access
/// beyond reading the path string itself.
pub struct TargetResolver<S: DependencySets> {
    sets: S,
}

impl<S: DependencySets> TargetResolver<S> {
    /// Create a resolver over the given recognized dependency sets.
    pub const fn new(sets: S) -> Self {
        Self { sets }
    }

    /// Resolve the canonical target-directory name for `artifact_path`.
    ///
    /// # Errors
    ///
    /// - [`PdmError::CoordinateParse`] when the path does not encode
    ///   coordinates.
    /// - [`PdmError::Classification`] when the path belongs to no recognized
    ///   set, or belongs to one but fails its kind-specific validation.
    pub fn resolve(&self, artifact_path: &Path) -> Result<String, PdmError> {
        let coordinates = Coordinates::from_artifact_path(artifact_path)?;
        let kind = self.classify(artifact_path);
        debug!(
            artifact = %artifact_path.display(),
            %coordinates,
            ?kind,
            "Resolving extraction target"
        );

        let classification_failure = |reason: String| PdmError::Classification {
            path: artifact_path.display().to_string(),
            reason,
        };

        let name = match kind {
            Some(ArtifactKind::Platform) => {
                // Pre-classified as platform, but the coordinates still have
                // to match a known product. A miss here means the recognized
                // set and the platform table disagree.
                let platform = PlatformType::from_maven_coordinates(
                    &coordinates.group_id,
                    &coordinates.artifact_id,
                )
                .ok_or_else(|| {
                    classification_failure(format!(
                        "no known platform product for coordinates '{coordinates}'"
                    ))
                })?;
                format!("{platform}-{}", coordinates.version)
            }

            Some(ArtifactKind::Plugin) => {
                let channel = plugin_channel(&coordinates.group_id).ok_or_else(|| {
                    classification_failure(format!(
                        "group '{}' is not a marketplace plugin group",
                        coordinates.group_id
                    ))
                })?;
                let base = format!(
                    "{}-{}-{}",
                    coordinates.group_id, coordinates.artifact_id, coordinates.version
                );
                if channel.is_empty() {
                    base
                } else {
                    format!("{base}@{channel}")
                }
            }

            Some(ArtifactKind::Runtime) => {
                if coordinates.group_id != RUNTIME_GROUP
                    || coordinates.artifact_id != RUNTIME_ARTIFACT
                {
                    return Err(classification_failure(format!(
                        "runtime dependency has unexpected coordinates '{coordinates}', \
                         expected '{RUNTIME_GROUP}:{RUNTIME_ARTIFACT}'"
                    )));
                }
                coordinates.version
            }

            None => {
                return Err(classification_failure(
                    "artifact belongs to no recognized dependency set".to_string(),
                ));
            }
        };

        debug!(target = %name, "Resolved extraction target");
        Ok(name)
    }

    /// Classify an artifact by testing membership against the recognized sets.
    #[must_use]
    pub fn classify(&self, artifact_path: &Path) -> Option<ArtifactKind> {
        if self.sets.contains_platform(artifact_path) {
            Some(ArtifactKind::Platform)
        } else if self.sets.contains_plugin(artifact_path) {
            Some(ArtifactKind::Plugin)
        } else if self.sets.contains_runtime(artifact_path) {
            Some(ArtifactKind::Runtime)
        } else {
            None
        }
    }
}

/// Derive the marketplace channel from a plugin group id.
///
/// Returns `Some("")` for the default channel, `Some(prefix)` for a named
/// channel, and `None` for group ids unrelated to the marketplace.
fn plugin_channel(group_id: &str) -> Option<String> {
    if group_id == MARKETPLACE_GROUP {
        return Some(String::new());
    }
    // A named channel is everything before ".<marketplace group>"; the
    // channel name may itself contain dots.
    group_id
        .strip_suffix(MARKETPLACE_GROUP)
        .and_then(|prefix| prefix.strip_suffix('.'))
        .map(str::to_string)
}

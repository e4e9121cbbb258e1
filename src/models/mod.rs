//! Shared data models for dependency resolution.
//!
//! This module defines the vocabulary the pipeline stages exchange:
//! - [`Coordinates`] - the `(group, artifact, version)` triple recovered from
//!   a resolved artifact's on-disk path
//! - [`PlatformType`] - the table of known IntelliJ Platform products and
//!   their Maven coordinates
//! - [`ProductInfo`] - the `product-info.json` descriptor shipped inside
//!   platform SDK installations
//!
//! # Coordinate parsing
//!
//! Repository caches store resolved artifacts under a positional layout:
//!
//! ```text
//! .../<groupId>/<artifactId>/<version>/<hash>/<fileName>
//! ```
//!
//! [`Coordinates::from_artifact_path`] drops the final two segments (file name
//! and its wrapper directory) and takes the three segments before them. Any
//! path without that shape is a [`PdmError::CoordinateParse`], never a
//! different dependency type.

use serde::Deserialize;
use std::fmt;
use std::path::{Component, Path};

use crate::constants::PRODUCT_INFO_FILE;
use crate::core::PdmError;

/// Maven-style coordinates identifying a resolved dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinates {
    /// Group id, e.g. `com.jetbrains.intellij.idea`
    pub group_id: String,
    /// Artifact id, e.g. `ideaIC`
    pub artifact_id: String,
    /// Version string, e.g. `2024.2.3`
    pub version: String,
}

impl Coordinates {
    /// Parse coordinates positionally from a resolved artifact path.
    ///
    /// # Errors
    ///
    /// Returns [`PdmError::CoordinateParse`] when fewer than three segments
    /// remain after dropping the file name and its wrapper directory.
    pub fn from_artifact_path(artifact_path: &Path) -> Result<Self, PdmError> {
        let segments: Vec<String> = artifact_path
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        // Need three coordinate segments plus the two dropped trailing ones.
        if segments.len() < 5 {
            return Err(PdmError::CoordinateParse {
                path: artifact_path.display().to_string(),
            });
        }

        let coordinate_slice = &segments[..segments.len() - 2];
        let [group_id, artifact_id, version] = &coordinate_slice[coordinate_slice.len() - 3..]
        else {
            unreachable!("slice length checked above");
        };

        Ok(Self {
            group_id: group_id.clone(),
            artifact_id: artifact_id.clone(),
            version: version.clone(),
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Known IntelliJ Platform products, keyed by their Maven coordinates.
///
/// The short product code (e.g. `IC`) is what [`Display`](fmt::Display)
/// renders and what canonical target names embed: an IntelliJ IDEA Community
/// 2024.2 distribution extracts into `IC-2024.2/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformType {
    AndroidStudio,
    Aqua,
    CLion,
    Gateway,
    GoLand,
    IntellijIdeaCommunity,
    IntellijIdeaUltimate,
    PhpStorm,
    PyCharmCommunity,
    PyCharmProfessional,
    Rider,
    RubyMine,
    RustRover,
    WebStorm,
}

impl PlatformType {
    /// All known platform products, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::AndroidStudio,
        Self::Aqua,
        Self::CLion,
        Self::Gateway,
        Self::GoLand,
        Self::IntellijIdeaCommunity,
        Self::IntellijIdeaUltimate,
        Self::PhpStorm,
        Self::PyCharmCommunity,
        Self::PyCharmProfessional,
        Self::Rider,
        Self::RubyMine,
        Self::RustRover,
        Self::WebStorm,
    ];

    /// The short product code embedded in canonical target names.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AndroidStudio => "AI",
            Self::Aqua => "QA",
            Self::CLion => "CL",
            Self::Gateway => "GW",
            Self::GoLand => "GO",
            Self::IntellijIdeaCommunity => "IC",
            Self::IntellijIdeaUltimate => "IU",
            Self::PhpStorm => "PS",
            Self::PyCharmCommunity => "PC",
            Self::PyCharmProfessional => "PY",
            Self::Rider => "RD",
            Self::RubyMine => "RM",
            Self::RustRover => "RR",
            Self::WebStorm => "WS",
        }
    }

    /// The `(group, artifact)` Maven coordinates this product is published under.
    #[must_use]
    pub const fn maven_coordinates(self) -> (&'static str, &'static str) {
        match self {
            Self::AndroidStudio => ("com.google.android.studio", "android-studio"),
            Self::Aqua => ("com.jetbrains.intellij.aqua", "aqua"),
            Self::CLion => ("com.jetbrains.intellij.clion", "clion"),
            Self::Gateway => ("com.jetbrains.gateway", "JetBrainsGateway"),
            Self::GoLand => ("com.jetbrains.intellij.goland", "goland"),
            Self::IntellijIdeaCommunity => ("com.jetbrains.intellij.idea", "ideaIC"),
            Self::IntellijIdeaUltimate => ("com.jetbrains.intellij.idea", "ideaIU"),
            Self::PhpStorm => ("com.jetbrains.intellij.phpstorm", "phpstorm"),
            Self::PyCharmCommunity => ("com.jetbrains.intellij.pycharm", "pycharmPC"),
            Self::PyCharmProfessional => ("com.jetbrains.intellij.pycharm", "pycharmPY"),
            Self::Rider => ("com.jetbrains.intellij.rider", "riderRD"),
            Self::RubyMine => ("com.jetbrains.intellij.rubymine", "rubymine"),
            Self::RustRover => ("com.jetbrains.intellij.rustrover", "RustRover"),
            Self::WebStorm => ("com.jetbrains.intellij.webstorm", "webstorm"),
        }
    }

    /// Look up the product matching the given Maven coordinates.
    #[must_use]
    pub fn from_maven_coordinates(group_id: &str, artifact_id: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|platform| platform.maven_coordinates() == (group_id, artifact_id))
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Product descriptor shipped inside platform SDK installations.
///
/// Parsed from `product-info.json` at the installation root (or under
/// `Resources/` in macOS app bundles). Used for diagnostics only; its absence
/// is not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInfo {
    /// Human-readable product name, e.g. `IntelliJ IDEA`
    pub name: String,
    /// Marketing version, e.g. `2024.2.3`
    pub version: String,
    /// Build number, e.g. `242.23339.11`
    #[serde(rename = "buildNumber")]
    pub build_number: Option<String>,
    /// Short product code, e.g. `IC`
    #[serde(rename = "productCode")]
    pub product_code: Option<String>,
}

impl ProductInfo {
    /// Probe an installation root for a product descriptor.
    ///
    /// Checks `<root>/product-info.json` and `<root>/Resources/product-info.json`.
    /// Returns `Ok(None)` when neither exists.
    ///
    /// # Errors
    ///
    /// Returns an error when a descriptor exists but cannot be read or parsed.
    pub fn find(installation_root: &Path) -> Result<Option<Self>, PdmError> {
        let candidates = [
            installation_root.join(PRODUCT_INFO_FILE),
            installation_root.join("Resources").join(PRODUCT_INFO_FILE),
        ];

        for candidate in candidates {
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)?;
                let info: Self = serde_json::from_str(&content)?;
                return Ok(Some(info));
            }
        }

        Ok(None)
    }
}

//! PDM - Platform Dependency Manager
//!
//! A pipeline that turns resolved IntelliJ Platform dependencies - SDK
//! distributions, marketplace plugins, and bundled JetBrains Runtime
//! archives - into a flat, de-duplicated set of classpath library files.
//!
//! # Architecture Overview
//!
//! Three components, consumed in this order by the surrounding build graph:
//!
//! 1. [`resolver`] - classifies an artifact path via its embedded Maven-style
//!    coordinates and three externally supplied recognized-dependency sets,
//!    and derives a stable canonical target-directory name.
//! 2. [`extractor`] - idempotently extracts archives into their target
//!    directories, using a marker-file protocol to avoid redoing work across
//!    invocations and to survive partial failures.
//! 3. [`collector`] - walks an extracted dependency root (plugin container or
//!    platform SDK installation) and discovers exactly the jars that belong
//!    on a classpath.
//!
//! Data flow:
//!
//! ```text
//! artifact path ──resolver──► canonical name
//! archive + <cache-root>/<name> ──extractor──► extracted directory
//! extracted directory ──collector──► set of classpath jars
//! ```
//!
//! All three stages are synchronous, side-effect-bounded functions. The host
//! scheduler may run many resolutions in parallel across independent
//! dependencies, but extraction into a single target directory must be
//! serialized externally; see [`extractor`] for the single-writer contract.
//!
//! # Supporting Modules
//!
//! - [`cache`] - cache root resolution and marker staleness helpers
//! - [`cli`] - command-line interface exposing the three stages
//! - [`constants`] - shared coordinate literals and well-known file names
//! - [`core`] - error taxonomy and user-facing error presentation
//! - [`models`] - coordinates, the platform product table, product descriptors

pub mod cache;
pub mod cli;
pub mod collector;
pub mod constants;
pub mod core;
pub mod extractor;
pub mod models;
pub mod resolver;

//! Global constants used throughout the PDM codebase.
//!
//! Coordinate literals, well-known file names, and environment variable names
//! that are shared across multiple modules. Defining them centrally keeps the
//! resolver, extractor, and collector in agreement about the wire-level
//! contract they implement.

/// Maven group under which JetBrains Marketplace plugins are published.
///
/// Plugins fetched from the default marketplace channel use exactly this
/// group. Plugins from a named release channel prefix it with the channel
/// name, e.g. `eap.com.jetbrains.plugins`.
pub const MARKETPLACE_GROUP: &str = "com.jetbrains.plugins";

/// Maven group of the bundled JetBrains Runtime artifacts.
pub const RUNTIME_GROUP: &str = "com.jetbrains";

/// Maven artifact id of the bundled JetBrains Runtime.
pub const RUNTIME_ARTIFACT: &str = "jbr";

/// Name of the sentinel file written into a target directory after a fully
/// successful extraction.
///
/// The marker has no content contract beyond existence; its mtime may be used
/// by callers to decide staleness. It is created only after every archive
/// entry has been written, so a directory without it is never trusted.
pub const MARKER_FILE_NAME: &str = ".extracted";

/// Environment variable overriding the default cache root location.
pub const CACHE_DIR_ENV: &str = "PDM_CACHE_DIR";

/// File extension of classpath library files.
pub const LIBRARY_EXTENSION: &str = "jar";

/// Subdirectory of a plugin installation that holds its classpath jars.
pub const PLUGIN_LIB_DIR: &str = "lib";

/// Name of the product descriptor file shipped inside platform SDK
/// installations.
pub const PRODUCT_INFO_FILE: &str = "product-info.json";

/// Jars present in a platform SDK `lib/` directory that must not end up on
/// the classpath. Bundled test-framework jars conflict with the versions a
/// project declares itself.
pub const EXCLUDED_PLATFORM_JARS: &[&str] = &["junit.jar", "annotations.jar"];

//! Constants used throughout strapi-cli

/// Namespace prefix of every plugin package
pub const PLUGIN_PREFIX: &str = "strapi-plugin-";

/// Dist-tag fetched in registry mode
pub const REGISTRY_TAG: &str = "alpha";

/// Package manager binary used in registry mode
pub const PACKAGE_MANAGER: &str = "npm";

/// Base URL of the local admin server
pub const ADMIN_URL: &str = "http://localhost:1337";

/// Where published plugins are expected to live
pub const REGISTRY_HINT_BASE: &str = "https://www.npmjs.com/package/";

/// Project-relative install directory
pub const PLUGINS_DIR: &str = "plugins";

/// Project-relative dependency cache
pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// Primary manifest, relative to the project root
pub const MANIFEST_PATH: [&str; 5] = ["admin", "admin", "src", "config", "plugins.json"];

/// Build mirror of the manifest, relative to the project root
pub const BUILD_MANIFEST_PATH: [&str; 5] = ["admin", "admin", "build", "config", "plugins.json"];

/// Environment override for the settings file
pub const CONFIG_PATH_ENV: &str = "STRAPI_CLI_CONFIG_PATH";

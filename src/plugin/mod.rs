//! Plugin installation for Strapi projects
//!
//! An install runs four stages in order: detect the project, resolve the
//! plugin name, acquire the files, and record the plugin in the admin
//! manifest. Only the last stage is allowed to fail without failing the
//! install.

pub mod installer;
pub mod manifest;
pub mod project;
pub mod resolver;

pub use installer::{InstallMode, InstallationResult, PluginInstaller};
pub use project::{PackageJsonDetector, ProjectDetector};
pub use resolver::PluginResolver;

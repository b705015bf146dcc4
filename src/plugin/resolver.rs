use crate::config::PLUGINS_DIR;
use std::path::{Path, PathBuf};

/// A plugin name expanded into its package id and install location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlugin {
    pub name: String,
    pub package_id: String,
    pub install_path: String,
    prefix_len: usize,
}

impl ResolvedPlugin {
    /// Manifest id: the package id without its namespace prefix
    pub fn entry_id(&self) -> &str {
        &self.package_id[self.prefix_len..]
    }

    pub fn install_path_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(PLUGINS_DIR).join(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct PluginResolver {
    prefix: String,
}

impl PluginResolver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn resolve(&self, plugin_name: &str) -> ResolvedPlugin {
        ResolvedPlugin {
            name: plugin_name.to_string(),
            package_id: format!("{}{plugin_name}", self.prefix),
            install_path: format!("./{PLUGINS_DIR}/{plugin_name}"),
            prefix_len: self.prefix.len(),
        }
    }
}

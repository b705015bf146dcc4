//! Project detection.

use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Decides whether a directory is the root of a Strapi application.
pub trait ProjectDetector {
    fn is_valid_project(&self, root: &Path) -> bool;
}

/// Accepts a root whose `package.json` lists `strapi` under `dependencies`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageJsonDetector;

impl PackageJsonDetector {
    pub fn depends_on_strapi(root: &Path) -> anyhow::Result<bool> {
        let path = root.join("package.json");
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let package: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(package
            .get("dependencies")
            .and_then(Value::as_object)
            .is_some_and(|deps| deps.contains_key("strapi")))
    }
}

impl ProjectDetector for PackageJsonDetector {
    fn is_valid_project(&self, root: &Path) -> bool {
        Self::depends_on_strapi(root).unwrap_or(false)
    }
}

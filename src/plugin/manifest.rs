//! The admin panel's list of installed plugins.
//!
//! The primary file lives at `admin/admin/src/config/plugins.json`. Every
//! successful write is followed by a byte-for-byte copy into
//! `admin/admin/build/config/plugins.json`.

use crate::config::{BUILD_MANIFEST_PATH, MANIFEST_PATH};
use crate::error::{ManifestError, ManifestResult};
use crate::utils::PathResolver;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Build the `{ "id", "source" }` record for a newly installed plugin.
pub fn manifest_entry(id: &str, source: impl Into<String>) -> Value {
    let mut entry = Map::new();
    entry.insert("id".to_string(), Value::String(id.to_string()));
    entry.insert("source".to_string(), Value::String(source.into()));
    Value::Object(entry)
}

/// The manifest is kept as raw JSON values so that entries written by other
/// tools come back out with the same keys, key order and value types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<Value>,
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

impl Manifest {
    #[cfg(test)]
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| entry_id(e) == Some(id))
    }

    /// Append unless an entry with the same string id is already listed
    pub fn add(&mut self, entry: Value) -> EntryChange {
        if let Some(id) = entry_id(&entry) {
            if self.contains(id) {
                return EntryChange::AlreadyPresent;
            }
        }
        self.entries.push(entry);
        EntryChange::Added
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryChange {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorCleanup {
    RemovedStale,
    NothingToRemove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestUpdate {
    pub created: bool,
    pub entry: EntryChange,
    pub mirror: MirrorCleanup,
}

#[derive(Debug, Clone)]
pub struct ManifestUpdater {
    primary: PathBuf,
    mirror: PathBuf,
    admin_url: String,
}

impl ManifestUpdater {
    pub fn new(project_root: &Path, admin_url: impl Into<String>) -> Self {
        Self {
            primary: PathResolver::join_segments(project_root, &MANIFEST_PATH),
            mirror: PathResolver::join_segments(project_root, &BUILD_MANIFEST_PATH),
            admin_url: admin_url.into(),
        }
    }

    pub fn primary_path(&self) -> &Path {
        &self.primary
    }

    #[cfg(test)]
    pub fn mirror_path(&self) -> &Path {
        &self.mirror
    }

    pub fn source_url(&self, id: &str) -> String {
        format!("{}/admin/{id}/main.js", self.admin_url.trim_end_matches('/'))
    }

    /// Read the primary manifest. `None` means the file does not exist yet.
    pub fn load(&self) -> ManifestResult<Option<Manifest>> {
        let raw = match fs::read_to_string(&self.primary) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ManifestError::Read {
                    path: self.primary.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| ManifestError::Parse {
                path: self.primary.clone(),
                source,
            })
    }

    pub fn update(&self, entry_id: &str) -> ManifestResult<ManifestUpdate> {
        let existing = self.load()?;
        let created = existing.is_none();
        let mut manifest = existing.unwrap_or_default();

        let entry = manifest.add(manifest_entry(entry_id, self.source_url(entry_id)));
        self.write(&manifest)?;
        let mirror = self.mirror()?;

        Ok(ManifestUpdate {
            created,
            entry,
            mirror,
        })
    }

    fn write(&self, manifest: &Manifest) -> ManifestResult<()> {
        let body = serde_json::to_string(manifest).map_err(|e| ManifestError::Write {
            path: self.primary.clone(),
            source: e.into(),
        })?;

        fs::write(&self.primary, body).map_err(|source| ManifestError::Write {
            path: self.primary.clone(),
            source,
        })
    }

    fn mirror(&self) -> ManifestResult<MirrorCleanup> {
        let cleanup = match fs::remove_file(&self.mirror) {
            Ok(()) => MirrorCleanup::RemovedStale,
            Err(e) if e.kind() == ErrorKind::NotFound => MirrorCleanup::NothingToRemove,
            Err(source) => {
                return Err(ManifestError::Mirror {
                    path: self.mirror.clone(),
                    source,
                })
            }
        };

        fs::copy(&self.primary, &self.mirror).map_err(|source| ManifestError::Mirror {
            path: self.mirror.clone(),
            source,
        })?;

        Ok(cleanup)
    }
}

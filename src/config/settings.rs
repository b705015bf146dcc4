//! Installer settings, layered over the built-in constants.

use super::constants::{
    ADMIN_URL, CONFIG_PATH_ENV, PACKAGE_MANAGER, PLUGIN_PREFIX, REGISTRY_TAG,
};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerSettings {
    pub plugin_prefix: String,
    pub registry_tag: String,
    pub package_manager: String,
    pub admin_url: String,
    pub packages_dir: Option<PathBuf>,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            plugin_prefix: PLUGIN_PREFIX.to_string(),
            registry_tag: REGISTRY_TAG.to_string(),
            package_manager: PACKAGE_MANAGER.to_string(),
            admin_url: ADMIN_URL.to_string(),
            packages_dir: None,
        }
    }
}

/// Where the settings file came from. Only an explicit source must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Default(PathBuf),
    None,
}

impl InstallerSettings {
    /// Load from `--config`, then `STRAPI_CLI_CONFIG_PATH`, then `~/.strapi/cli.toml`.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let source = Self::config_source(
            explicit,
            std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
            dirs::home_dir(),
        );
        Self::load_from(&source)
    }

    pub fn config_source(
        explicit: Option<&Path>,
        env_path: Option<PathBuf>,
        home_dir: Option<PathBuf>,
    ) -> ConfigSource {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(path.to_path_buf());
        }
        if let Some(path) = env_path {
            return ConfigSource::Explicit(path);
        }
        match home_dir {
            Some(home) => ConfigSource::Default(home.join(".strapi").join("cli.toml")),
            None => ConfigSource::None,
        }
    }

    pub fn load_from(source: &ConfigSource) -> Result<Self, ConfigError> {
        let path = match source {
            ConfigSource::Explicit(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound { path: path.clone() });
                }
                path
            }
            ConfigSource::Default(path) if path.is_file() => path,
            ConfigSource::Default(_) | ConfigSource::None => return Ok(Self::default()),
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })
    }

    /// Source tree for `--dev` installs: flag, then settings, then two levels
    /// above the directory holding the running binary.
    pub fn packages_dir(&self, cli_override: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = cli_override {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.packages_dir {
            return Ok(dir.clone());
        }

        let exe = std::env::current_exe().map_err(|_| ConfigError::PackagesDirUnknown)?;
        exe.parent()
            .and_then(Path::parent)
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .ok_or(ConfigError::PackagesDirUnknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_constants() {
        let settings = InstallerSettings::default();
        assert_eq!(settings.plugin_prefix, "strapi-plugin-");
        assert_eq!(settings.registry_tag, "alpha");
        assert_eq!(settings.package_manager, "npm");
        assert_eq!(settings.admin_url, "http://localhost:1337");
        assert!(settings.packages_dir.is_none());
    }

    #[test]
    fn test_config_source_precedence() {
        let explicit = PathBuf::from("/tmp/explicit.toml");
        let env = PathBuf::from("/tmp/env.toml");
        let home = PathBuf::from("/home/dev");

        assert_eq!(
            InstallerSettings::config_source(
                Some(explicit.as_path()),
                Some(env.clone()),
                Some(home.clone())
            ),
            ConfigSource::Explicit(explicit)
        );
        assert_eq!(
            InstallerSettings::config_source(None, Some(env.clone()), Some(home.clone())),
            ConfigSource::Explicit(env)
        );
        assert_eq!(
            InstallerSettings::config_source(None, None, Some(home)),
            ConfigSource::Default(PathBuf::from("/home/dev/.strapi/cli.toml"))
        );
        assert_eq!(
            InstallerSettings::config_source(None, None, None),
            ConfigSource::None
        );
    }

    #[test]
    fn test_missing_default_file_gives_defaults() {
        let temp_dir = tempdir().unwrap();
        let source = ConfigSource::Default(temp_dir.path().join("cli.toml"));
        assert_eq!(
            InstallerSettings::load_from(&source).unwrap(),
            InstallerSettings::default()
        );
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let source = ConfigSource::Explicit(temp_dir.path().join("nope.toml"));
        assert!(matches!(
            InstallerSettings::load_from(&source),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("cli.toml");
        fs::write(
            &path,
            "package_manager = \"pnpm\"\npackages_dir = \"/src/strapi/packages\"\n",
        )
        .unwrap();

        let settings = InstallerSettings::load_from(&ConfigSource::Explicit(path)).unwrap();
        assert_eq!(settings.package_manager, "pnpm");
        assert_eq!(
            settings.packages_dir,
            Some(PathBuf::from("/src/strapi/packages"))
        );
        assert_eq!(settings.registry_tag, "alpha");
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("cli.toml");
        fs::write(&path, "package_manager = [").unwrap();

        assert!(matches!(
            InstallerSettings::load_from(&ConfigSource::Explicit(path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_packages_dir_precedence() {
        let settings = InstallerSettings {
            packages_dir: Some(PathBuf::from("/from/settings")),
            ..Default::default()
        };
        assert_eq!(
            settings.packages_dir(Some(Path::new("/from/flag"))).unwrap(),
            PathBuf::from("/from/flag")
        );
        assert_eq!(
            settings.packages_dir(None).unwrap(),
            PathBuf::from("/from/settings")
        );
    }
}

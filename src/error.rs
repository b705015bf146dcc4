use crate::logging::Logger;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for strapi-cli operations
#[derive(Error, Debug)]
pub enum StrapiError {
    /// Plugin installation errors
    #[error(transparent)]
    Install(#[from] InstallError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that abort a plugin installation
#[derive(Error, Debug)]
pub enum InstallError {
    /// The project root is not a Strapi application
    #[error("This command can only be used inside a Strapi project.")]
    NotAProject { root: PathBuf },

    /// Something already sits at the install path
    #[error("It looks like this plugin is already installed. Please check in `{}`.", path.display())]
    AlreadyInstalled { path: PathBuf },

    /// Symlink or relocation failed
    #[error("An error occurred during plugin installation.")]
    InstallFailed {
        #[source]
        source: std::io::Error,
    },

    /// The package manager could not fetch the package
    #[error(
        "An error occurred during plugin installation. \nPlease make sure this plugin is available on npm: {hint_url}"
    )]
    RegistryFetchFailed {
        package_id: String,
        hint_url: String,
        reason: String,
    },
}

/// Manifest update errors. These never fail an install.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Impossible to access to {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Impossible to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Impossible to write to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Impossible to mirror the manifest to {}", path.display())]
    Mirror {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    /// The tool could not be started
    #[error("Failed to execute {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran and reported failure
    #[error("{tool} failed with {status}: {stderr}")]
    Failed {
        tool: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine the packages directory for --dev installs")]
    PackagesDirUnknown,
}

/// Result type alias for strapi-cli operations
pub type Result<T> = std::result::Result<T, StrapiError>;

/// Specialized result types for different modules
pub type InstallResult<T> = std::result::Result<T, InstallError>;
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;
pub type CommandResult<T> = std::result::Result<T, CommandError>;

impl StrapiError {
    /// Log the error, each `Caused by:` in its source chain, then suggestions
    pub fn report(&self, logger: &dyn Logger) {
        logger.error(&self.to_string());

        let mut error_source: &dyn std::error::Error = self;
        while let Some(source) = error_source.source() {
            logger.error(&format!("   Caused by: {source}"));
            error_source = source;
        }

        for suggestion in self.suggestions() {
            logger.info(&format!("💡 {suggestion}"));
        }
    }

    /// Get suggested actions for the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            StrapiError::Install(InstallError::NotAProject { root }) => vec![format!(
                "Run the command from a directory whose package.json depends on `strapi` (looked in {})",
                root.display()
            )],
            StrapiError::Install(InstallError::AlreadyInstalled { path }) => {
                vec![format!("Remove {} first to reinstall", path.display())]
            }
            StrapiError::Install(InstallError::RegistryFetchFailed {
                package_id, reason, ..
            }) => vec![
                format!("Package manager output: {reason}"),
                format!("Use --dev to link a local copy of {package_id} instead"),
            ],
            StrapiError::Config(ConfigError::PackagesDirUnknown) => {
                vec!["Pass --packages-dir or set packages_dir in the config file".to_string()]
            }
            _ => vec![],
        }
    }
}

impl InstallError {
    /// new not-a-project error
    pub fn not_a_project(root: impl AsRef<Path>) -> Self {
        Self::NotAProject {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// new already-installed error
    pub fn already_installed(path: impl AsRef<Path>) -> Self {
        Self::AlreadyInstalled {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// new registry fetch failed error
    pub fn registry_fetch_failed(
        package_id: impl Into<String>,
        hint_url: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::RegistryFetchFailed {
            package_id: package_id.into(),
            hint_url: hint_url.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for InstallError {
    fn from(source: std::io::Error) -> Self {
        InstallError::InstallFailed { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, MemoryLogger};

    #[test]
    fn test_already_installed_message_names_path() {
        let err = InstallError::already_installed("./plugins/upload");
        assert_eq!(
            err.to_string(),
            "It looks like this plugin is already installed. Please check in `./plugins/upload`."
        );
    }

    #[test]
    fn test_registry_failure_carries_hint_url() {
        let err = StrapiError::from(InstallError::registry_fetch_failed(
            "strapi-plugin-upload",
            "https://www.npmjs.com/package/strapi-plugin-upload",
            "exit status: 1",
        ));
        assert!(err
            .to_string()
            .contains("https://www.npmjs.com/package/strapi-plugin-upload"));
        assert_eq!(err.suggestions().len(), 2);
    }

    #[test]
    fn test_io_error_becomes_install_failed() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = InstallError::from(io);
        assert!(matches!(err, InstallError::InstallFailed { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_report_logs_cause_chain_and_suggestions() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StrapiError::from(InstallError::from(io));
        let logger = MemoryLogger::new();

        err.report(&logger);

        assert_eq!(
            logger.messages(LogLevel::Error),
            vec![
                "An error occurred during plugin installation.".to_string(),
                "   Caused by: denied".to_string(),
            ]
        );
        assert!(logger.messages(LogLevel::Info).is_empty());
    }

    #[test]
    fn test_report_prints_suggestions_as_info() {
        let err = StrapiError::from(InstallError::already_installed("./plugins/upload"));
        let logger = MemoryLogger::new();

        err.report(&logger);

        assert_eq!(logger.messages(LogLevel::Error).len(), 1);
        assert_eq!(
            logger.messages(LogLevel::Info),
            vec!["💡 Remove ./plugins/upload first to reinstall".to_string()]
        );
    }
}

use crate::config::{InstallerSettings, DEPENDENCY_CACHE_DIR, REGISTRY_HINT_BASE};
use crate::error::{InstallError, InstallResult};
use crate::logging::Logger;
use crate::plugin::manifest::{ManifestUpdate, ManifestUpdater};
use crate::plugin::resolver::ResolvedPlugin;
use crate::utils::{PackageManager, PathResolver};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallMode {
    /// Symlink `<packages_dir>/<package_id>` into `plugins/`
    Development { packages_dir: PathBuf },
    /// Fetch with the package manager, then move out of `node_modules/`
    Registry,
}

#[derive(Debug)]
pub struct InstallationResult {
    pub install_path: PathBuf,
    /// `None` when the manifest could not be updated; the plugin stays installed.
    pub manifest: Option<ManifestUpdate>,
}

pub struct PluginInstaller<'a> {
    project_root: &'a Path,
    settings: &'a InstallerSettings,
    package_manager: &'a dyn PackageManager,
    logger: &'a dyn Logger,
}

impl<'a> PluginInstaller<'a> {
    pub fn new(
        project_root: &'a Path,
        settings: &'a InstallerSettings,
        package_manager: &'a dyn PackageManager,
        logger: &'a dyn Logger,
    ) -> Self {
        Self {
            project_root,
            settings,
            package_manager,
            logger,
        }
    }

    /// Acquire the plugin, then record it in the admin manifest.
    pub fn install(
        &self,
        mode: &InstallMode,
        plugin: &ResolvedPlugin,
    ) -> InstallResult<InstallationResult> {
        let install_path = self.acquire(mode, plugin)?;
        let manifest = self.update_manifest(plugin.entry_id());

        self.logger.info("The plugin has been successfully installed.");

        Ok(InstallationResult {
            install_path,
            manifest,
        })
    }

    /// Fail with `AlreadyInstalled` if anything occupies the install path.
    pub fn ensure_not_installed(&self, plugin: &ResolvedPlugin) -> InstallResult<PathBuf> {
        let install_path = plugin.install_path_in(self.project_root);

        if PathResolver::entry_exists(&install_path) {
            return Err(InstallError::already_installed(&plugin.install_path));
        }

        Ok(install_path)
    }

    pub fn acquire(&self, mode: &InstallMode, plugin: &ResolvedPlugin) -> InstallResult<PathBuf> {
        let install_path = self.ensure_not_installed(plugin)?;

        self.logger.debug("Installation in progress...");

        match mode {
            InstallMode::Development { packages_dir } => {
                self.link_local(packages_dir, plugin, &install_path)?
            }
            InstallMode::Registry => self.fetch_from_registry(plugin, &install_path)?,
        }

        Ok(install_path)
    }

    fn link_local(
        &self,
        packages_dir: &Path,
        plugin: &ResolvedPlugin,
        install_path: &Path,
    ) -> InstallResult<()> {
        let source = packages_dir.join(&plugin.package_id);
        self.logger.debug(&format!(
            "Linking `{}` to `{}`.",
            source.display(),
            plugin.install_path
        ));

        PathResolver::symlink_dir(&source, install_path)?;
        Ok(())
    }

    fn fetch_from_registry(&self, plugin: &ResolvedPlugin, install_path: &Path) -> InstallResult<()> {
        self.logger.debug(&format!(
            "Installing the plugin from npm registry with {}.",
            self.package_manager.name()
        ));

        self.package_manager
            .install(
                self.project_root,
                &plugin.package_id,
                &self.settings.registry_tag,
            )
            .map_err(|e| {
                InstallError::registry_fetch_failed(
                    &plugin.package_id,
                    format!("{REGISTRY_HINT_BASE}{}", plugin.package_id),
                    e.to_string(),
                )
            })?;

        self.logger.debug("Plugin successfully installed from npm registry.");
        self.logger.debug(&format!(
            "Moving the `{DEPENDENCY_CACHE_DIR}/{}` folder to the `./plugins` folder.",
            plugin.package_id
        ));

        let cached = self
            .project_root
            .join(DEPENDENCY_CACHE_DIR)
            .join(&plugin.package_id);
        fs::rename(cached, install_path)?;
        Ok(())
    }

    /// Best-effort: failures are logged and reported as `None`.
    fn update_manifest(&self, entry_id: &str) -> Option<ManifestUpdate> {
        let updater = ManifestUpdater::new(self.project_root, &self.settings.admin_url);

        match updater.update(entry_id) {
            Ok(update) => {
                let verb = if update.created { "Created" } else { "Updated" };
                self.logger.debug(&format!(
                    "{verb} {} ({:?}, mirror {:?}).",
                    updater.primary_path().display(),
                    update.entry,
                    update.mirror
                ));
                Some(update)
            }
            Err(e) => {
                let mut message = e.to_string();
                if let Some(source) = std::error::Error::source(&e) {
                    message = format!("{message}: {source}");
                }
                self.logger.error(&message);
                None
            }
        }
    }
}

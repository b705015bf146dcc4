use crate::config::InstallerSettings;
use crate::error::{InstallError, Result};
use crate::logging::Logger;
use crate::plugin::{
    InstallMode, InstallationResult, PackageJsonDetector, PluginInstaller, PluginResolver,
    ProjectDetector,
};
use crate::utils::{NpmPackageManager, PackageManager};
use std::path::{Path, PathBuf};

/// Everything `strapi install` was asked to do
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub project_root: PathBuf,
    pub plugin: String,
    pub dev: bool,
    pub packages_dir: Option<PathBuf>,
}

/// Handle install command
pub fn handle_install_command(
    request: &InstallRequest,
    config_path: Option<&Path>,
    logger: &dyn Logger,
) -> Result<()> {
    let settings = InstallerSettings::load(config_path)?;
    let package_manager = NpmPackageManager::new(&settings.package_manager);

    let result = install_plugin(
        request,
        &settings,
        &PackageJsonDetector,
        &package_manager,
        logger,
    )?;

    logger.debug(&format!(
        "Plugin files are in {}.",
        result.install_path.display()
    ));
    if result.manifest.is_none() {
        logger.info("The admin plugin list was not updated; the plugin will not show up in the admin panel until it is.");
    }

    Ok(())
}

pub fn install_plugin(
    request: &InstallRequest,
    settings: &InstallerSettings,
    detector: &dyn ProjectDetector,
    package_manager: &dyn PackageManager,
    logger: &dyn Logger,
) -> Result<InstallationResult> {
    if !detector.is_valid_project(&request.project_root) {
        return Err(InstallError::not_a_project(&request.project_root).into());
    }

    let plugin = PluginResolver::new(&settings.plugin_prefix).resolve(&request.plugin);
    let installer = PluginInstaller::new(&request.project_root, settings, package_manager, logger);
    installer.ensure_not_installed(&plugin)?;

    let mode = if request.dev {
        InstallMode::Development {
            packages_dir: settings.packages_dir(request.packages_dir.as_deref())?,
        }
    } else {
        InstallMode::Registry
    };

    Ok(installer.install(&mode, &plugin)?)
}

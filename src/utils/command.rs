use crate::error::{CommandError, CommandResult};
use std::path::Path;
use std::process::{Command, Output};

/// Shared subprocess helpers
pub struct CommandExecutor;

impl CommandExecutor {
    /// Run `command` in `working_dir` and capture its output
    pub fn execute_command(
        command: &str,
        args: &[String],
        working_dir: &Path,
    ) -> CommandResult<Output> {
        Command::new(command)
            .args(args)
            .current_dir(working_dir)
            .output()
            .map_err(|source| CommandError::Spawn {
                tool: command.to_string(),
                source,
            })
    }

    /// Like [`execute_command`](Self::execute_command), but a non-zero exit is an error
    pub fn execute_checked(
        command: &str,
        args: &[String],
        working_dir: &Path,
    ) -> CommandResult<Output> {
        let output = Self::execute_command(command, args, working_dir)?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                tool: command.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

/// Fetches a package into the project's dependency cache.
///
/// The call blocks until the underlying tool exits. There is no timeout.
pub trait PackageManager {
    fn name(&self) -> &str;

    fn install(&self, project_root: &Path, package_id: &str, tag: &str) -> CommandResult<()>;
}

/// `npm install <pkg>@<tag> --ignore-scripts --no-save`
#[derive(Debug, Clone)]
pub struct NpmPackageManager {
    program: String,
}

impl NpmPackageManager {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn install_args(package_id: &str, tag: &str) -> Vec<String> {
        vec![
            "install".to_string(),
            format!("{package_id}@{tag}"),
            "--ignore-scripts".to_string(),
            "--no-save".to_string(),
        ]
    }
}

impl PackageManager for NpmPackageManager {
    fn name(&self) -> &str {
        &self.program
    }

    fn install(&self, project_root: &Path, package_id: &str, tag: &str) -> CommandResult<()> {
        let args = Self::install_args(package_id, tag);
        CommandExecutor::execute_checked(&self.program, &args, project_root).map(|_| ())
    }
}

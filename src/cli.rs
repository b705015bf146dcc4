use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// strapi - Strapi project command line tools
#[derive(Parser, Debug)]
#[command(
    name = "strapi",
    author,
    version,
    about = "Command line tools for Strapi projects",
    long_about = "Installs plugins into a Strapi project, either from the npm registry or by linking a local development copy."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug output
    #[arg(long, global = true, help = "Print debug messages")]
    pub debug: bool,

    /// Settings file (default: $STRAPI_CLI_CONFIG_PATH or ~/.strapi/cli.toml)
    #[arg(
        long,
        global = true,
        value_hint = clap::ValueHint::FilePath,
        help = "Path to a TOML settings file"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a Strapi plugin
    Install {
        /// Plugin name without the `strapi-plugin-` prefix (e.g. `upload`)
        plugin: String,

        /// Link the plugin from the local packages directory instead of npm
        #[arg(long, help = "Symlink a local development copy")]
        dev: bool,

        /// Project root
        #[arg(
            short = 'p',
            long,
            default_value = "./",
            value_hint = clap::ValueHint::DirPath,
            help = "Strapi project directory"
        )]
        project: PathBuf,

        /// Directory holding `strapi-plugin-*` sources for --dev
        #[arg(
            long,
            value_hint = clap::ValueHint::DirPath,
            help = "Source directory for --dev installs"
        )]
        packages_dir: Option<PathBuf>,
    },
}

/// Parse arguments from the command line. Usage errors exit with 1, like
/// every other failure; `--help` and `--version` exit with 0.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(usage_exit_code(&e))
    })
}

fn usage_exit_code(e: &clap::Error) -> i32 {
    if e.use_stderr() {
        1
    } else {
        0
    }
}

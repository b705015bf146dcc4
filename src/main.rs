mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod plugin;
mod utils;

use crate::logging::ConsoleLogger;
use cli::{get_args, Commands};
use commands::InstallRequest;

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("\n🔥 strapi encountered an unexpected error:");
        eprintln!("{panic_info}");
        eprintln!("\n💡 This is likely a bug. Include your command and this message when reporting it.");
    }));

    let args = get_args();
    let logger = ConsoleLogger::new(args.debug);

    let result = match &args.command {
        Commands::Install {
            plugin,
            dev,
            project,
            packages_dir,
        } => {
            let request = InstallRequest {
                project_root: project.clone(),
                plugin: plugin.clone(),
                dev: *dev,
                packages_dir: packages_dir.clone(),
            };
            commands::handle_install_command(&request, args.config.as_deref(), &logger)
        }
    };

    if let Err(e) = result {
        e.report(&logger);
        std::process::exit(1);
    }
}

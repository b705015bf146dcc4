mod install;

pub use install::{handle_install_command, InstallRequest};

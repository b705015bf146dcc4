//! Configuration module for strapi-cli

pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::InstallerSettings;

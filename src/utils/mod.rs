pub mod command;
pub mod path;

pub use command::{NpmPackageManager, PackageManager};
pub use path::PathResolver;

use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem path helpers shared by the install stages
pub struct PathResolver;

impl PathResolver {
    /// Join path segments onto `root`
    pub fn join_segments(root: &Path, segments: &[&str]) -> PathBuf {
        segments
            .iter()
            .fold(root.to_path_buf(), |path, segment| path.join(segment))
    }

    /// True if anything occupies `path`, including a dangling symlink
    pub fn entry_exists(path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    /// Create a directory symlink at `link` pointing to `target`
    #[cfg(unix)]
    pub fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
        std::os::unix::fs::symlink(target, link)
    }

    /// Create a directory symlink at `link` pointing to `target`
    #[cfg(windows)]
    pub fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
        std::os::windows::fs::symlink_dir(target, link)
    }
}

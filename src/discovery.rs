//! Component directory discovery.
//!
//! The build task does not keep a list of applications; it builds whatever
//! directories exist under the applications root when it runs.

use crate::error::Result;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// List the immediate subdirectories of `root`.
///
/// Plain files and anything nested deeper are ignored. Names are returned
/// exactly as the filesystem stores them (not necessarily UTF-8), sorted so
/// logs are reproducible; callers must not rely on any order between
/// directories.
pub fn list_component_directories(root: &Path) -> Result<Vec<OsString>> {
    let mut dirs = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        // Follows symlinks, so a linked application directory still counts.
        if !entry.path().is_dir() {
            continue;
        }
        dirs.push(entry.file_name());
    }

    dirs.sort();
    tracing::debug!(root = %root.display(), count = dirs.len(), "discovered component directories");
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use tempfile::TempDir;

    #[test]
    fn lists_only_immediate_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("uart/build")).unwrap();
        fs::create_dir(temp.path().join("debug_exit")).unwrap();
        fs::write(temp.path().join("README.md"), "apps").unwrap();
        fs::write(temp.path().join("uart.c"), "int main() {}").unwrap();

        let dirs = list_component_directories(temp.path()).unwrap();

        assert_eq!(dirs, vec!["debug_exit", "uart"]);
    }

    #[test]
    fn empty_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(list_component_directories(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn new_directory_is_picked_up() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();
        assert_eq!(list_component_directories(temp.path()).unwrap().len(), 2);

        fs::create_dir(temp.path().join("c")).unwrap();
        let dirs = list_component_directories(temp.path()).unwrap();
        assert!(dirs.contains(&OsString::from("c")));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_kept_intact() {
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let name = std::ffi::OsStr::from_bytes(b"app\xff");
        fs::create_dir(temp.path().join(name)).unwrap();

        let dirs = list_component_directories(temp.path()).unwrap();

        assert_eq!(dirs, vec![name.to_os_string()]);
        assert!(temp.path().join(&dirs[0]).is_dir());
    }

    #[test]
    fn missing_root_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = list_component_directories(&temp.path().join("apps")).unwrap_err();
        assert!(matches!(err, TaskError::Io(_)));
    }
}

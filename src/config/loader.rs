//! Configuration file discovery and loading.

use crate::config::schema::TaskConfig;
use crate::error::{Result, TaskError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional per-project config file.
pub const CONFIG_FILE_NAME: &str = ".frisc-task.yml";

/// Load the project configuration.
///
/// An explicit path must exist. Without one, `<project_root>/.frisc-task.yml`
/// is used when present and the defaults otherwise.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<TaskConfig> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(TaskError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Some(path) => path.to_path_buf(),
        None => match find_project_config(project_root) {
            Some(path) => path,
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(TaskConfig::default());
            }
        },
    };

    tracing::debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path)?;
    parse_config(&content, &path)
}

/// Parse YAML config content. `path` is only used for error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<TaskConfig> {
    if content.trim().is_empty() {
        return Ok(TaskConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| TaskError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

//! Configuration schema definitions.
//!
//! [`TaskConfig`] maps to the YAML file; every field is optional and falls
//! back to the built-in project layout.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Which set of task names the registry exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RegistryVariant {
    /// `build`, `clean`, `test`, `run_log_viewer`
    #[default]
    Current,
    /// `build_apps`, `run_test`, `run_log_viewer`
    Legacy,
    /// Every task from both sets
    Full,
}

/// How outcomes map to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitPolicy {
    /// Unknown names and failed commands exit nonzero.
    #[default]
    Strict,
    /// Always exit 0, whatever happened.
    Compatible,
}

/// Contents of `.frisc-task.yml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfig {
    /// Directory holding one subdirectory per native application
    pub apps_dir: Option<PathBuf>,

    /// Command-line wrapper crate
    pub cli_dir: Option<PathBuf>,

    /// Third-party compliance test suite checkout
    pub compliance_dir: Option<PathBuf>,

    /// Browser log viewer
    pub log_viewer_dir: Option<PathBuf>,

    /// Task set to expose
    pub variant: Option<RegistryVariant>,

    /// Exit status policy
    pub exit_policy: Option<ExitPolicy>,
}

/// Where each project component lives, relative to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub apps_dir: PathBuf,
    pub cli_dir: PathBuf,
    pub compliance_dir: PathBuf,
    pub log_viewer_dir: PathBuf,
}

impl ProjectLayout {
    /// The standard layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            apps_dir: PathBuf::from("apps"),
            cli_dir: PathBuf::from("emu-cli"),
            compliance_dir: PathBuf::from("riscv-tests"),
            log_viewer_dir: PathBuf::from("frisc-log-viewer"),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the applications root.
    pub fn apps_root(&self) -> PathBuf {
        self.root.join(&self.apps_dir)
    }
}

/// Fully resolved runner settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub layout: ProjectLayout,
    pub variant: RegistryVariant,
    pub exit_policy: ExitPolicy,
}

impl TaskConfig {
    /// Apply this config over the defaults for `root`.
    pub fn resolve(self, root: impl Into<PathBuf>) -> Settings {
        let mut layout = ProjectLayout::new(root);
        if let Some(dir) = self.apps_dir {
            layout.apps_dir = dir;
        }
        if let Some(dir) = self.cli_dir {
            layout.cli_dir = dir;
        }
        if let Some(dir) = self.compliance_dir {
            layout.compliance_dir = dir;
        }
        if let Some(dir) = self.log_viewer_dir {
            layout.log_viewer_dir = dir;
        }

        Settings {
            layout,
            variant: self.variant.unwrap_or_default(),
            exit_policy: self.exit_policy.unwrap_or_default(),
        }
    }
}

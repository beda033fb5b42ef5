//! Command sequences for each task kind.
//!
//! Working directories are relative to the project root so plans read the
//! same regardless of where the project is checked out.

use crate::config::ProjectLayout;
use crate::discovery::list_component_directories;
use crate::error::Result;
use crate::shell::Command;

/// `make clean` then `make` in every application directory.
pub fn build_apps(layout: &ProjectLayout) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for name in list_component_directories(&layout.apps_root())? {
        let dir = layout.apps_dir.join(&name);
        commands.push(Command::from_words("make clean").in_dir(&dir));
        commands.push(Command::from_words("make").in_dir(&dir));
    }
    Ok(commands)
}

/// Applications, then submodules, then the compliance suite.
pub fn build(layout: &ProjectLayout) -> Result<Vec<Command>> {
    let mut commands = build_apps(layout)?;

    commands.push(submodule_sync());
    commands.push(submodule_sync().in_dir(&layout.compliance_dir));

    for step in ["autoconf", "./configure", "make"] {
        commands.push(Command::from_words(step).in_dir(&layout.compliance_dir));
    }

    Ok(commands)
}

pub fn clean(layout: &ProjectLayout) -> Vec<Command> {
    vec![
        Command::from_words("cargo clean"),
        Command::from_words("cargo clean").in_dir(&layout.cli_dir),
        Command::from_words("make clean").in_dir(&layout.compliance_dir),
    ]
}

pub fn test() -> Vec<Command> {
    vec![Command::from_words("cargo test")]
}

/// The dev server never exits on its own.
pub fn run_log_viewer(layout: &ProjectLayout) -> Vec<Command> {
    vec![Command::from_words("npm run dev")
        .in_dir(&layout.log_viewer_dir)
        .persistent()]
}

fn submodule_sync() -> Command {
    Command::from_words("git submodule update --init --recursive")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Lifetime;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn project_with_apps(apps: &[&str]) -> (TempDir, ProjectLayout) {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("apps")).unwrap();
        for app in apps {
            fs::create_dir(temp.path().join("apps").join(app)).unwrap();
        }
        let layout = ProjectLayout::new(temp.path());
        (temp, layout)
    }

    fn lines(commands: &[Command]) -> Vec<(String, PathBuf)> {
        commands
            .iter()
            .map(|c| (c.display(), c.working_dir().to_path_buf()))
            .collect()
    }

    fn at(text: &str, dir: &str) -> (String, PathBuf) {
        (text.to_string(), PathBuf::from(dir))
    }

    #[test]
    fn build_apps_cleans_then_builds_each_directory() {
        let (_temp, layout) = project_with_apps(&["uart", "debug_exit"]);

        let commands = build_apps(&layout).unwrap();

        assert_eq!(
            lines(&commands),
            vec![
                at("make clean", "apps/debug_exit"),
                at("make", "apps/debug_exit"),
                at("make clean", "apps/uart"),
                at("make", "apps/uart"),
            ]
        );
    }

    #[test]
    fn build_apps_skips_plain_files() {
        let (temp, layout) = project_with_apps(&["uart"]);
        fs::write(temp.path().join("apps/uart.c"), "").unwrap();

        let commands = build_apps(&layout).unwrap();

        assert_eq!(commands.len(), 2);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn build_apps_targets_existing_dir_for_non_utf8_name() {
        use std::os::unix::ffi::OsStrExt;

        let (temp, layout) = project_with_apps(&[]);
        let name = std::ffi::OsStr::from_bytes(b"app\xff");
        fs::create_dir(temp.path().join("apps").join(name)).unwrap();

        let commands = build_apps(&layout).unwrap();

        assert_eq!(commands.len(), 2);
        for command in &commands {
            assert!(command.resolve_dir(temp.path()).is_dir());
        }
    }

    #[test]
    fn build_runs_apps_then_sync_then_compliance_suite() {
        let (_temp, layout) = project_with_apps(&["a", "b"]);

        let commands = build(&layout).unwrap();

        assert_eq!(
            lines(&commands),
            vec![
                at("make clean", "apps/a"),
                at("make", "apps/a"),
                at("make clean", "apps/b"),
                at("make", "apps/b"),
                at("git submodule update --init --recursive", "."),
                at("git submodule update --init --recursive", "riscv-tests"),
                at("autoconf", "riscv-tests"),
                at("./configure", "riscv-tests"),
                at("make", "riscv-tests"),
            ]
        );
    }

    #[test]
    fn build_with_no_apps_still_builds_suite() {
        let (_temp, layout) = project_with_apps(&[]);
        let commands = build(&layout).unwrap();
        assert_eq!(commands.len(), 5);
    }

    #[test]
    fn build_without_apps_root_fails() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        assert!(build(&layout).is_err());
    }

    #[test]
    fn clean_covers_root_cli_and_suite() {
        let layout = ProjectLayout::new("/proj");
        assert_eq!(
            lines(&clean(&layout)),
            vec![
                at("cargo clean", "."),
                at("cargo clean", "emu-cli"),
                at("make clean", "riscv-tests"),
            ]
        );
    }

    #[test]
    fn test_is_single_root_command() {
        let commands = test();
        assert_eq!(lines(&commands), vec![at("cargo test", ".")]);
        assert!(!commands[0].ignores_failure());
    }

    #[test]
    fn log_viewer_is_persistent() {
        let layout = ProjectLayout::new("/proj");
        let commands = run_log_viewer(&layout);

        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].display(), "npm run dev");
        assert_eq!(commands[0].working_dir(), Path::new("frisc-log-viewer"));
        assert_eq!(commands[0].lifetime(), Lifetime::Persistent);
    }

    #[test]
    fn custom_layout_moves_commands() {
        let mut layout = ProjectLayout::new("/proj");
        layout.cli_dir = PathBuf::from("tools/cli");
        layout.compliance_dir = PathBuf::from("vendor/suite");

        let commands = clean(&layout);

        assert_eq!(commands[1].working_dir(), Path::new("tools/cli"));
        assert_eq!(commands[2].working_dir(), Path::new("vendor/suite"));
    }
}

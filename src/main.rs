//! frisc-task CLI entry point.
//!
//! This is the only place that ends the process; everything below returns
//! a `Result`.

use std::process::ExitCode;

use clap::Parser;
use frisc_task::cli::Cli;
use frisc_task::config::{load_config, ExitPolicy, Settings};
use frisc_task::dispatcher::{exit_status, report_failure, Dispatcher};
use frisc_task::registry::Registry;
use frisc_task::shell::SystemRunner;
use frisc_task::ui::{should_use_colors, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so echoed commands stay the main output
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("frisc_task=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("frisc_task=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_settings(cli: &Cli) -> frisc_task::Result<Settings> {
    let project_root = match &cli.project {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    let mut settings = load_config(&project_root, cli.config.as_deref())?.resolve(project_root);
    if let Some(variant) = cli.variant {
        settings.variant = variant;
    }
    if cli.compat_exit {
        settings.exit_policy = ExitPolicy::Compatible;
    }
    Ok(settings)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("frisc-task starting with args: {:?}", cli);

    let mut ui = TerminalUI::new(!cli.no_color && should_use_colors());

    let (settings, registry) = match load_settings(&cli).and_then(|settings| {
        let registry = Registry::for_variant(settings.variant)?;
        Ok((settings, registry))
    }) {
        Ok(loaded) => loaded,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let dispatcher = Dispatcher::new(&registry, &settings.layout).with_dry_run(cli.dry_run);
    let mut runner = SystemRunner::new();

    let result = dispatcher.dispatch(cli.task.as_deref(), &mut runner, &mut ui);

    report_failure(&result, &mut ui);

    ExitCode::from(exit_status(&result, settings.exit_policy))
}

mod cli;
pub mod tui;
pub mod api;

use anyhow::{Context, Result};
use clap::Parser; // needed for Cli::parse()
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use cli::opts::{Cli, Command};
use cli::commands::{run_cli, open_controller};
use tui::app::TuiApp;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

// stderr belongs to the terminal UI, so its events go to a file
fn file_subscriber(path: &Path) -> Result<impl tracing::Subscriber + Send + Sync + 'static> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    match &args.cmd {
        // TUI drives its own loop on its own runtime
        Command::Tui(cmd) => {
            tracing::subscriber::set_global_default(file_subscriber(&cmd.log_path())?)?;
            let rt = Arc::new(Runtime::new()?);
            let ctl = open_controller(&args.endpoint)?;
            let mut app = TuiApp::new(ctl, rt);
            app.run()
        }
        // Everything else uses a single runtime here
        _ => {
            init_logging();
            let rt = Runtime::new()?;
            rt.block_on(run_cli(args))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_events_land_in_the_log_file() {
        let path = std::env::temp_dir().join(format!("flashgen-log-test-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let subscriber = file_subscriber(&path).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(question = "What is 2+2?", "marked as known");
        });

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(written.contains("marked as known"));
        assert!(written.contains("What is 2+2?"));
    }
}

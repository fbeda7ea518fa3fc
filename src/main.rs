mod cli_messages;
mod config;
mod consts;
mod logging;
mod report;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::{SNAPSHOT_HEIGHT, SNAPSHOT_WIDTH};
use crate::logging::LogSink;
use crate::report::{DatasetRegistry, FileReport, builtin};
use crate::ui::tabs::TabId;
use clap::{Parser, Subcommand};
use log::error;
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Report document to display instead of the built-in figures
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,

        /// Disable the dark background
        #[arg(long, action = clap::ArgAction::SetTrue)]
        no_background: bool,

        /// Write logs to this file while the dashboard is open
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,
    },
    /// Render one tab as plain text to stdout
    Snapshot {
        /// Tab to render: overview, model, business or features
        #[arg(long, default_value = "overview", value_parser = TabId::parse)]
        tab: TabId,

        /// Width in terminal cells
        #[arg(long, default_value_t = SNAPSHOT_WIDTH)]
        width: u16,

        /// Height in terminal cells
        #[arg(long, default_value_t = SNAPSHOT_HEIGHT)]
        height: u16,

        /// Report document to render instead of the built-in figures
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
    },
    /// Check a report document against every data invariant
    Validate {
        /// Report document to check
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Write the built-in report document as JSON
    Export {
        /// Destination file
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = Config::load_or_default(&get_config_path()?)?;

    match args.command {
        Command::Start {
            report,
            no_background,
            log_file,
        } => {
            let sink = match log_file.or_else(|| config.log_file.clone()) {
                Some(path) => LogSink::File(path),
                None => LogSink::Disabled,
            };
            logging::init(sink)?;

            let report_path = report.or_else(|| config.report_path.clone());
            let source = report::source_for(report_path.as_deref());
            let registry = report::load_registry(&*source)?;
            let with_background = config.with_background_color && !no_background;
            session::run_tui_mode(registry, &source.describe(), with_background)
        }
        Command::Snapshot {
            tab,
            width,
            height,
            report,
        } => {
            logging::init(LogSink::Stderr)?;
            let report_path = report.or_else(|| config.report_path.clone());
            let source = report::source_for(report_path.as_deref());
            let registry = report::load_registry(&*source)?;
            let text = session::render_snapshot(&registry, tab, width, height)?;
            print!("{}", text);
            Ok(())
        }
        Command::Validate { path } => {
            logging::init(LogSink::Stderr)?;
            validate(&path)
        }
        Command::Export { path } => {
            logging::init(LogSink::Stderr)?;
            report::export_document(&builtin::document(), &path)?;
            print_cmd_success!("Report exported", "{}", path.display());
            Ok(())
        }
    }
}

fn validate(path: &Path) -> Result<(), Box<dyn Error>> {
    let registry = match report::load_registry(&FileReport::new(path)) {
        Ok(registry) => registry,
        Err(e) => {
            error!("{} failed validation: {}", path.display(), e);
            print_cmd_error!("Report is invalid", &e.to_string());
            return Err(e.into());
        }
    };
    print_cmd_success!("Report is valid", "{}", summary(&registry));
    Ok(())
}

fn summary(registry: &DatasetRegistry) -> String {
    format!(
        "{} models, {} evaluated, {} thresholds, {} features, {} checkpoints",
        registry.model_comparison().len(),
        registry.confusion_total(),
        registry.threshold_sweep().len(),
        registry.feature_importance().len(),
        registry.training_curve().len()
    )
}

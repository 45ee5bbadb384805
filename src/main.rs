//! OrderTUI - Main entry point
//!
//! Launches the interactive order wizard by default; the `submit` and
//! `validate` subcommands work on draft order files without a terminal UI.

mod app;
mod catalog;
mod cli;
mod error;
mod form;
mod input;
mod pricing;
mod settings;
mod submission;
mod theme;
mod types;
mod ui;
mod wizard;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};

use crate::catalog::Catalog;
use crate::cli::{Cli, Commands};
use crate::form::FormState;
use crate::settings::SheetsSettings;
use crate::submission::email::SmtpMailer;
use crate::submission::sheets::SheetsAppender;
use crate::submission::{ConfirmationMailer, SubmissionRecord};

/// Initialize tracing with env-filter support (RUST_LOG overrides)
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            info!("Loading catalog variant from: {:?}", path);
            Ok(Catalog::load_from_file(path)?)
        }
        None => Ok(Catalog::music_packs()),
    }
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("OrderTUI starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Some(Commands::Validate { order }) => {
            info!("Validating draft order file: {:?}", order);
            match FormState::load_from_file(&order).and_then(|form| {
                form.validate(&catalog)?;
                Ok(form)
            }) {
                Ok(form) => {
                    let totals = pricing::calculate(&form, &catalog);
                    println!("✓ Draft order is valid: {:?}", order);
                    println!(
                        "  Total: {} {}",
                        totals.grand_total,
                        form.currency.code()
                    );
                }
                Err(e) => {
                    error!("Draft order validation failed: {}", e);
                    eprintln!("✗ Draft order validation failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Submit { order, dry_run }) => {
            info!("Submitting draft order file: {:?}", order);
            run_headless_submit(&order, &catalog, dry_run)?;
        }
        None => {
            info!("No command specified, launching order wizard");
            run_tui(catalog)?;
        }
    }

    Ok(())
}

/// Run the interactive order wizard
fn run_tui(catalog: Catalog) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| error::general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| error::general_error(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| error::general_error(format!("Failed to create terminal: {}", e)))?;

    let result = app::App::new(catalog).and_then(|mut app| app.run(&mut terminal));

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}

/// Submit a draft order file without the TUI
fn run_headless_submit(
    order_path: &Path,
    catalog: &Catalog,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = FormState::load_from_file(order_path)?;
    form.validate(catalog)?;

    let record = SubmissionRecord::from_form(&form, catalog);
    println!("✓ Draft order loaded and validated");
    println!("  Pack: {}", record.primary_pack);
    println!("  Accompagnement: {}", record.accompaniments_cell());
    println!("  Total: {}", record.total_display());

    if dry_run {
        info!("Dry-run mode, skipping submission");
        println!("Dry-run: order was not submitted.");
        return Ok(());
    }

    let appender = SheetsAppender::new(SheetsSettings::from_env()?, &catalog.sheet_title)?;
    // Mail problems degrade to "no email"; they never block the append
    let mailer = SmtpMailer::from_env();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(submission::submit(
        &record,
        &appender,
        mailer.as_ref().map(|m| m as &dyn ConfirmationMailer),
    ));

    if outcome.success {
        println!("✓ {}", outcome.message);
        if !outcome.email_sent {
            println!("  (aucun email de confirmation envoyé)");
        }
        Ok(())
    } else {
        eprintln!("✗ {}", outcome.message);
        std::process::exit(1);
    }
}

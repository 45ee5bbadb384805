//! Main application module
//!
//! Owns the event loop: draw the current wizard step, feed key events into
//! [`AppState`], and run the submission round trip when the review step is
//! confirmed. The loop is synchronous; the single async operation (append +
//! email) is driven to completion on an embedded runtime.

pub mod state;

pub use state::{AppState, ConfirmationSummary, KeyOutcome, StatusMessage};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::error::{OrderTuiError, Result};
use crate::settings::SheetsSettings;
use crate::submission::email::SmtpMailer;
use crate::submission::sheets::SheetsAppender;
use crate::submission::{self, ConfirmationMailer, SubmissionRecord, SubmitOutcome};
use crate::ui::UiRenderer;
use crate::wizard::WizardStep;

/// Main application
pub struct App {
    state: AppState,
    ui: UiRenderer,
    runtime: tokio::runtime::Runtime,
}

impl App {
    pub fn new(catalog: Catalog) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| OrderTuiError::general(format!("runtime init failed: {}", e)))?;

        Ok(Self {
            state: AppState::new(catalog),
            ui: UiRenderer::new(),
            runtime,
        })
    }

    /// Run the wizard until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("order wizard started");

        loop {
            terminal.draw(|f| self.ui.render(f, &self.state))?;

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                // Windows terminals deliver both press and release
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match self.state.handle_key(key) {
                    KeyOutcome::Continue => {}
                    KeyOutcome::Quit => {
                        info!("order wizard exiting");
                        return Ok(());
                    }
                    KeyOutcome::Submit => {
                        self.state.is_submitting = true;
                        self.state.status_message =
                            Some(StatusMessage::info("Envoi en cours..."));
                        terminal.draw(|f| self.ui.render(f, &self.state))?;

                        let record =
                            SubmissionRecord::from_form(&self.state.form, &self.state.catalog);
                        let outcome = self.run_submission(&record);
                        self.state.is_submitting = false;

                        if outcome.success {
                            self.state.confirmation = Some(ConfirmationSummary::from_record(
                                &record,
                                outcome.email_sent,
                            ));
                            self.state.step = WizardStep::Done;
                            self.state.status_message = None;
                        } else {
                            self.state.status_message =
                                Some(StatusMessage::error(outcome.message));
                        }
                    }
                }
            }
        }
    }

    /// Drive one submission round trip on the embedded runtime.
    ///
    /// Configuration problems are mapped to the same generic failure the
    /// user sees for network errors; details go to the log.
    fn run_submission(&self, record: &SubmissionRecord) -> SubmitOutcome {
        let sheets_settings = match SheetsSettings::from_env() {
            Ok(s) => s,
            Err(e) => {
                error!(error = %e, "sheets settings unavailable");
                return SubmitOutcome::failure();
            }
        };

        let appender = match SheetsAppender::new(sheets_settings, &self.state.catalog.sheet_title) {
            Ok(a) => a,
            Err(e) => {
                error!(error = %e, "sheets appender init failed");
                return SubmitOutcome::failure();
            }
        };

        // A broken SMTP config degrades to "no email", it never blocks the
        // order itself.
        let mailer = SmtpMailer::from_env();

        self.runtime.block_on(submission::submit(
            record,
            &appender,
            mailer.as_ref().map(|m| m as &dyn ConfirmationMailer),
        ))
    }
}

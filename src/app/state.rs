//! Application state management
//!
//! `AppState` owns the wizard position, the form under edit, and the
//! per-step cursors. Key handling mutates state and reports what the event
//! loop should do next; rendering reads state and never mutates it.

use crossterm::event::{KeyCode, KeyEvent};

use crate::catalog::Catalog;
use crate::form::FormState;
use crate::input::TextField;
use crate::pricing::PriceTotals;
use crate::submission::SubmissionRecord;
use crate::types::{Currency, PaymentFrequency, PaymentMethod};
use crate::wizard::{self, WizardStep};
use strum::IntoEnumIterator;

/// Number of focusable fields on the contact step:
/// name, country code, phone, email, currency zone.
pub const CONTACT_FIELDS: usize = 5;

/// What the event loop should do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running.
    Continue,
    /// The user confirmed the review step; run the submission.
    Submit,
    /// Exit the application.
    Quit,
}

/// Transient feedback line shown under the current screen.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Display-only summary shown on the confirmation step.
#[derive(Debug, Clone)]
pub struct ConfirmationSummary {
    pub reference: String,
    pub pack_name: String,
    pub frequency_label: &'static str,
    pub currency_label: &'static str,
    pub totals: PriceTotals,
    /// Whether the confirmation email actually went out.
    pub email_sent: bool,
}

impl ConfirmationSummary {
    pub fn from_record(record: &SubmissionRecord, email_sent: bool) -> Self {
        Self {
            reference: record.submission_id.to_string(),
            pack_name: record.primary_pack.clone(),
            frequency_label: record.frequency.label(),
            currency_label: record.currency.code(),
            totals: record.totals,
            email_sent,
        }
    }
}

/// Main application state.
pub struct AppState {
    pub step: WizardStep,
    pub form: FormState,
    pub catalog: Catalog,

    // Contact step
    pub name_field: TextField,
    pub country_field: TextField,
    pub phone_field: TextField,
    pub email_field: TextField,
    pub contact_focus: usize,

    // List cursors
    pub pack_cursor: usize,
    pub accompaniment_cursor: usize,

    // Payment step: 0 = frequency row, 1 = method list
    pub payment_focus: usize,
    pub method_cursor: usize,

    // Comments step
    pub comments_field: TextField,

    /// Transient feedback line at the bottom of the screen.
    pub status_message: Option<StatusMessage>,
    /// True while a submission round trip is in flight.
    pub is_submitting: bool,
    pub confirmation: Option<ConfirmationSummary>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let form = FormState::new();
        Self {
            step: WizardStep::default(),
            country_field: TextField::with_value(form.country_code.clone()),
            name_field: TextField::new(),
            phone_field: TextField::new(),
            email_field: TextField::new(),
            contact_focus: 0,
            pack_cursor: 0,
            accompaniment_cursor: 0,
            payment_focus: 0,
            method_cursor: 0,
            comments_field: TextField::new(),
            status_message: None,
            is_submitting: false,
            confirmation: None,
            form,
            catalog,
        }
    }

    /// Start over with an empty form after a completed order.
    pub fn reset(&mut self) {
        *self = Self::new(self.catalog.clone());
    }

    /// Copy the text fields into the form. Called before validation,
    /// navigation, and submission so the form is always current.
    pub fn sync_form(&mut self) {
        self.form.name = self.name_field.value().to_string();
        self.form.country_code = self.country_field.value().to_string();
        self.form.phone = self.phone_field.value().to_string();
        self.form.email = self.email_field.value().to_string();
        self.form.comments = self.comments_field.value().to_string();
    }

    fn try_advance(&mut self) {
        self.sync_form();
        if wizard::can_advance(self.step, &self.form, &self.catalog) {
            if let Some(next) = self.step.next() {
                self.step = next;
                self.status_message = None;
            }
        } else {
            self.status_message = Some(StatusMessage::error(
                "Veuillez compléter les champs requis.",
            ));
        }
    }

    fn go_back(&mut self) {
        self.sync_form();
        if let Some(prev) = self.step.previous() {
            self.step = prev;
            self.status_message = None;
        }
    }

    /// Handle one key event for the current step.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        // Ignore input while the round trip is in flight.
        if self.is_submitting {
            return KeyOutcome::Continue;
        }

        match self.step {
            WizardStep::Contact => self.handle_contact_key(key),
            WizardStep::PackSelect => self.handle_pack_key(key),
            WizardStep::Accompaniment => self.handle_accompaniment_key(key),
            WizardStep::Payment => self.handle_payment_key(key),
            WizardStep::Comments => self.handle_comments_key(key),
            WizardStep::Review => self.handle_review_key(key),
            WizardStep::Done => self.handle_done_key(key),
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Enter => self.try_advance(),
            KeyCode::Tab | KeyCode::Down => {
                self.contact_focus = (self.contact_focus + 1) % CONTACT_FIELDS;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.contact_focus = (self.contact_focus + CONTACT_FIELDS - 1) % CONTACT_FIELDS;
            }
            _ => {
                // Zone selector toggles with arrows/space, text fields eat
                // everything else.
                if self.contact_focus == 4 {
                    if matches!(
                        key.code,
                        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                    ) {
                        self.form.currency = match self.form.currency {
                            Currency::Eur => Currency::Fcfa,
                            Currency::Fcfa => Currency::Eur,
                        };
                    }
                } else {
                    let field = match self.contact_focus {
                        0 => &mut self.name_field,
                        1 => &mut self.country_field,
                        2 => &mut self.phone_field,
                        _ => &mut self.email_field,
                    };
                    field.handle_key(key);
                }
            }
        }
        KeyOutcome::Continue
    }

    fn handle_pack_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let count = self.catalog.primary_packs.len();
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => {
                // Enter selects the highlighted pack and advances.
                if let Some(pack) = self.catalog.primary_packs.get(self.pack_cursor) {
                    self.form.selected_pack = Some(pack.id.clone());
                }
                self.try_advance();
            }
            KeyCode::Char(' ') => {
                if let Some(pack) = self.catalog.primary_packs.get(self.pack_cursor) {
                    self.form.selected_pack = Some(pack.id.clone());
                }
            }
            KeyCode::Down | KeyCode::Tab => {
                self.pack_cursor = (self.pack_cursor + 1) % count;
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.pack_cursor = (self.pack_cursor + count - 1) % count;
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn handle_accompaniment_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let count = self.catalog.accompaniment_packs.len();
        let pack_id = self
            .catalog
            .accompaniment_packs
            .get(self.accompaniment_cursor)
            .map(|p| p.id.clone());

        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => self.try_advance(),
            // A catalog variant may ship without accompaniments; navigation
            // keys are no-ops then.
            KeyCode::Down | KeyCode::Tab if count > 0 => {
                self.accompaniment_cursor = (self.accompaniment_cursor + 1) % count;
            }
            KeyCode::Up | KeyCode::BackTab if count > 0 => {
                self.accompaniment_cursor = (self.accompaniment_cursor + count - 1) % count;
            }
            KeyCode::Right | KeyCode::Char('+') => {
                if let Some(id) = pack_id {
                    self.form.increment(&id);
                }
            }
            KeyCode::Left | KeyCode::Char('-') => {
                if let Some(id) = pack_id {
                    self.form.decrement(&id);
                }
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn handle_payment_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let methods: Vec<PaymentMethod> = PaymentMethod::iter().collect();
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => self.try_advance(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.payment_focus = 1 - self.payment_focus;
            }
            KeyCode::Left | KeyCode::Right if self.payment_focus == 0 => {
                let freqs: Vec<PaymentFrequency> = PaymentFrequency::iter().collect();
                let pos = freqs
                    .iter()
                    .position(|f| *f == self.form.frequency)
                    .unwrap_or(0);
                let pos = if key.code == KeyCode::Right {
                    (pos + 1) % freqs.len()
                } else {
                    (pos + freqs.len() - 1) % freqs.len()
                };
                self.form.frequency = freqs[pos];
            }
            KeyCode::Down if self.payment_focus == 1 => {
                self.method_cursor = (self.method_cursor + 1) % methods.len();
            }
            KeyCode::Up if self.payment_focus == 1 => {
                self.method_cursor = (self.method_cursor + methods.len() - 1) % methods.len();
            }
            KeyCode::Char(' ') if self.payment_focus == 1 => {
                self.form.method = methods.get(self.method_cursor).copied();
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn handle_comments_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => self.try_advance(),
            _ => {
                self.comments_field.handle_key(key);
            }
        }
        KeyOutcome::Continue
    }

    fn handle_review_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => {
                self.sync_form();
                return KeyOutcome::Submit;
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn handle_done_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Char('n') => {
                self.reset();
                KeyOutcome::Continue
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => KeyOutcome::Quit,
            _ => KeyOutcome::Continue,
        }
    }
}

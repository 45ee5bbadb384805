//! Integration tests for the wizard flow
//!
//! Drives `AppState` with synthetic key events end to end, the same way the
//! event loop does, and checks the form that would be submitted.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use ordertui::app::{AppState, ConfirmationSummary, KeyOutcome};
use ordertui::catalog::Catalog;
use ordertui::pricing;
use ordertui::submission::SubmissionRecord;
use ordertui::types::{Currency, PaymentFrequency};
use ordertui::ui::UiRenderer;
use ordertui::wizard::WizardStep;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        state.handle_key(key(KeyCode::Char(c)));
    }
}

/// Walk the wizard from contact to review with a full order.
fn walk_to_review(state: &mut AppState) {
    // Contact step: name, then Tab through to phone and email
    type_text(state, "Marie Dupont");
    state.handle_key(key(KeyCode::Tab)); // country code (keep +33)
    state.handle_key(key(KeyCode::Tab)); // phone
    type_text(state, "612345678");
    state.handle_key(key(KeyCode::Tab)); // email
    type_text(state, "marie@example.com");
    state.handle_key(key(KeyCode::Enter));
    assert_eq!(state.step, WizardStep::PackSelect);

    // Select the second pack (david)
    state.handle_key(key(KeyCode::Down));
    state.handle_key(key(KeyCode::Enter));
    assert_eq!(state.step, WizardStep::Accompaniment);

    // Two units of the first accompaniment (asaph)
    state.handle_key(key(KeyCode::Char('+')));
    state.handle_key(key(KeyCode::Char('+')));
    state.handle_key(key(KeyCode::Enter));
    assert_eq!(state.step, WizardStep::Payment);

    // Quarterly frequency
    state.handle_key(key(KeyCode::Right));
    state.handle_key(key(KeyCode::Enter));
    assert_eq!(state.step, WizardStep::Comments);

    type_text(state, "Merci");
    state.handle_key(key(KeyCode::Enter));
    assert_eq!(state.step, WizardStep::Review);
}

#[test]
fn test_full_wizard_flow() {
    let mut state = AppState::new(Catalog::music_packs());
    walk_to_review(&mut state);

    assert_eq!(state.form.name, "Marie Dupont");
    assert_eq!(state.form.full_phone(), "+33 612345678");
    assert_eq!(state.form.selected_pack.as_deref(), Some("david"));
    assert_eq!(state.form.quantity("asaph"), 2);
    assert_eq!(state.form.frequency, PaymentFrequency::Quarterly);
    assert_eq!(state.form.comments, "Merci");

    // david is recurring: 20 EUR x3, plus 2 x 10 EUR accompaniment
    let totals = pricing::calculate(&state.form, &state.catalog);
    assert_eq!(totals.primary_total, 60);
    assert_eq!(totals.accompaniment_total, 20);
    assert_eq!(totals.grand_total, 80);

    // Enter on review requests the submission round trip
    assert_eq!(state.handle_key(key(KeyCode::Enter)), KeyOutcome::Submit);
}

#[test]
fn test_cannot_skip_contact_step() {
    let mut state = AppState::new(Catalog::music_packs());

    // Repeated Enter without data never leaves the first step
    for _ in 0..3 {
        state.handle_key(key(KeyCode::Enter));
    }
    assert_eq!(state.step, WizardStep::Contact);
    assert!(state.status_message.is_some());
}

#[test]
fn test_going_back_preserves_form_data() {
    let mut state = AppState::new(Catalog::music_packs());
    walk_to_review(&mut state);

    // Back to the accompaniment step and forward again
    state.handle_key(key(KeyCode::Esc));
    state.handle_key(key(KeyCode::Esc));
    state.handle_key(key(KeyCode::Esc));
    assert_eq!(state.step, WizardStep::Accompaniment);

    state.handle_key(key(KeyCode::Enter));
    state.handle_key(key(KeyCode::Enter));
    state.handle_key(key(KeyCode::Enter));
    assert_eq!(state.step, WizardStep::Review);

    assert_eq!(state.form.name, "Marie Dupont");
    assert_eq!(state.form.quantity("asaph"), 2);
    assert_eq!(state.form.frequency, PaymentFrequency::Quarterly);
}

#[test]
fn test_currency_zone_changes_displayed_prices() {
    let mut state = AppState::new(Catalog::music_packs());
    walk_to_review(&mut state);

    // Back to contact, switch to FCFA, forward again
    for _ in 0..5 {
        state.handle_key(key(KeyCode::Esc));
    }
    assert_eq!(state.step, WizardStep::Contact);

    state.contact_focus = 4;
    state.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(state.form.currency, Currency::Fcfa);

    for _ in 0..5 {
        state.handle_key(key(KeyCode::Enter));
    }
    assert_eq!(state.step, WizardStep::Review);

    // Same order priced in the FCFA column: 10000 x3 + 2 x 5000
    let totals = pricing::calculate(&state.form, &state.catalog);
    assert_eq!(totals.grand_total, 40_000);
}

fn rendered_text(state: &AppState) -> String {
    let ui = UiRenderer::new();
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
    terminal.draw(|f| ui.render(f, state)).expect("draw frame");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_done_screen_mentions_email_only_when_sent() {
    let mut state = AppState::new(Catalog::music_packs());
    walk_to_review(&mut state);
    state.sync_form();
    let record = SubmissionRecord::from_form(&state.form, &state.catalog);
    state.step = WizardStep::Done;

    state.confirmation = Some(ConfirmationSummary::from_record(&record, false));
    assert!(!rendered_text(&state).contains("email de confirmation"));

    state.confirmation = Some(ConfirmationSummary::from_record(&record, true));
    assert!(rendered_text(&state).contains("email de confirmation"));
}

#[test]
fn test_new_order_after_confirmation() {
    let mut state = AppState::new(Catalog::music_packs());
    walk_to_review(&mut state);

    state.step = WizardStep::Done;
    state.handle_key(key(KeyCode::Char('n')));

    assert_eq!(state.step, WizardStep::Contact);
    assert!(state.form.name.is_empty());
    assert_eq!(state.form.quantity("asaph"), 0);
    assert!(state.form.selected_pack.is_none());
}

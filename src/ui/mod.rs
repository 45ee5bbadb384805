//! UI rendering
//!
//! Top-level frame layout and per-step dispatch. Each wizard step gets the
//! same chrome (title, progress, hints, status line) around its own screen.

pub mod header;
pub mod screens;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::AppState;
use crate::wizard::WizardStep;

/// Renders the full frame for the current wizard step.
#[derive(Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // title
                Constraint::Length(1), // progress
                Constraint::Min(5),    // screen body
                Constraint::Length(1), // status
                Constraint::Length(1), // hints
            ])
            .split(f.area());

        header::render_title(f, rows[0], state.step);
        header::render_progress(f, rows[1], state.step);

        match state.step {
            WizardStep::Contact => screens::render_contact(f, rows[2], state),
            WizardStep::PackSelect => screens::render_pack_select(f, rows[2], state),
            WizardStep::Accompaniment => screens::render_accompaniment(f, rows[2], state),
            WizardStep::Payment => screens::render_payment(f, rows[2], state),
            WizardStep::Comments => screens::render_comments(f, rows[2], state),
            WizardStep::Review => screens::render_review(f, rows[2], state),
            WizardStep::Done => screens::render_done(f, rows[2], state),
        }

        if let Some(status) = &state.status_message {
            header::render_status(f, rows[3], &status.text, status.is_error);
        }

        header::render_instructions(f, rows[4], Self::hints(state.step));
    }

    fn hints(step: WizardStep) -> &'static str {
        match step {
            WizardStep::Contact => "Tab: champ suivant | Entrée: continuer | Échap: quitter",
            WizardStep::PackSelect => {
                "↑/↓: naviguer | Espace: choisir | Entrée: continuer | Échap: retour"
            }
            WizardStep::Accompaniment => {
                "↑/↓: naviguer | +/-: quantité | Entrée: continuer | Échap: retour"
            }
            WizardStep::Payment => {
                "Tab: zone | ←/→: fréquence | Espace: choisir | Entrée: continuer | Échap: retour"
            }
            WizardStep::Comments => "Entrée: continuer | Échap: retour",
            WizardStep::Review => "Entrée: confirmer la commande | Échap: retour",
            WizardStep::Done => "n: nouvelle commande | Entrée/Échap: quitter",
        }
    }
}

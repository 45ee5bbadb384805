//! Wizard step state machine.
//!
//! The order form progresses through these steps linearly. Users cannot
//! skip steps or proceed without completing required fields.
//!
//! # State Transitions
//!
//! ```text
//! Contact -> PackSelect -> Accompaniment -> Payment -> Comments -> Review -> Done
//! ```
//!
//! # Invariants
//!
//! - Cannot advance past `Contact` without name, phone, and email
//! - Cannot advance past `PackSelect` without a primary pack selection
//! - `Review` advances only through a successful submission
//! - Cannot go backwards from `Done`

use crate::catalog::Catalog;
use crate::form::FormState;

/// Wizard step for the order form workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// Personal information: name, phone, email, currency zone.
    #[default]
    Contact,
    /// Primary pack selection - single-select, drives the base price.
    PackSelect,
    /// Accompaniment packs - optional, quantity per pack.
    Accompaniment,
    /// Payment frequency and method.
    Payment,
    /// Free-text comments and suggestions.
    Comments,
    /// Order summary with computed totals; confirming submits.
    Review,
    /// Submission recorded - confirmation summary.
    Done,
}

impl WizardStep {
    /// Get the next step in the wizard sequence.
    ///
    /// Returns `None` if at the final step. `Review -> Done` happens
    /// through submission, not through plain navigation, but is still
    /// part of the linear sequence.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Contact => Some(Self::PackSelect),
            Self::PackSelect => Some(Self::Accompaniment),
            Self::Accompaniment => Some(Self::Payment),
            Self::Payment => Some(Self::Comments),
            Self::Comments => Some(Self::Review),
            Self::Review => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Get the previous step in the wizard sequence.
    ///
    /// Returns `None` at the first step or when going back is not allowed.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Contact => None,
            Self::PackSelect => Some(Self::Contact),
            Self::Accompaniment => Some(Self::PackSelect),
            Self::Payment => Some(Self::Accompaniment),
            Self::Comments => Some(Self::Payment),
            Self::Review => Some(Self::Comments),
            // The order has been recorded; there is nothing to go back to.
            Self::Done => None,
        }
    }

    /// Check if the current step allows going back.
    pub fn can_go_back(&self) -> bool {
        self.previous().is_some()
    }

    /// Whether this is the terminal review step where Enter submits.
    pub fn is_review(&self) -> bool {
        matches!(self, Self::Review)
    }

    /// Get the display title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Contact => "Informations Personnelles",
            Self::PackSelect => "Sélection du Pack Principal",
            Self::Accompaniment => "Packs d'Accompagnement (Optionnel)",
            Self::Payment => "Options de Paiement",
            Self::Comments => "Commentaires et Suggestions",
            Self::Review => "Récapitulatif de votre commande",
            Self::Done => "Commande Confirmée",
        }
    }

    /// Get the step number (1-indexed for display).
    pub fn step_number(&self) -> usize {
        match self {
            Self::Contact => 1,
            Self::PackSelect => 2,
            Self::Accompaniment => 3,
            Self::Payment => 4,
            Self::Comments => 5,
            Self::Review => 6,
            Self::Done => 7,
        }
    }

    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 7;
}

/// Check whether the wizard may advance from `step` given the current form.
///
/// Rules are required-field presence checks per step. The UI disables the
/// "next" control when this returns false; advancing is then a no-op.
pub fn can_advance(step: WizardStep, form: &FormState, catalog: &Catalog) -> bool {
    match step {
        WizardStep::Contact => {
            !form.name.trim().is_empty()
                && !form.phone.trim().is_empty()
                && !form.email.trim().is_empty()
        }
        WizardStep::PackSelect => form
            .selected_pack
            .as_deref()
            .is_some_and(|id| catalog.primary(id).is_some()),
        // Optional data: always passable.
        WizardStep::Accompaniment | WizardStep::Payment | WizardStep::Comments => true,
        // Review advances only via submission; Done is terminal.
        WizardStep::Review | WizardStep::Done => false,
    }
}

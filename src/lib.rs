//! OrderTUI Library
//!
//! Core functionality for the terminal order wizard: the pack catalog,
//! form state, price calculation, and the submission pipeline.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod form;
pub mod input;
pub mod pricing;
pub mod settings;
pub mod submission;
pub mod theme;
pub mod types;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogEntry};
pub use error::OrderTuiError;
pub use form::FormState;
pub use pricing::PriceTotals;
pub use submission::{ConfirmationMailer, RowAppender, SubmissionRecord, SubmitOutcome};
pub use types::{Currency, PaymentFrequency, PaymentMethod};
pub use wizard::WizardStep;

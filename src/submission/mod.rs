//! Order submission.
//!
//! One submission is a single round trip: build an immutable
//! [`SubmissionRecord`] from the finalized form, append it to the order
//! spreadsheet, then send the confirmation email. The spreadsheet append is
//! authoritative; the email is best-effort and can never fail a submission.

pub mod email;
pub mod sheets;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::form::FormState;
use crate::pricing::{self, PriceTotals};
use crate::types::{Currency, PaymentFrequency, PaymentMethod};

/// Immutable snapshot of one order at the moment of submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    /// Client-generated id, unique per submission attempt.
    pub submission_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    /// Phone with the dialing prefix.
    pub phone: String,
    pub email: String,
    pub currency: Currency,
    /// Display name of the selected primary pack.
    pub primary_pack: String,
    /// "Name xQty" pairs for every nonzero accompaniment.
    pub accompaniments: Vec<String>,
    pub frequency: PaymentFrequency,
    pub method: Option<PaymentMethod>,
    pub comments: String,
    pub totals: PriceTotals,
}

impl SubmissionRecord {
    /// Snapshot the finalized form. Totals are computed here so the sheet
    /// row, the email, and the confirmation screen all show the same
    /// numbers.
    pub fn from_form(form: &FormState, catalog: &Catalog) -> Self {
        let primary_pack = form
            .selected_pack
            .as_deref()
            .and_then(|id| catalog.primary(id))
            .map(|p| p.name.clone())
            .unwrap_or_default();

        let accompaniments = form
            .selected_accompaniments(catalog)
            .iter()
            .map(|(entry, quantity)| format!("{} x{}", entry.name, quantity))
            .collect();

        Self {
            submission_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: form.name.trim().to_string(),
            phone: form.full_phone(),
            email: form.email.trim().to_string(),
            currency: form.currency,
            primary_pack,
            accompaniments,
            frequency: form.frequency,
            method: form.method,
            comments: form.comments.trim().to_string(),
            totals: pricing::calculate(form, catalog),
        }
    }

    /// Accompaniment summary as a single sheet cell.
    pub fn accompaniments_cell(&self) -> String {
        if self.accompaniments.is_empty() {
            "Aucun".to_string()
        } else {
            self.accompaniments.join(", ")
        }
    }

    /// Grand total with the currency code, e.g. "60 EUR".
    pub fn total_display(&self) -> String {
        format!("{} {}", self.totals.grand_total, self.currency.code())
    }
}

/// Result of one submission attempt, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub success: bool,
    /// Whether the confirmation email actually went out. False when SMTP is
    /// not configured or the send failed; the order is still recorded.
    pub email_sent: bool,
    pub message: String,
}

impl SubmitOutcome {
    fn success(email_sent: bool) -> Self {
        Self {
            success: true,
            email_sent,
            message: "Votre commande a été enregistrée avec succès.".to_string(),
        }
    }

    /// Failure text is deliberately generic: backend details stay in the
    /// logs, the user just gets asked to retry.
    pub fn failure() -> Self {
        Self {
            success: false,
            email_sent: false,
            message: "Erreur de connexion. Veuillez réessayer.".to_string(),
        }
    }
}

/// Appends one order row to the durable order store.
#[async_trait]
pub trait RowAppender: Send + Sync {
    async fn append(&self, record: &SubmissionRecord) -> Result<()>;
}

/// Sends the order confirmation email.
#[async_trait]
pub trait ConfirmationMailer: Send + Sync {
    async fn send(&self, record: &SubmissionRecord) -> Result<()>;
}

/// Run one submission: append the row, then send the confirmation.
///
/// The append must succeed before the mailer is invoked at all; an append
/// failure is a failed submission. A mailer failure is logged and the
/// submission still succeeds.
pub async fn submit(
    record: &SubmissionRecord,
    appender: &dyn RowAppender,
    mailer: Option<&dyn ConfirmationMailer>,
) -> SubmitOutcome {
    if let Err(e) = appender.append(record).await {
        error!(
            submission_id = %record.submission_id,
            error = %e,
            "order row append failed"
        );
        return SubmitOutcome::failure();
    }

    info!(
        submission_id = %record.submission_id,
        total = record.totals.grand_total,
        currency = record.currency.code(),
        "order recorded"
    );

    let email_sent = match mailer {
        Some(mailer) => match mailer.send(record).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    submission_id = %record.submission_id,
                    error = %e,
                    "confirmation email failed, order is still recorded"
                );
                false
            }
        },
        None => {
            info!("smtp not configured, skipping confirmation email");
            false
        }
    };

    SubmitOutcome::success(email_sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderTuiError;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn sample_record() -> SubmissionRecord {
        let mut form = FormState::new();
        form.name = "Marie Dupont".to_string();
        form.phone = "612345678".to_string();
        form.email = "marie@example.com".to_string();
        form.selected_pack = Some("david".to_string());
        form.set_quantity("asaph", 2);
        SubmissionRecord::from_form(&form, &Catalog::music_packs())
    }

    struct OkAppender;
    #[async_trait]
    impl RowAppender for OkAppender {
        async fn append(&self, _record: &SubmissionRecord) -> Result<()> {
            Ok(())
        }
    }

    struct FailingAppender;
    #[async_trait]
    impl RowAppender for FailingAppender {
        async fn append(&self, _record: &SubmissionRecord) -> Result<()> {
            Err(OrderTuiError::submission("503 from the sheets API"))
        }
    }

    struct RecordingMailer {
        called: AtomicBool,
        fail: bool,
    }
    #[async_trait]
    impl ConfirmationMailer for RecordingMailer {
        async fn send(&self, _record: &SubmissionRecord) -> Result<()> {
            self.called.store(true, Ordering::SeqCst);
            if self.fail {
                Err(OrderTuiError::email("relay refused"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_record_snapshot() {
        let record = sample_record();
        assert_eq!(record.primary_pack, "Pack David");
        assert_eq!(record.phone, "+33 612345678");
        assert_eq!(record.accompaniments, vec!["Pack Asaph x2".to_string()]);
        assert_eq!(record.accompaniments_cell(), "Pack Asaph x2");
        // david 20 EUR monthly + asaph 2x10 EUR
        assert_eq!(record.total_display(), "40 EUR");
    }

    #[test]
    fn test_empty_accompaniments_cell() {
        let mut form = FormState::new();
        form.selected_pack = Some("free".to_string());
        let record = SubmissionRecord::from_form(&form, &Catalog::music_packs());
        assert_eq!(record.accompaniments_cell(), "Aucun");
    }

    #[test]
    fn test_submission_ids_are_unique() {
        let a = sample_record();
        let b = sample_record();
        assert_ne!(a.submission_id, b.submission_id);
    }

    #[tokio::test]
    async fn test_submit_success_path() {
        let mailer = RecordingMailer {
            called: AtomicBool::new(false),
            fail: false,
        };
        let outcome = submit(&sample_record(), &OkAppender, Some(&mailer)).await;
        assert!(outcome.success);
        assert!(outcome.email_sent);
        assert!(mailer.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_append_failure_skips_mailer() {
        let mailer = RecordingMailer {
            called: AtomicBool::new(false),
            fail: false,
        };
        let outcome = submit(&sample_record(), &FailingAppender, Some(&mailer)).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Erreur de connexion. Veuillez réessayer.");
        // Email must not go out for an unrecorded order
        assert!(!mailer.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_mailer_failure_is_not_fatal() {
        let mailer = RecordingMailer {
            called: AtomicBool::new(false),
            fail: true,
        };
        let outcome = submit(&sample_record(), &OkAppender, Some(&mailer)).await;
        assert!(outcome.success);
        // The send failure is logged but the outcome reflects it
        assert!(!outcome.email_sent);
        assert!(mailer.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_submit_without_mailer() {
        let outcome = submit(&sample_record(), &OkAppender, None).await;
        assert!(outcome.success);
        assert!(!outcome.email_sent);
    }
}

//! Confirmation email.
//!
//! Implements [`ConfirmationMailer`] over an async SMTP transport. The
//! message is a short HTML summary of the recorded order, sent to the
//! customer with an optional operator copy.

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use crate::error::{OrderTuiError, Result};
use crate::settings::SmtpSettings;
use crate::submission::{ConfirmationMailer, SubmissionRecord};

/// SMTP-backed [`ConfirmationMailer`].
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    cc: Option<Mailbox>,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self> {
        let builder = if settings.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
        }
        .map_err(|e| OrderTuiError::config(format!("bad SMTP host: {}", e)))?;

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.user.clone(),
                settings.pass.clone(),
            ))
            .build();

        let from = settings
            .user
            .parse()
            .map_err(|e| OrderTuiError::config(format!("SMTP_USER is not an address: {}", e)))?;

        let cc = settings
            .cc_address
            .as_deref()
            .map(|addr| {
                addr.parse().map_err(|e| {
                    OrderTuiError::config(format!("ORDER_CC_EMAIL is not an address: {}", e))
                })
            })
            .transpose()?;

        Ok(Self { transport, from, cc })
    }

    /// Build a mailer from the environment, degrading to `None` when SMTP
    /// is absent or misconfigured. A broken mail setup must never block an
    /// order, so config errors are logged and swallowed here.
    pub fn from_env() -> Option<Self> {
        match SmtpSettings::from_env() {
            Ok(Some(settings)) => match Self::new(&settings) {
                Ok(mailer) => Some(mailer),
                Err(e) => {
                    error!(error = %e, "smtp mailer init failed, skipping email");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                error!(error = %e, "smtp settings invalid, skipping email");
                None
            }
        }
    }

    fn body(record: &SubmissionRecord) -> String {
        let mut lines = vec![
            format!("<p>Bonjour {},</p>", record.name),
            "<p>Votre commande a bien été enregistrée. Récapitulatif :</p>".to_string(),
            "<ul>".to_string(),
            format!("<li>Référence : {}</li>", record.submission_id),
            format!("<li>Pack principal : {}</li>", record.primary_pack),
        ];

        if !record.accompaniments.is_empty() {
            lines.push(format!(
                "<li>Packs d'accompagnement : {}</li>",
                record.accompaniments_cell()
            ));
        }

        lines.push(format!(
            "<li>Fréquence de paiement : {}</li>",
            record.frequency.label()
        ));
        lines.push(format!("<li>Prix total : {}</li>", record.total_display()));
        lines.push("</ul>".to_string());
        lines.push(
            "<p>Nous vous contacterons pour finaliser le paiement. Merci !</p>".to_string(),
        );

        lines.join("\n")
    }
}

#[async_trait]
impl ConfirmationMailer for SmtpMailer {
    async fn send(&self, record: &SubmissionRecord) -> Result<()> {
        let to: Mailbox = record
            .email
            .parse()
            .map_err(|e| OrderTuiError::email(format!("recipient address: {}", e)))?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(format!("Confirmation de commande - {}", record.primary_pack))
            .header(ContentType::TEXT_HTML);

        if let Some(cc) = &self.cc {
            builder = builder.cc(cc.clone());
        }

        let message = builder
            .body(Self::body(record))
            .map_err(|e| OrderTuiError::email(format!("message build failed: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| OrderTuiError::email(format!("SMTP send failed: {}", e)))?;

        info!(
            submission_id = %record.submission_id,
            to = %record.email,
            "confirmation email sent"
        );
        Ok(())
    }
}

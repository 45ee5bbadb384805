//! Environment-sourced collaborator settings.
//!
//! Credentials for the spreadsheet and mail collaborators are read from the
//! environment at submit time, never at startup. A missing required value is
//! a fatal precondition for the submission call and surfaces as an error
//! (which the handler converts into a failure outcome), not a panic.

use crate::error::{OrderTuiError, Result};

fn required(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| OrderTuiError::config(format!("{} is not set", name)))
        .and_then(|v| {
            if v.trim().is_empty() {
                Err(OrderTuiError::config(format!("{} is empty", name)))
            } else {
                Ok(v)
            }
        })
}

/// Google Sheets collaborator settings.
#[derive(Debug, Clone)]
pub struct SheetsSettings {
    pub service_account_email: String,
    /// PEM-encoded RSA private key for the service account.
    pub private_key: String,
    pub sheet_id: String,
}

impl SheetsSettings {
    /// Read settings from the environment.
    ///
    /// `GOOGLE_PRIVATE_KEY` is commonly stored with literal `\n` sequences
    /// (single-line env files); those are unescaped here.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            service_account_email: required("GOOGLE_SERVICE_ACCOUNT_EMAIL")?,
            private_key: required("GOOGLE_PRIVATE_KEY")?.replace("\\n", "\n"),
            sheet_id: required("GOOGLE_SHEET_ID")?,
        })
    }
}

/// SMTP collaborator settings.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    /// Implicit TLS when true, STARTTLS otherwise.
    pub secure: bool,
    /// Operator address cc'd on every confirmation.
    pub cc_address: Option<String>,
}

impl SmtpSettings {
    /// Read settings from the environment. Returns `Ok(None)` when SMTP is
    /// not configured at all (confirmation email is optional); errors only
    /// on a partially configured transport.
    pub fn from_env() -> Result<Option<Self>> {
        let host = match std::env::var("SMTP_HOST") {
            Ok(h) if !h.trim().is_empty() => h,
            _ => return Ok(None),
        };

        let port = match std::env::var("SMTP_PORT") {
            Ok(p) => p
                .parse::<u16>()
                .map_err(|_| OrderTuiError::config(format!("SMTP_PORT '{}' is not a port", p)))?,
            Err(_) => 587,
        };

        let secure = std::env::var("SMTP_SECURE")
            .map(|v| v == "true")
            .unwrap_or(false);

        let cc_address = std::env::var("ORDER_CC_EMAIL").ok().filter(|v| !v.is_empty());

        Ok(Some(Self {
            host,
            port,
            user: required("SMTP_USER")?,
            pass: required("SMTP_PASS")?,
            secure,
            cc_address,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; keep them in one test to avoid
    // interleaving with parallel test threads.
    #[test]
    fn test_sheets_settings_from_env() {
        unsafe {
            std::env::remove_var("GOOGLE_SERVICE_ACCOUNT_EMAIL");
            std::env::remove_var("GOOGLE_PRIVATE_KEY");
            std::env::remove_var("GOOGLE_SHEET_ID");
        }
        assert!(SheetsSettings::from_env().is_err());

        unsafe {
            std::env::set_var("GOOGLE_SERVICE_ACCOUNT_EMAIL", "svc@project.iam.example.com");
            std::env::set_var("GOOGLE_PRIVATE_KEY", "-----BEGIN\\nKEY-----");
            std::env::set_var("GOOGLE_SHEET_ID", "sheet-123");
        }
        let settings = SheetsSettings::from_env().expect("all vars set");
        assert_eq!(settings.sheet_id, "sheet-123");
        // Literal \n sequences are unescaped
        assert_eq!(settings.private_key, "-----BEGIN\nKEY-----");

        unsafe {
            std::env::remove_var("GOOGLE_SERVICE_ACCOUNT_EMAIL");
            std::env::remove_var("GOOGLE_PRIVATE_KEY");
            std::env::remove_var("GOOGLE_SHEET_ID");
        }
    }
}

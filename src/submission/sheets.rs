//! Google Sheets order store.
//!
//! Implements [`RowAppender`] against the Sheets v4 REST API with a
//! service-account credential: sign a short-lived RS256 assertion, exchange
//! it for an access token, then append the order row. A header row is
//! written first whenever the target tab is empty, so a fresh spreadsheet
//! becomes usable without manual setup.

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{OrderTuiError, Result};
use crate::settings::SheetsSettings;
use crate::submission::{RowAppender, SubmissionRecord};

const OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const TOKEN_TTL_SECS: i64 = 3600;

/// Column headers for the order tab, in append order.
const HEADER_ROW: [&str; 13] = [
    "Date",
    "Référence",
    "Nom",
    "Téléphone",
    "Email",
    "Devise",
    "Pack Principal",
    "Packs Accompagnement",
    "Fréquence",
    "Paiement",
    "Commentaires",
    "Prix Total",
    "Statut",
];

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

/// Sheets-backed [`RowAppender`].
pub struct SheetsAppender {
    client: reqwest::Client,
    settings: SheetsSettings,
    /// Tab name the rows are appended to.
    sheet_title: String,
}

impl SheetsAppender {
    pub fn new(settings: SheetsSettings, sheet_title: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ordertui/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| OrderTuiError::submission(format!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            client,
            settings,
            sheet_title: sheet_title.into(),
        })
    }

    /// Sign the service-account assertion and exchange it for a bearer token.
    async fn access_token(&self) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            iss: &self.settings.service_account_email,
            scope: SHEETS_SCOPE,
            aud: OAUTH_TOKEN_URL,
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        let key = EncodingKey::from_rsa_pem(self.settings.private_key.as_bytes())
            .map_err(|e| OrderTuiError::config(format!("invalid service-account key: {}", e)))?;

        let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| OrderTuiError::submission(format!("JWT signing failed: {}", e)))?;

        let response = self
            .client
            .post(OAUTH_TOKEN_URL)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| OrderTuiError::submission(format!("token request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(OrderTuiError::submission(format!(
                "token exchange returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| OrderTuiError::submission(format!("bad token response: {}", e)))?;

        debug!("obtained sheets access token");
        Ok(token.access_token)
    }

    /// Whether the order tab currently has any rows at all.
    async fn tab_is_empty(&self, token: &str) -> Result<bool> {
        let url = format!(
            "{}/{}/values/{}!A1:A1",
            API_BASE, self.settings.sheet_id, self.sheet_title
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| OrderTuiError::submission(format!("range probe failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(OrderTuiError::submission(format!(
                "range probe returned {}",
                response.status()
            )));
        }

        let range: ValueRange = response
            .json()
            .await
            .map_err(|e| OrderTuiError::submission(format!("bad range response: {}", e)))?;

        Ok(range.values.is_empty())
    }

    async fn append_values(&self, token: &str, row: Vec<String>) -> Result<()> {
        let url = format!(
            "{}/{}/values/{}!A1:append?valueInputOption=USER_ENTERED",
            API_BASE, self.settings.sheet_id, self.sheet_title
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&json!({ "values": [row] }))
            .send()
            .await
            .map_err(|e| OrderTuiError::submission(format!("append request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(OrderTuiError::submission(format!(
                "append returned {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn data_row(record: &SubmissionRecord) -> Vec<String> {
        vec![
            record.submitted_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            record.submission_id.to_string(),
            record.name.clone(),
            record.phone.clone(),
            record.email.clone(),
            record.currency.code().to_string(),
            record.primary_pack.clone(),
            record.accompaniments_cell(),
            record.frequency.label().to_string(),
            record
                .method
                .map(|m| m.label().to_string())
                .unwrap_or_else(|| "Non précisé".to_string()),
            record.comments.clone(),
            record.total_display(),
            "En attente".to_string(),
        ]
    }
}

#[async_trait]
impl RowAppender for SheetsAppender {
    async fn append(&self, record: &SubmissionRecord) -> Result<()> {
        let token = self.access_token().await?;

        if self.tab_is_empty(&token).await? {
            info!(tab = %self.sheet_title, "order tab is empty, writing header row");
            self.append_values(&token, HEADER_ROW.iter().map(|h| h.to_string()).collect())
                .await?;
        }

        self.append_values(&token, Self::data_row(record)).await?;

        info!(
            submission_id = %record.submission_id,
            tab = %self.sheet_title,
            "order row appended"
        );
        Ok(())
    }
}

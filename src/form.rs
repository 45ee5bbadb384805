//! Order form state.
//!
//! `FormState` is the single mutable container for one ordering session. It
//! is created when the wizard mounts, accumulates user choices step by step,
//! and is discarded after submission. It can also be saved to / loaded from a
//! JSON draft file for headless submission.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::catalog::{Catalog, CatalogEntry};
use crate::types::{Currency, PaymentFrequency, PaymentMethod};

/// Mutable form state for one ordering session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormState {
    /// Full name, or group name for group registrations.
    pub name: String,
    /// Phone number without the country prefix.
    pub phone: String,
    /// Dialing prefix, e.g. "+33".
    pub country_code: String,
    pub email: String,
    pub currency: Currency,
    /// Selected primary pack id. Single-select.
    pub selected_pack: Option<String>,
    /// Accompaniment pack id -> quantity. Entries may hold zero; zero-quantity
    /// entries are treated as unselected everywhere.
    pub quantities: BTreeMap<String, u32>,
    pub comments: String,
    pub frequency: PaymentFrequency,
    pub method: Option<PaymentMethod>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            country_code: "+33".to_string(),
            email: String::new(),
            currency: Currency::default(),
            selected_pack: None,
            quantities: BTreeMap::new(),
            comments: String::new(),
            frequency: PaymentFrequency::default(),
            method: None,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity for an accompaniment pack, zero when absent.
    pub fn quantity(&self, pack_id: &str) -> u32 {
        self.quantities.get(pack_id).copied().unwrap_or(0)
    }

    /// Set an accompaniment quantity. Quantities are unsigned, so the
    /// floor-at-zero invariant holds by construction.
    pub fn set_quantity(&mut self, pack_id: &str, quantity: u32) {
        self.quantities.insert(pack_id.to_string(), quantity);
    }

    /// Increment an accompaniment quantity.
    pub fn increment(&mut self, pack_id: &str) {
        let q = self.quantity(pack_id);
        self.set_quantity(pack_id, q.saturating_add(1));
    }

    /// Decrement an accompaniment quantity. Decrementing zero stays zero.
    pub fn decrement(&mut self, pack_id: &str) {
        let q = self.quantity(pack_id);
        self.set_quantity(pack_id, q.saturating_sub(1));
    }

    /// Accompaniment entries with a nonzero quantity, in catalog order.
    ///
    /// Zero-quantity entries are excluded: they contribute nothing to the
    /// total and never appear in listings or the sheet row.
    pub fn selected_accompaniments<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> Vec<(&'a CatalogEntry, u32)> {
        catalog
            .accompaniment_packs
            .iter()
            .filter_map(|entry| {
                let quantity = self.quantity(&entry.id);
                (quantity > 0).then_some((entry, quantity))
            })
            .collect()
    }

    /// Phone number with the dialing prefix, as written into the sheet.
    pub fn full_phone(&self) -> String {
        format!("{} {}", self.country_code, self.phone)
    }

    /// Save a draft order to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize order draft to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write order draft to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a draft order from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read order draft from {:?}", path.as_ref()))?;

        let form: Self =
            serde_json::from_str(&content).context("Failed to parse order draft JSON")?;

        Ok(form)
    }

    /// Validate a finalized form against the catalog.
    ///
    /// The wizard gates each step, so interactive sessions arrive here
    /// already valid; drafts loaded from disk get the full check.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Name must be specified");
        }
        if self.phone.trim().is_empty() {
            anyhow::bail!("Phone number must be specified");
        }

        let email = self.email.trim();
        if email.is_empty() {
            anyhow::bail!("Email must be specified");
        }
        // Shape check only; deliverability is the mail relay's problem.
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            anyhow::bail!("Email address '{}' is not valid", email);
        }

        match &self.selected_pack {
            None => anyhow::bail!("A primary pack must be selected"),
            Some(id) if catalog.primary(id).is_none() => {
                anyhow::bail!("Unknown primary pack id: {}", id)
            }
            Some(_) => {}
        }

        for id in self.quantities.keys() {
            if catalog.accompaniment(id).is_none() {
                anyhow::bail!("Unknown accompaniment pack id: {}", id);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormState {
        FormState {
            name: "Marie Dupont".to_string(),
            phone: "612345678".to_string(),
            email: "marie@example.com".to_string(),
            selected_pack: Some("david".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_quantity_defaults_to_zero() {
        let form = FormState::new();
        assert_eq!(form.quantity("asaph"), 0);
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut form = FormState::new();
        form.decrement("asaph");
        assert_eq!(form.quantity("asaph"), 0);

        // Idempotent floor
        form.decrement("asaph");
        assert_eq!(form.quantity("asaph"), 0);

        form.increment("asaph");
        assert_eq!(form.quantity("asaph"), 1);
        form.decrement("asaph");
        form.decrement("asaph");
        assert_eq!(form.quantity("asaph"), 0);
    }

    #[test]
    fn test_selected_accompaniments_excludes_zero() {
        let catalog = Catalog::music_packs();
        let mut form = FormState::new();
        form.set_quantity("asaph", 2);
        form.set_quantity("ethan1", 0);

        let selected = form.selected_accompaniments(&catalog);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].0.id, "asaph");
        assert_eq!(selected[0].1, 2);
    }

    #[test]
    fn test_validate_requires_contact_fields() {
        let catalog = Catalog::music_packs();
        let mut form = valid_form();
        assert!(form.validate(&catalog).is_ok());

        form.name.clear();
        assert!(form.validate(&catalog).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let catalog = Catalog::music_packs();
        let mut form = valid_form();

        form.email = "not-an-email".to_string();
        assert!(form.validate(&catalog).is_err());

        form.email = "@example.com".to_string();
        assert!(form.validate(&catalog).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_pack() {
        let catalog = Catalog::music_packs();
        let mut form = valid_form();

        form.selected_pack = Some("bogus".to_string());
        assert!(form.validate(&catalog).is_err());

        form.selected_pack = Some("david".to_string());
        form.set_quantity("bogus-accomp", 1);
        assert!(form.validate(&catalog).is_err());
    }

    #[test]
    fn test_full_phone_format() {
        let form = valid_form();
        assert_eq!(form.full_phone(), "+33 612345678");
    }
}

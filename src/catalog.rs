//! Static pack catalog.
//!
//! The catalog is read-only data: a set of primary packs (single-select,
//! drives the base price) and accompaniment packs (multi-select with a
//! per-song quantity). Earlier form variants each carried their own copy of
//! these tables; they are unified here behind one `Catalog` value so every
//! variant is just different data through the same pipeline.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::types::Currency;

/// One catalog entry. Never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_eur: u64,
    pub price_fcfa: u64,
    /// Recurring price, billed per the selected payment frequency.
    #[serde(default)]
    pub recurring: bool,
}

impl CatalogEntry {
    /// Price in the selected currency column.
    pub fn price_in(&self, currency: Currency) -> u64 {
        match currency {
            Currency::Eur => self.price_eur,
            Currency::Fcfa => self.price_fcfa,
        }
    }

    /// Whether this entry is free in both currencies.
    pub fn is_free(&self) -> bool {
        self.price_eur == 0 && self.price_fcfa == 0
    }

    fn new(
        id: &str,
        name: &str,
        description: &str,
        price_eur: u64,
        price_fcfa: u64,
        recurring: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price_eur,
            price_fcfa,
            recurring,
        }
    }
}

/// Full catalog for one form variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Title of the sheet tab orders are appended to.
    pub sheet_title: String,
    pub primary_packs: Vec<CatalogEntry>,
    pub accompaniment_packs: Vec<CatalogEntry>,
}

impl Catalog {
    /// Built-in music-service pack catalog.
    pub fn music_packs() -> Self {
        Self {
            sheet_title: "Commandes".to_string(),
            primary_packs: vec![
                CatalogEntry::new(
                    "free",
                    "Pack Free",
                    "50 chants harmonisés (Gratuit)",
                    0,
                    0,
                    false,
                ),
                CatalogEntry::new(
                    "david",
                    "Pack David",
                    "100 chants harmonisés/orchestrés, réservé à une seule personne",
                    20,
                    10_000,
                    true,
                ),
                CatalogEntry::new(
                    "ekklesia1",
                    "Pack Ekklesia 1",
                    "Tous les chants harmonisés/orchestrés, groupe 1 à 10 personnes",
                    100,
                    50_000,
                    false,
                ),
                CatalogEntry::new(
                    "ekklesia2",
                    "Pack Ekklesia 2",
                    "Tous les chants harmonisés/orchestrés, groupe 11 à 50 personnes",
                    200,
                    100_000,
                    false,
                ),
                CatalogEntry::new(
                    "ekklesia3",
                    "Pack Ekklesia 3",
                    "Tous les chants harmonisés/orchestrés, groupe 51 à 100 personnes",
                    300,
                    150_000,
                    false,
                ),
                CatalogEntry::new(
                    "ekklesia4",
                    "Pack Ekklesia 4",
                    "Tous les chants harmonisés/orchestrés, groupe >100 personnes",
                    300,
                    200_000,
                    false,
                ),
            ],
            accompaniment_packs: vec![
                CatalogEntry::new(
                    "asaph",
                    "Pack Asaph",
                    "Écriture de chant chrétien",
                    10,
                    5_000,
                    false,
                ),
                CatalogEntry::new(
                    "ethan1",
                    "Pack Ethan 1",
                    "Instrumentation Piano/Guitare",
                    20,
                    10_000,
                    false,
                ),
                CatalogEntry::new(
                    "ethan2",
                    "Pack Ethan 2",
                    "Instrumentation Piano/Bass/Rythmique",
                    100,
                    50_000,
                    false,
                ),
                CatalogEntry::new(
                    "ethan3",
                    "Pack Ethan 3",
                    "Instrumentation enrichie",
                    300,
                    150_000,
                    false,
                ),
                CatalogEntry::new(
                    "heman1",
                    "Pack Heman 1",
                    "Conduite de Louange",
                    20,
                    10_000,
                    false,
                ),
                CatalogEntry::new(
                    "heman2",
                    "Pack Heman 2",
                    "Production SON (studio)",
                    400,
                    200_000,
                    false,
                ),
                CatalogEntry::new(
                    "heman3",
                    "Pack Heman 3",
                    "Production VIDEO (clip)",
                    1_000,
                    500_000,
                    false,
                ),
                CatalogEntry::new(
                    "heman4",
                    "Pack Heman 4",
                    "Déploiement sur les réseaux sociaux",
                    20,
                    50_000,
                    false,
                ),
            ],
        }
    }

    /// Load a catalog variant from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate the catalog data.
    pub fn validate(&self) -> Result<()> {
        if self.primary_packs.is_empty() {
            anyhow::bail!("Catalog must contain at least one primary pack");
        }

        let mut seen = HashSet::new();
        for entry in self.primary_packs.iter().chain(&self.accompaniment_packs) {
            if entry.id.trim().is_empty() {
                anyhow::bail!("Catalog entry '{}' has an empty id", entry.name);
            }
            if entry.name.trim().is_empty() {
                anyhow::bail!("Catalog entry '{}' has an empty name", entry.id);
            }
            if !seen.insert(entry.id.as_str()) {
                anyhow::bail!("Duplicate catalog entry id: {}", entry.id);
            }
        }

        Ok(())
    }

    /// Look up a primary pack by id.
    pub fn primary(&self, id: &str) -> Option<&CatalogEntry> {
        self.primary_packs.iter().find(|p| p.id == id)
    }

    /// Look up an accompaniment pack by id.
    pub fn accompaniment(&self, id: &str) -> Option<&CatalogEntry> {
        self.accompaniment_packs.iter().find(|p| p.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::music_packs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::music_packs();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.primary_packs.len(), 6);
        assert_eq!(catalog.accompaniment_packs.len(), 8);
    }

    #[test]
    fn test_price_column_selection() {
        let catalog = Catalog::music_packs();
        let david = catalog.primary("david").expect("david pack exists");
        assert_eq!(david.price_in(Currency::Eur), 20);
        assert_eq!(david.price_in(Currency::Fcfa), 10_000);
        assert!(david.recurring);
    }

    #[test]
    fn test_free_pack() {
        let catalog = Catalog::music_packs();
        let free = catalog.primary("free").expect("free pack exists");
        assert!(free.is_free());
        assert!(!free.recurring);
    }

    #[test]
    fn test_unknown_id_lookup() {
        let catalog = Catalog::music_packs();
        assert!(catalog.primary("heman1").is_none()); // accompaniment, not primary
        assert!(catalog.accompaniment("heman1").is_some());
        assert!(catalog.primary("nonexistent").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut catalog = Catalog::music_packs();
        catalog
            .accompaniment_packs
            .push(CatalogEntry::new("asaph", "Dup", "Duplicate id", 1, 1, false));
        assert!(catalog.validate().is_err());
    }
}

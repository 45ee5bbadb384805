//! Type-safe domain types for ordertui
//!
//! This module replaces stringly-typed order fields with proper Rust enums
//! that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Billing currency zone.
///
/// EUR and FCFA are independent price columns on every catalog entry.
/// There is no conversion between them anywhere in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    #[strum(serialize = "EUR")]
    Eur,
    #[strum(serialize = "FCFA")]
    Fcfa,
}

impl Currency {
    /// Currency code as written into the sheet and emails.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Fcfa => "FCFA",
        }
    }

    /// Human label shown next to the zone selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Eur => "EUR (Europe)",
            Self::Fcfa => "FCFA (Afrique)",
        }
    }
}

/// Billing cadence for recurring primary packs.
///
/// The multiplier is a fixed table, not a formula: pricing is not
/// proportional across every catalog variant, so each cadence carries
/// its own factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PaymentFrequency {
    #[default]
    #[strum(serialize = "monthly")]
    Monthly,
    #[strum(serialize = "quarterly")]
    Quarterly,
    #[strum(serialize = "biannual")]
    Biannual,
    #[strum(serialize = "annual")]
    Annual,
}

impl PaymentFrequency {
    /// Fixed integer factor applied to a recurring primary-pack price.
    pub fn multiplier(&self) -> u64 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Biannual => 6,
            Self::Annual => 12,
        }
    }

    /// Display label for the review screen and confirmation email.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Mensuelle",
            Self::Quarterly => "Trimestrielle",
            Self::Biannual => "Semestrielle",
            Self::Annual => "Annuelle",
        }
    }
}

/// Payment method selected on the payment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PaymentMethod {
    #[strum(serialize = "bank")]
    BankTransfer,
    #[strum(serialize = "mobile")]
    MobileMoney,
    #[strum(serialize = "paypal")]
    Paypal,
}

impl PaymentMethod {
    /// Display label for the review screen and sheet row.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BankTransfer => "Virement / Transfert",
            Self::MobileMoney => "Mobile Money",
            Self::Paypal => "PayPal",
        }
    }
}

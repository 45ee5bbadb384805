//! Price calculation.
//!
//! Pure functions over the form state and the static catalog. Prices are
//! whole currency units (EUR or FCFA) held as `u64`; totals can never go
//! negative by construction and there is no rounding or conversion.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::form::FormState;

/// Structured totals for one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PriceTotals {
    /// Primary pack price, with the frequency multiplier applied when the
    /// pack is recurring.
    pub primary_total: u64,
    /// Sum of accompaniment price x quantity over nonzero entries.
    pub accompaniment_total: u64,
    pub grand_total: u64,
}

/// Compute the structured totals for the current form state.
///
/// - The primary contribution is the selected pack's price in the chosen
///   currency, multiplied by the payment-frequency factor when the pack is
///   recurring. No selection (or an unknown id) contributes zero.
/// - The accompaniment contribution sums price x quantity across all
///   entries with quantity > 0. Unknown ids contribute nothing.
/// - The frequency multiplier never applies to accompaniments.
pub fn calculate(form: &FormState, catalog: &Catalog) -> PriceTotals {
    let primary_total = form
        .selected_pack
        .as_deref()
        .and_then(|id| catalog.primary(id))
        .map(|pack| {
            let base = pack.price_in(form.currency);
            if pack.recurring {
                base * form.frequency.multiplier()
            } else {
                base
            }
        })
        .unwrap_or(0);

    let accompaniment_total = form
        .selected_accompaniments(catalog)
        .iter()
        .map(|(entry, quantity)| entry.price_in(form.currency) * u64::from(*quantity))
        .sum();

    PriceTotals {
        primary_total,
        accompaniment_total,
        grand_total: primary_total + accompaniment_total,
    }
}

//! Property-based tests for form and pricing invariants

use proptest::prelude::*;

use ordertui::catalog::Catalog;
use ordertui::form::FormState;
use ordertui::pricing;
use ordertui::types::{Currency, PaymentFrequency};

fn any_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Eur), Just(Currency::Fcfa)]
}

fn any_frequency() -> impl Strategy<Value = PaymentFrequency> {
    prop_oneof![
        Just(PaymentFrequency::Monthly),
        Just(PaymentFrequency::Quarterly),
        Just(PaymentFrequency::Biannual),
        Just(PaymentFrequency::Annual),
    ]
}

proptest! {
    /// Quantities never go below zero no matter the edit sequence.
    #[test]
    fn quantity_never_negative(ops in prop::collection::vec(any::<bool>(), 0..100)) {
        let mut form = FormState::new();
        for increment in ops {
            if increment {
                form.increment("asaph");
            } else {
                form.decrement("asaph");
            }
        }
        // u32 makes underflow impossible, but decrement must also clamp
        // rather than wrap
        prop_assert!(form.quantity("asaph") < u32::MAX);
    }

    /// Grand total always equals the sum of its parts.
    #[test]
    fn grand_total_is_sum(
        pack_index in 0usize..6,
        quantities in prop::collection::vec(0u32..50, 8),
        currency in any_currency(),
        frequency in any_frequency(),
    ) {
        let catalog = Catalog::music_packs();
        let mut form = FormState::new();
        form.currency = currency;
        form.frequency = frequency;
        form.selected_pack = Some(catalog.primary_packs[pack_index].id.clone());
        for (entry, quantity) in catalog.accompaniment_packs.iter().zip(&quantities) {
            form.set_quantity(&entry.id, *quantity);
        }

        let totals = pricing::calculate(&form, &catalog);
        prop_assert_eq!(
            totals.grand_total,
            totals.primary_total + totals.accompaniment_total
        );
    }

    /// The frequency selection only ever changes the primary total, and
    /// only for recurring packs.
    #[test]
    fn frequency_affects_only_recurring_primary(
        pack_index in 0usize..6,
        quantities in prop::collection::vec(0u32..10, 8),
        currency in any_currency(),
        frequency in any_frequency(),
    ) {
        let catalog = Catalog::music_packs();
        let mut form = FormState::new();
        form.currency = currency;
        form.selected_pack = Some(catalog.primary_packs[pack_index].id.clone());
        for (entry, quantity) in catalog.accompaniment_packs.iter().zip(&quantities) {
            form.set_quantity(&entry.id, *quantity);
        }

        form.frequency = PaymentFrequency::Monthly;
        let monthly = pricing::calculate(&form, &catalog);
        form.frequency = frequency;
        let varied = pricing::calculate(&form, &catalog);

        prop_assert_eq!(monthly.accompaniment_total, varied.accompaniment_total);

        let pack = &catalog.primary_packs[pack_index];
        if pack.recurring {
            prop_assert_eq!(
                varied.primary_total,
                pack.price_in(currency) * frequency.multiplier()
            );
        } else {
            prop_assert_eq!(varied.primary_total, monthly.primary_total);
        }
    }

    /// Draft files round-trip through JSON without losing anything.
    #[test]
    fn draft_roundtrip(
        name in "[a-zA-Z ]{1,30}",
        phone in "[0-9]{6,12}",
        quantity in 0u32..100,
    ) {
        let mut form = FormState::new();
        form.name = name;
        form.phone = phone;
        form.email = "someone@example.com".to_string();
        form.selected_pack = Some("david".to_string());
        form.set_quantity("heman1", quantity);

        let json = serde_json::to_string(&form).unwrap();
        let loaded: FormState = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(&loaded.name, &form.name);
        prop_assert_eq!(&loaded.phone, &form.phone);
        prop_assert_eq!(&loaded.selected_pack, &form.selected_pack);
        prop_assert_eq!(loaded.quantity("heman1"), quantity);
    }
}

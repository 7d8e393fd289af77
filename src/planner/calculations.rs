use std::collections::BTreeMap;

use tracing::warn;

use crate::catalog::Catalog;
use crate::models::{DayPlan, NutritionTotals};

/// Sum macros for one day's selections.
///
/// Each product's per-pouch macros are multiplied by its quantity. Ids missing
/// from the catalog are skipped.
pub fn day_totals(catalog: &Catalog, plan: &DayPlan) -> NutritionTotals {
    let mut totals = NutritionTotals::default();
    for (id, &qty) in plan {
        match catalog.get(id) {
            Some(product) => totals.add_product(product, qty),
            None => warn!(product_id = %id, "skipping unknown product in day plan"),
        }
    }
    totals
}

/// Sum macros across days `1..=trip_length`.
///
/// Entries for days past `trip_length` are ignored even when present.
pub fn trip_totals(
    catalog: &Catalog,
    days: &BTreeMap<u8, DayPlan>,
    trip_length: u8,
) -> NutritionTotals {
    let mut totals = NutritionTotals::default();
    if trip_length == 0 {
        return totals;
    }
    for (_, plan) in days.range(1..=trip_length) {
        totals += day_totals(catalog, plan);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(entries: &[(&str, u32)]) -> DayPlan {
        entries
            .iter()
            .map(|(id, qty)| (id.to_string(), *qty))
            .collect()
    }

    #[test]
    fn test_day_totals_empty() {
        let catalog = Catalog::builtin().unwrap();
        let totals = day_totals(&catalog, &DayPlan::new());
        assert_eq!(totals, NutritionTotals::default());
    }

    #[test]
    fn test_day_totals_mixed() {
        let catalog = Catalog::builtin().unwrap();
        // 2 x Lomo Saltado (520 cal, 32 P, 45 C, 18 F) + 1 x Causa (380, 12, 58, 14)
        let totals = day_totals(&catalog, &plan(&[("2", 2), ("5", 1)]));

        assert_eq!(totals.items, 3);
        assert!((totals.calories - 1420.0).abs() < 1e-9);
        assert!((totals.protein - 76.0).abs() < 1e-9);
        assert!((totals.carbs - 148.0).abs() < 1e-9);
        assert!((totals.fat - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_day_totals_skips_unknown_ids() {
        let catalog = Catalog::builtin().unwrap();
        let totals = day_totals(&catalog, &plan(&[("1", 1), ("missing", 4)]));

        assert_eq!(totals.items, 1);
        assert!((totals.calories - 420.0).abs() < 1e-9);
    }

    #[test]
    fn test_trip_totals_respects_trip_length() {
        let catalog = Catalog::builtin().unwrap();
        let mut days = BTreeMap::new();
        days.insert(1, plan(&[("1", 1)]));
        days.insert(2, plan(&[("2", 1)]));
        days.insert(5, plan(&[("4", 3)]));

        let short = trip_totals(&catalog, &days, 2);
        assert_eq!(short.items, 2);
        assert!((short.calories - 940.0).abs() < 1e-9);

        let long = trip_totals(&catalog, &days, 5);
        assert_eq!(long.items, 5);
        assert!((long.calories - 2620.0).abs() < 1e-9);
    }
}

use std::collections::BTreeMap;
use std::fmt;
use std::ops::AddAssign;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Product id to quantity for a single trip day. Quantities are always positive;
/// an empty plan is equivalent to no plan for that day.
pub type DayPlan = BTreeMap<String, u32>;

/// Recommendation strategy narrowing which products are offered for a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    HighProtein,
    #[default]
    Balanced,
    Lightweight,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::HighProtein, Goal::Balanced, Goal::Lightweight];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::HighProtein => "High Protein",
            Goal::Balanced => "Balanced",
            Goal::Lightweight => "Lightweight",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::HighProtein => "Maximize protein for muscle recovery",
            Goal::Balanced => "Well-rounded nutrition for all-day energy",
            Goal::Lightweight => "Lower calories, lighter pack weight",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregated macros for a day or a whole trip.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub items: u32,
}

impl NutritionTotals {
    /// Accumulate `quantity` pouches of `product`.
    pub fn add_product(&mut self, product: &Product, quantity: u32) {
        let qty = quantity as f64;
        self.calories += product.calories * qty;
        self.protein += product.protein * qty;
        self.carbs += product.carbs * qty;
        self.fat += product.fat * qty;
        self.items += quantity;
    }

    pub fn is_empty(&self) -> bool {
        self.items == 0
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
        self.items += rhs.items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn pouch(calories: f64, protein: f64) -> Product {
        Product {
            id: "x".to_string(),
            name: "Pouch".to_string(),
            description: String::new(),
            price: 10.0,
            image: String::new(),
            category: Category::Vegan,
            calories,
            protein,
            carbs: 30.0,
            fat: 5.0,
            allergens: vec![],
            ingredients: vec![],
        }
    }

    #[test]
    fn test_add_product_scales_by_quantity() {
        let mut totals = NutritionTotals::default();
        totals.add_product(&pouch(400.0, 20.0), 3);

        assert_eq!(totals.items, 3);
        assert!((totals.calories - 1200.0).abs() < 1e-9);
        assert!((totals.protein - 60.0).abs() < 1e-9);
        assert!((totals.carbs - 90.0).abs() < 1e-9);
        assert!((totals.fat - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_assign() {
        let mut a = NutritionTotals::default();
        a.add_product(&pouch(400.0, 20.0), 1);
        let mut b = NutritionTotals::default();
        b.add_product(&pouch(300.0, 10.0), 2);

        a += b;
        assert_eq!(a.items, 3);
        assert!((a.calories - 1000.0).abs() < 1e-9);
        assert!((a.protein - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_goal_is_balanced() {
        assert_eq!(Goal::default(), Goal::Balanced);
    }
}

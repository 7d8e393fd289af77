use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::LineItem;

/// Diet category. Every product belongs to exactly one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Vegan,
    Vegetarian,
    HighProtein,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Vegan => "Vegan",
            Category::Vegetarian => "Vegetarian",
            Category::HighProtein => "High Protein",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where an ingredient is sourced. `x`/`y` are percentages across the region map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientOrigin {
    pub name: String,
    pub region: String,
    pub x: f64,
    pub y: f64,
}

/// A purchasable meal pouch. Macros are per single pouch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub category: Category,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientOrigin>,
}

impl Product {
    /// Case-insensitive allergen membership, using the same Unicode
    /// lowercasing as the filter's exclusion set and `Catalog::allergens`.
    pub fn has_allergen(&self, allergen: &str) -> bool {
        let needle = allergen.to_lowercase();
        self.allergens.iter().any(|a| a.to_lowercase() == needle)
    }

    /// Snapshot of the fields the cart keeps for a line.
    pub fn line_item(&self) -> LineItem {
        LineItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }

    /// Basic validation: non-empty id, non-negative price and macros.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
            && self.price >= 0.0
            && self.calories >= 0.0
            && self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fat >= 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {} cal, P:{} C:{} F:{}, ${:.2}",
            self.name, self.id, self.calories, self.protein, self.carbs, self.fat, self.price
        )
    }
}

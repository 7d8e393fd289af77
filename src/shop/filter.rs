use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Result, StoreError};
use crate::models::{Category, Product};
use crate::planner::{DEFAULT_MAX_CALORIES, DEFAULT_MIN_CALORIES};

/// Inclusive calorie window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieRange {
    min: f64,
    max: f64,
}

impl CalorieRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min < 0.0 || max < 0.0 || min > max || min.is_nan() || max.is_nan() {
            return Err(StoreError::InvalidCalorieRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn contains(&self, calories: f64) -> bool {
        self.min <= calories && calories <= self.max
    }

    /// True when either bound is tighter than the default window.
    pub fn is_narrower_than_default(&self) -> bool {
        self.min > DEFAULT_MIN_CALORIES || self.max < DEFAULT_MAX_CALORIES
    }
}

impl Default for CalorieRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_CALORIES,
            max: DEFAULT_MAX_CALORIES,
        }
    }
}

/// Multi-criteria catalog filter. A product is shown when all of:
/// - no diet is selected, or its category is one of the selected diets
/// - its calories fall inside the calorie range
/// - none of its allergens is excluded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopFilter {
    diets: BTreeSet<Category>,
    exclude_allergens: BTreeSet<String>,
    calorie_range: CalorieRange,
}

impl ShopFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diet(mut self, diet: Category) -> Self {
        self.diets.insert(diet);
        self
    }

    pub fn excluding(mut self, allergen: &str) -> Self {
        self.exclude_allergens.insert(allergen.to_lowercase());
        self
    }

    pub fn with_calorie_range(mut self, range: CalorieRange) -> Self {
        self.calorie_range = range;
        self
    }

    /// Flip a diet checkbox. Returns whether the diet is now selected.
    pub fn toggle_diet(&mut self, diet: Category) -> bool {
        if self.diets.remove(&diet) {
            false
        } else {
            self.diets.insert(diet);
            true
        }
    }

    /// Flip an allergen exclusion. Returns whether it is now excluded.
    pub fn toggle_allergen(&mut self, allergen: &str) -> bool {
        let key = allergen.to_lowercase();
        if self.exclude_allergens.remove(&key) {
            false
        } else {
            self.exclude_allergens.insert(key);
            true
        }
    }

    /// Reset to no diets, no exclusions and the default calorie window.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn diets(&self) -> &BTreeSet<Category> {
        &self.diets
    }

    pub fn excluded_allergens(&self) -> &BTreeSet<String> {
        &self.exclude_allergens
    }

    pub fn calorie_range(&self) -> CalorieRange {
        self.calorie_range
    }

    pub fn has_active_filters(&self) -> bool {
        !self.diets.is_empty()
            || !self.exclude_allergens.is_empty()
            || self.calorie_range.is_narrower_than_default()
    }

    pub fn matches(&self, product: &Product) -> bool {
        let diet_ok = self.diets.is_empty() || self.diets.contains(&product.category);
        let calories_ok = self.calorie_range.contains(product.calories);
        let allergens_ok = !self
            .exclude_allergens
            .iter()
            .any(|a| product.has_allergen(a));

        diet_ok && calories_ok && allergens_ok
    }

    /// Matching products in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let shown: Vec<&Product> = catalog.iter().filter(|p| self.matches(p)).collect();
        debug!(
            shown = shown.len(),
            total = catalog.len(),
            diets = self.diets.len(),
            excluded = self.exclude_allergens.len(),
            "shop filter applied"
        );
        shown
    }
}

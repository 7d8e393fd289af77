use crate::catalog::Catalog;
use crate::models::{Category, Goal, Product};
use crate::planner::constants::{HIGH_PROTEIN_MIN_PROTEIN, LIGHTWEIGHT_MAX_CALORIES};

/// Whether a product is offered under a goal.
pub fn suits_goal(product: &Product, goal: Goal) -> bool {
    match goal {
        Goal::HighProtein => {
            product.protein >= HIGH_PROTEIN_MIN_PROTEIN
                || product.category == Category::HighProtein
        }
        Goal::Lightweight => product.calories <= LIGHTWEIGHT_MAX_CALORIES,
        Goal::Balanced => true,
    }
}

/// Products offered for the current day under `goal`, in catalog order.
///
/// This only narrows what is offered; it never hides items already planned.
pub fn recommended_products(catalog: &Catalog, goal: Goal) -> Vec<&Product> {
    catalog.iter().filter(|p| suits_goal(p, goal)).collect()
}

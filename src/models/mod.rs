mod cart;
mod plan;
mod product;

pub use cart::{CartLine, LineItem};
pub use plan::{DayPlan, Goal, NutritionTotals};
pub use product::{Category, IngredientOrigin, Product};

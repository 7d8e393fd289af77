mod cart;
mod meal_plan;

pub use cart::CartStore;
pub use meal_plan::MealPlanner;

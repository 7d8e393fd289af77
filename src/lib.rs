pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod shop;
pub mod state;

pub use catalog::Catalog;
pub use error::{Result, StoreError};
pub use models::{CartLine, Category, DayPlan, Goal, LineItem, NutritionTotals, Product};
pub use shop::{CalorieRange, ShopFilter};
pub use state::{CartStore, MealPlanner};

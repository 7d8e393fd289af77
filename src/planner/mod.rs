pub mod calculations;
pub mod constants;
pub mod recommend;

pub use calculations::{day_totals, trip_totals};
pub use constants::*;
pub use recommend::{recommended_products, suits_goal};

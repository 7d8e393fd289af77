mod export;
mod filter;

pub use export::write_products_csv;
pub use filter::{CalorieRange, ShopFilter};

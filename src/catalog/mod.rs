mod lookup;
mod persistence;
mod products;

pub use lookup::{find_product, ProductMatch, FUZZY_MATCH_THRESHOLD};
pub use persistence::load_catalog;
pub use products::Catalog;

use serde::{Deserialize, Serialize};

/// Denormalized product snapshot carried by a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
}

/// One product's accumulated quantity within the cart. Quantity is always >= 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: LineItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: LineItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Price times quantity.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.item.price * self.quantity as f64
    }
}

use tracing::debug;

use crate::models::{CartLine, LineItem};

/// Session-scoped shopping cart.
///
/// Lines keep insertion order and a line never rests at quantity 0.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.id() == id)
    }

    /// Add one unit: bump an existing line or append a new one.
    pub fn add_item(&mut self, item: LineItem) {
        match self.position(&item.id) {
            Some(pos) => {
                let line = &mut self.lines[pos];
                line.quantity += 1;
                debug!(product_id = %line.item.id, quantity = line.quantity, "cart line incremented");
            }
            None => {
                debug!(product_id = %item.id, "cart line added");
                self.lines.push(CartLine::new(item));
            }
        }
    }

    /// Remove one unit, deleting the line when it reaches zero.
    ///
    /// Returns false if no line exists for `id`.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };

        if self.lines[pos].quantity > 1 {
            self.lines[pos].quantity -= 1;
            debug!(product_id = %id, quantity = self.lines[pos].quantity, "cart line decremented");
        } else {
            self.lines.remove(pos);
            debug!(product_id = %id, "cart line removed");
        }
        true
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        debug!(lines = self.lines.len(), "cart cleared");
        self.lines.clear();
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of price times quantity across all lines.
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Quantity for a product id, 0 when absent.
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.position(id)
            .map(|pos| self.lines[pos].quantity)
            .unwrap_or(0)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

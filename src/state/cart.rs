#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::net::types::{OrderItemCreate, Product};

/// One cart line: a single unit of a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: Uuid,
    pub name: String,
    pub price: f64,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// Ordered cart contents, persisted to localStorage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Sum of line prices.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.price).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Remove the line at `index`; out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Order lines for checkout, one unit per cart line.
    #[must_use]
    pub fn to_order_items(&self) -> Vec<OrderItemCreate> {
        self.items
            .iter()
            .map(|item| OrderItemCreate {
                product_id: item.product_id,
                quantity: 1,
                price: item.price,
            })
            .collect()
    }
}

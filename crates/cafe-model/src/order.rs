//! Cart, customer and order submission payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::selection::SelectionState;

/// Identifier displayed when the backend response carries no order id.
pub const UNKNOWN_ORDER_ID: &str = "unknown";

/// One finalized builder selection. Never mutated after it enters a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub category: String,
    pub base_price: f64,
    pub selections: SelectionState,
}

/// Ordered line items of the order in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: CartLineItem) -> &CartLineItem {
        self.items.push(item);
        let last = self.items.len() - 1;
        &self.items[last]
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Contact details attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
}

impl CustomerInfo {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
    }
}

/// Body of `POST /orders`.
///
/// Pricing fields are always zero; totals are computed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: CustomerInfo,
    pub items: Vec<CartLineItem>,
    pub subtotal: u32,
    pub tax: u32,
    pub total: u32,
}

impl OrderRequest {
    pub fn new(customer: CustomerInfo, items: Vec<CartLineItem>) -> Self {
        Self {
            customer,
            items,
            subtotal: 0,
            tax: 0,
            total: 0,
        }
    }
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: String,
    /// True when the backend sent no identifier and [`UNKNOWN_ORDER_ID`] is shown.
    pub placeholder: bool,
    pub item_count: usize,
    pub received_at: DateTime<Utc>,
}

impl OrderReceipt {
    pub fn new(order_id: Option<String>, item_count: usize) -> Self {
        let placeholder = order_id.is_none();
        Self {
            order_id: order_id.unwrap_or_else(|| UNKNOWN_ORDER_ID.to_string()),
            placeholder,
            item_count,
            received_at: Utc::now(),
        }
    }

    pub fn display_id(&self) -> &str {
        &self.order_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_trimmed() {
        let customer = CustomerInfo::new("  Ada ", "\t555-0100\n");
        assert_eq!(customer.trimmed(), CustomerInfo::new("Ada", "555-0100"));
    }

    #[test]
    fn receipt_falls_back_to_placeholder() {
        let receipt = OrderReceipt::new(None, 2);
        assert_eq!(receipt.display_id(), UNKNOWN_ORDER_ID);
        assert!(receipt.placeholder);

        let receipt = OrderReceipt::new(Some("A1".to_string()), 1);
        assert_eq!(receipt.display_id(), "A1");
        assert!(!receipt.placeholder);
    }

    #[test]
    fn cart_push_returns_appended_item() {
        let mut cart = Cart::new();
        let item = CartLineItem {
            category: "Soup".to_string(),
            base_price: 4.5,
            selections: SelectionState::new(),
        };
        assert_eq!(cart.push(item.clone()), &item);
        assert_eq!(cart.len(), 1);
        cart.clear();
        assert!(cart.is_empty());
    }
}

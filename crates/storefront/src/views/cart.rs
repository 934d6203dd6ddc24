//! Cart display model.
//!
//! The total is recomputed from the fetched snapshot on every render by
//! summing `quantity * price` over the items; it is never persisted or cached
//! independently of the snapshot.

use std::fmt;

use toychest_core::{Price, ProductId, Quantity};

use crate::backend::types::{Cart, CartItem};

const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Cart line display data.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub price: Price,
    pub quantity: Quantity,
    pub line_total: Price,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            image: item.image.clone(),
            price: item.price,
            quantity: item.quantity,
            line_total: item.price.line_total(item.quantity),
        }
    }
}

/// Cart display data: the item list plus the recomputed total.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: Price,
}

impl CartView {
    /// An empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Price::ZERO,
        }
    }

    /// Whether there is anything to check out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let items: Vec<CartItemView> = cart.items.iter().map(CartItemView::from).collect();
        let total = items.iter().map(|item| item.line_total).sum();
        Self { items, total }
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            writeln!(f, "{EMPTY_CART_MESSAGE}")?;
        } else {
            for item in &self.items {
                writeln!(f, "{} ({})", item.name, item.product_id)?;
                writeln!(
                    f,
                    "  Price: {}  Quantity: {}  Line total: {}",
                    item.price, item.quantity, item.line_total
                )?;
                if !item.image.is_empty() {
                    writeln!(f, "  Image: {}", item.image)?;
                }
            }
            writeln!(
                f,
                "Change a line with `toychest cart update <product-id> -q <n>`, \
                 drop one with `toychest cart remove <product-id>`."
            )?;
        }
        write!(f, "Total Price: {}", self.total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(name: &str, cents: i64, quantity: u32) -> CartItem {
        CartItem {
            product_id: ProductId::new(format!("id-{name}")),
            name: name.to_owned(),
            price: Price::new(Decimal::new(cents, 2)),
            image: String::new(),
            quantity: Quantity::new(quantity).unwrap(),
        }
    }

    #[test]
    fn test_total_is_sum_of_line_totals() {
        // 2 x $9.99 + 1 x $15.00 = $34.98
        let cart = Cart {
            items: vec![item("Ball", 999, 2), item("Doll", 1500, 1)],
        };
        let view = CartView::from(&cart);
        assert_eq!(view.total.to_string(), "$34.98");

        let rendered = view.to_string();
        assert!(rendered.contains("Ball"));
        assert!(rendered.contains("Doll"));
        assert!(rendered.ends_with("Total Price: $34.98"));
    }

    #[test]
    fn test_empty_cart_message_and_zero_total() {
        let view = CartView::from(&Cart::default());
        assert!(view.is_empty());

        let rendered = view.to_string();
        assert!(rendered.contains(EMPTY_CART_MESSAGE));
        assert!(rendered.ends_with("Total Price: $0.00"));
    }

    #[test]
    fn test_line_total_per_item() {
        let cart = Cart {
            items: vec![item("Blocks", 250, 4)],
        };
        let view = CartView::from(&cart);
        assert_eq!(view.items.first().unwrap().line_total.to_string(), "$10.00");
        assert_eq!(view.total.to_string(), "$10.00");
    }

    #[test]
    fn test_display_rounds_to_two_decimals() {
        // Three at $0.333 sums to $0.999, displayed as $1.00.
        let cart = Cart {
            items: vec![CartItem {
                product_id: ProductId::new("p"),
                name: "Sticker".to_owned(),
                price: Price::new(Decimal::new(333, 3)),
                image: String::new(),
                quantity: Quantity::new(3).unwrap(),
            }],
        };
        let view = CartView::from(&cart);
        assert_eq!(view.total.to_string(), "$1.00");
    }

    #[test]
    fn test_empty_constructor_matches_empty_snapshot() {
        assert_eq!(CartView::empty().to_string(), CartView::from(&Cart::default()).to_string());
    }
}

//! Product catalog display model.

use std::fmt;

use toychest_core::{Price, ProductId};

use crate::backend::types::Product;

/// Product display data for the catalog listing.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: Option<String>,
    pub in_stock: bool,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            in_stock: product.in_stock,
        }
    }
}

impl fmt::Display for ProductView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)?;
        if let Some(category) = &self.category {
            write!(f, " [{category}]")?;
        }
        if !self.in_stock {
            write!(f, " (out of stock)")?;
        }
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "  {}", self.description)?;
        }
        if !self.image.is_empty() {
            writeln!(f, "  Image: {}", self.image)?;
        }
        write!(
            f,
            "  Price: {}  (`toychest cart add {}`)",
            self.price, self.id
        )
    }
}

/// Render a product list the way the grid page did: every product in turn,
/// or a placeholder line when nothing matched.
#[must_use]
pub fn render_catalog(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.".to_owned();
    }

    products
        .iter()
        .map(|product| ProductView::from(product).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(name: &str, cents: i64, in_stock: bool) -> Product {
        Product {
            id: ProductId::new(format!("id-{name}")),
            name: name.to_owned(),
            description: format!("A {name}"),
            price: Price::new(Decimal::new(cents, 2)),
            image: String::new(),
            category: None,
            in_stock,
        }
    }

    #[test]
    fn test_render_catalog_lists_all_products() {
        let rendered = render_catalog(&[product("Ball", 999, true), product("Doll", 1500, true)]);
        assert!(rendered.contains("Ball"));
        assert!(rendered.contains("Doll"));
        assert!(rendered.contains("$9.99"));
        assert!(rendered.contains("$15.00"));
    }

    #[test]
    fn test_render_catalog_empty() {
        assert_eq!(render_catalog(&[]), "No products found.");
    }

    #[test]
    fn test_out_of_stock_marker() {
        let rendered = render_catalog(&[product("Kite", 499, false)]);
        assert!(rendered.contains("out of stock"));
    }
}

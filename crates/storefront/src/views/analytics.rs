//! Analytics dashboard display models.

use std::fmt;

use toychest_core::Price;

use crate::backend::types::{PopularProduct, SalesSummary};

/// Total revenue line.
#[derive(Debug, Clone)]
pub struct SalesView {
    pub total_revenue: Price,
}

impl From<&SalesSummary> for SalesView {
    fn from(summary: &SalesSummary) -> Self {
        Self {
            total_revenue: summary.total_revenue,
        }
    }
}

impl fmt::Display for SalesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total revenue: {}", self.total_revenue)
    }
}

/// Render the most-ordered products list.
#[must_use]
pub fn render_popular(products: &[PopularProduct]) -> String {
    if products.is_empty() {
        return "No orders yet.".to_owned();
    }

    products
        .iter()
        .map(|product| {
            let mut line = format!("{}: {} orders", product.name, product.count);
            if !product.image.is_empty() {
                line.push_str(&format!("  ({})", product.image));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

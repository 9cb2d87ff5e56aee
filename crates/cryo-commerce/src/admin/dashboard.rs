//! Admin dashboard figures.

use crate::catalog::{Catalog, CategorySummary};
use crate::checkout::OrderStatus;
use crate::error::CommerceError;
use crate::ids::OrderNumber;
use crate::money::{Currency, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary row in the recent-orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub order_number: OrderNumber,
    pub customer: String,
    pub total: Money,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

/// Storefront metrics not backed by real data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoMetrics {
    pub orders_today: u32,
    pub active_customers: u32,
    pub revenue_month_to_date: Money,
}

impl Default for DemoMetrics {
    fn default() -> Self {
        Self {
            orders_today: 12,
            active_customers: 147,
            revenue_month_to_date: Money::from_units(98_420, Currency::USD),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub total_products: usize,
    pub featured_products: usize,
    pub in_stock_products: usize,
    pub total_stock_units: u64,
    /// Sum of price times stock quantity.
    pub inventory_value: Money,
    pub categories: Vec<CategorySummary>,
    pub metrics: DemoMetrics,
    pub recent_orders: Vec<RecentOrder>,
}

impl Dashboard {
    /// Compute catalog figures and attach the demo order history.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self, CommerceError> {
        let products = catalog.products();
        let inventory_value = products
            .iter()
            .try_fold(Money::zero(Currency::USD), |acc, p| {
                p.price
                    .try_multiply(i64::from(p.stock_quantity))
                    .and_then(|value| acc.try_add(&value))
            })
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            total_products: products.len(),
            featured_products: products.iter().filter(|p| p.featured).count(),
            in_stock_products: products.iter().filter(|p| p.in_stock).count(),
            total_stock_units: products.iter().map(|p| u64::from(p.stock_quantity)).sum(),
            inventory_value,
            categories: catalog.categories(),
            metrics: DemoMetrics::default(),
            recent_orders: demo_recent_orders(),
        })
    }
}

/// The fixed order history shown on the dashboard.
pub fn demo_recent_orders() -> Vec<RecentOrder> {
    const ROWS: [(&str, &str, i64, OrderStatus, (i32, u32, u32)); 5] = [
        ("CO-1001", "ACME Corp", 12_500, OrderStatus::Processing, (2024, 1, 20)),
        ("CO-1002", "Tech Industries", 8_750, OrderStatus::Shipped, (2024, 1, 20)),
        ("CO-1003", "Research Lab", 25_300, OrderStatus::Delivered, (2024, 1, 19)),
        ("CO-1004", "MedTech Solutions", 4_200, OrderStatus::Pending, (2024, 1, 19)),
        ("CO-1005", "Aerospace Inc", 45_600, OrderStatus::Processing, (2024, 1, 18)),
    ];

    ROWS.iter()
        .map(|&(number, customer, units, status, (y, m, d))| RecentOrder {
            order_number: OrderNumber::new(number),
            customer: customer.to_string(),
            total: Money::from_units(units, Currency::USD),
            status,
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        })
        .collect()
}

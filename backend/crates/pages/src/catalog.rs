//! Static product catalog shown on the products page

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: u32,
}

impl Product {
    /// Price formatted as dollars, e.g. `$19.99`
    pub fn display_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Mechanical Keyboard",
        description: "Tenkeyless board with hot-swappable switches.",
        price_cents: 8999,
    },
    Product {
        name: "Wireless Mouse",
        description: "Ergonomic mouse with a 70-day battery.",
        price_cents: 3450,
    },
    Product {
        name: "USB-C Hub",
        description: "Seven ports, 100 W pass-through charging.",
        price_cents: 4999,
    },
    Product {
        name: "Laptop Stand",
        description: "Aluminium stand with adjustable height.",
        price_cents: 2905,
    },
];

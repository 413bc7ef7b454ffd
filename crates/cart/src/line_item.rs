use rust_decimal::Decimal;
use serde::Serialize;

use scancart_catalog::Product;
use scancart_core::ProductId;

/// Cart line: a catalog product captured at scan time.
///
/// Line items are immutable once appended; later catalog edits do not change
/// items already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<Product> for LineItem {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
        }
    }
}

impl From<&Product> for LineItem {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn serializes_price_as_json_number() {
        let item = LineItem::from(Product::new("A1", "Pen", dec!(1.50)));
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], "A1");
        assert_eq!(json["name"], "Pen");
        assert_eq!(json["price"].as_f64(), Some(1.5));
    }
}

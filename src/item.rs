use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct LineItem {
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// The order document shape: `{"items": [...]}`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Order {
    #[serde(default)]
    pub items: Vec<LineItem>,
}

fn default_description() -> String {
    "Item".to_string()
}

fn default_quantity() -> i64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_item_deserialization() {
        let json = r#"{"description": "Lovely Loveseat", "price": "254.00", "quantity": 1}"#;
        let result: LineItem = serde_json::from_str(json).expect("Failed to deserialize item");
        assert_eq!(result.description, "Lovely Loveseat");
        assert_eq!(result.price, dec!(254.00));
        assert_eq!(result.quantity, 1);
    }

    #[test]
    fn test_item_numeric_price() {
        // Prices may arrive as JSON numbers as well as strings
        let json = r#"{"description": "Luxurious Lamp", "price": 52.15, "quantity": 2}"#;
        let result: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(result.price, dec!(52.15));
        assert_eq!(result.quantity, 2);
    }

    #[test]
    fn test_item_defaults() {
        let json = r#"{}"#;
        let result: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(result.description, "Item");
        assert_eq!(result.price, Decimal::ZERO);
        assert_eq!(result.quantity, 1);
    }

    #[test]
    fn test_order_missing_items_key() {
        let json = r#"{}"#;
        let result: Order = serde_json::from_str(json).unwrap();
        assert!(result.items.is_empty());
    }
}

use serde::{Deserialize, Serialize};

/// One item of a completed sale: a snapshot of the product at checkout
/// time. Later catalog edits never alter recorded orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// A completed transaction, as persisted in the orders file.
///
/// The ledger is append-only; a record is immutable once written. Decoding
/// is strict: a stored record missing any field fails the load instead of
/// being silently skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub transaction_number: u64,
    pub timestamp: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
}

/// Payload for recording a sale. The ledger stamps the transaction number
/// and timestamp when it accepts the draft.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub items: Vec<OrderItem>,
    pub total: f64,
}

/// Rounds a money amount to two decimal places.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(9.000000000000002), 9.0);
        assert_eq!(round_to_cents(12.754999), 12.75);
        assert_eq!(round_to_cents(0.0), 0.0);
        assert_eq!(round_to_cents(4.5 * 2.0 + 3.75), 12.75);
    }

    #[test]
    fn test_order_record_wire_format() {
        let record = OrderRecord {
            transaction_number: 7,
            timestamp: "2026-08-07 10:30:00".to_string(),
            items: vec![OrderItem {
                id: "p-1".to_string(),
                name: "Latte".to_string(),
                quantity: 2,
                unit_price: 4.5,
            }],
            total: 9.0,
        };

        let encoded = serde_json::to_string(&record).unwrap();
        assert!(encoded.contains("\"transaction_number\":7"));
        assert!(encoded.contains("\"unit_price\":4.5"));

        let decoded: OrderRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_record_without_transaction_number_is_rejected() {
        let result: Result<OrderRecord, _> = serde_json::from_str(
            r#"{"timestamp": "2026-08-07 10:30:00", "items": [], "total": 1.0}"#,
        );
        assert!(result.is_err());
    }
}

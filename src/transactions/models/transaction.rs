use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i32,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::transactions::enums::transaction_type::TransactionType;

    use super::*;

    #[test]
    fn serializes_kind_under_the_type_key() {
        let transaction = Transaction {
            id: 1,
            description: "Rent".to_string(),
            amount: dec!(850.00),
            kind: TransactionType::Expense.value(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(value["type"], "expense");
        assert!(value.get("kind").is_none());
        assert_eq!(value["amount"], 850.0);
    }

    #[test]
    fn deserializes_the_wire_shape() {
        let transaction: Transaction = serde_json::from_str(
            r#"{
                "id": 7,
                "description": "Salary",
                "amount": 2500.0,
                "type": "income",
                "created_at": "2024-05-01T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(transaction.id, 7);
        assert_eq!(transaction.kind, "income");
        assert_eq!(transaction.amount, dec!(2500));
    }
}

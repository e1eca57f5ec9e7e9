use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionDto {
    #[validate(length(min = 1, message = "description must not be empty."))]
    pub description: String,
    #[validate(custom(
        function = "super::validate_amount",
        message = "amount must be greater than zero."
    ))]
    pub amount: Decimal,
    #[validate(custom(
        function = "super::validate_transaction_type",
        message = "type must be either income or expense."
    ))]
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use validator::Validate;

    use super::*;

    fn dto(description: &str, amount: Decimal, kind: &str) -> CreateTransactionDto {
        CreateTransactionDto {
            description: description.to_string(),
            amount,
            kind: kind.to_string(),
        }
    }

    #[test]
    fn accepts_valid_transactions() {
        let cases = vec![
            dto("Salary", dec!(2500), "income"),
            dto("Groceries", dec!(42.90), "expense"),
            dto("x", dec!(0.01), "income"),
        ];

        for case in cases {
            assert!(case.validate().is_ok());
        }
    }

    #[test]
    fn rejects_invalid_transactions() {
        let cases = vec![
            dto("", dec!(10), "income"),
            dto("Salary", dec!(0), "income"),
            dto("Salary", dec!(-3.50), "expense"),
            dto("Salary", dec!(10), "transfer"),
            dto("Salary", dec!(10), "INCOME"),
        ];

        for case in cases {
            assert!(case.validate().is_err());
        }
    }

    #[test]
    fn deserializes_the_type_field() {
        let dto: CreateTransactionDto = serde_json::from_str(
            r#"{ "description": "Rent", "amount": 850.0, "type": "expense" }"#,
        )
        .unwrap();

        assert_eq!(dto.kind, "expense");
        assert_eq!(dto.amount, dec!(850));
    }
}

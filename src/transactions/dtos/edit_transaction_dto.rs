use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct EditTransactionDto {
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

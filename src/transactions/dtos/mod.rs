use rust_decimal::Decimal;
use validator::ValidationError;

use super::enums::transaction_type::TransactionType;

pub mod create_transaction_dto;
pub mod edit_transaction_dto;

pub fn validate_transaction_type(value: &str) -> Result<(), ValidationError> {
    if value != TransactionType::Income.value() && value != TransactionType::Expense.value() {
        return Err(ValidationError::new("transaction_type_validation"));
    }

    return Ok(());
}

pub fn validate_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value <= &Decimal::ZERO {
        return Err(ValidationError::new("amount_validation"));
    }

    return Ok(());
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn only_income_and_expense_are_valid_types() {
        assert!(validate_transaction_type("income").is_ok());
        assert!(validate_transaction_type("expense").is_ok());
        assert!(validate_transaction_type("transfer").is_err());
        assert!(validate_transaction_type("Income").is_err());
        assert!(validate_transaction_type("").is_err());
    }

    #[test]
    fn only_positive_amounts_are_valid() {
        assert!(validate_amount(&dec!(0.01)).is_ok());
        assert!(validate_amount(&dec!(2500)).is_ok());
        assert!(validate_amount(&Decimal::ZERO).is_err());
        assert!(validate_amount(&dec!(-3.50)).is_err());
    }
}

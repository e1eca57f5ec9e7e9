#[derive(Clone)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn value(&self) -> String {
        match *self {
            Self::Income => "income".to_string(),
            Self::Expense => "expense".to_string(),
        }
    }
}

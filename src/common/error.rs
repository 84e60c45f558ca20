use crate::common::money::Money;

#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Money),
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Money, requested: Money },
    #[error("account not found: {0}")]
    AccountNotFound(String),
    #[error("account already exists: {0}")]
    DuplicateAccount(String),
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    #[error("persistence failed: {0}")]
    PersistenceFailed(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::PersistenceFailed(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        LedgerError::PersistenceFailed(err.to_string())
    }
}

use crate::common::{error::LedgerError, money::Money};

/// A customer balance, keyed by account number.
///
/// The balance never goes negative: `withdraw` refuses to overdraw and both
/// mutators refuse non-positive amounts. Persistence is the store's job;
/// nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: String,
    balance: Money,
}

impl Account {
    /// Opens a fresh account at zero balance.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            balance: Money::zero(),
        }
    }

    /// Restores an account from a persisted record. The caller (the codec)
    /// has already checked that `balance` is non-negative.
    pub fn with_balance(number: impl Into<String>, balance: Money) -> Self {
        Self {
            number: number.into(),
            balance,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Credits `amount` to the balance.
    pub fn deposit(&mut self, amount: Money) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.balance += amount;
        Ok(())
    }

    /// Debits `amount` from the balance, refusing to overdraw.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

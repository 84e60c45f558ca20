use tracing::info;

use crate::common::{error::LedgerError, money::Money};
use crate::domain::transaction::Transaction;
use crate::io::store::{LedgerStore, LoadSummary};
use crate::ops::handlers::{deposit, transfer, withdraw};

/// The surface the dashboard layer talks to. Every call takes a validated
/// customer id (account number) and runs synchronously on the calling thread;
/// the store's single-writer precondition applies.
///
/// Errors are plain `LedgerError` values with readable messages; none of the
/// operations panic or abort the process.
#[derive(Debug)]
pub struct LedgerService {
    store: LedgerStore,
}

impl LedgerService {
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Loads persisted state from the two ledger files and reports what was
    /// read, including any files that could not be read.
    pub fn open(
        accounts_path: impl Into<std::path::PathBuf>,
        transactions_path: impl Into<std::path::PathBuf>,
    ) -> (Self, LoadSummary) {
        let mut store = LedgerStore::new(accounts_path, transactions_path);
        let summary = store.load();
        (Self { store }, summary)
    }

    /// Opens a zero-balance account for a newly registered customer.
    pub fn create_account(&mut self, customer_id: &str) -> Result<(), LedgerError> {
        self.store.create_account(customer_id)?;
        info!(account = customer_id, "account opened");
        Ok(())
    }

    /// Credits the customer's account and returns the new balance.
    pub fn deposit(&mut self, customer_id: &str, amount: Money) -> Result<Money, LedgerError> {
        let balance = deposit::handle(&mut self.store, customer_id, amount)?;
        info!(account = customer_id, %amount, %balance, "deposit applied");
        Ok(balance)
    }

    /// Debits the customer's account and returns the new balance.
    pub fn withdraw(&mut self, customer_id: &str, amount: Money) -> Result<Money, LedgerError> {
        let balance = withdraw::handle(&mut self.store, customer_id, amount)?;
        info!(account = customer_id, %amount, %balance, "withdrawal applied");
        Ok(balance)
    }

    /// Moves funds from the customer's account to the target account and
    /// returns the recorded transaction.
    pub fn transfer(
        &mut self,
        customer_id: &str,
        target_account: &str,
        amount: Money,
    ) -> Result<Transaction, LedgerError> {
        let tx = transfer::handle(&mut self.store, customer_id, target_account, amount)?;
        info!(
            id = %tx.id,
            from = customer_id,
            to = target_account,
            %amount,
            "transfer applied"
        );
        Ok(tx)
    }

    pub fn balance_of(&self, customer_id: &str) -> Result<Money, LedgerError> {
        self.store
            .find_account(customer_id)
            .map(|acc| acc.balance())
            .ok_or_else(|| LedgerError::AccountNotFound(customer_id.to_string()))
    }

    /// All recorded transactions, oldest first.
    pub fn history(&self) -> &[Transaction] {
        self.store.ledger().history()
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }
}

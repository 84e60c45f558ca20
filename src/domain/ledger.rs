use std::collections::HashMap;

use chrono::Local;

use crate::common::{error::LedgerError, money::Money};
use crate::domain::{account::Account, transaction::Transaction};

/// In-memory ledger state: every account keyed by number, plus the
/// append-only transaction history in chronological order.
///
/// Transaction ids come from a counter that only moves forward, so ids are
/// unique for the life of the process. Reloading persisted history seeds the
/// counter past every numeric id already on disk.
#[derive(Debug)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
    transactions: Vec<Transaction>,
    next_tx_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            transactions: Vec::new(),
            next_tx_id: 1,
        }
    }

    pub fn accounts(&self) -> &HashMap<String, Account> {
        &self.accounts
    }

    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    pub fn account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.get_mut(number)
    }

    /// Opens a zero-balance account, refusing numbers already in use.
    pub fn insert_account(&mut self, number: &str) -> Result<&Account, LedgerError> {
        if self.accounts.contains_key(number) {
            return Err(LedgerError::DuplicateAccount(number.to_string()));
        }
        self.accounts
            .insert(number.to_string(), Account::new(number));
        Ok(&self.accounts[number])
    }

    /// Puts a loaded account into the map. Last record wins, so files written
    /// one snapshot per save still reload with the latest balance.
    pub fn restore_account(&mut self, account: Account) {
        self.accounts.insert(account.number().to_string(), account);
    }

    /// Moves `amount` from one account to another. The withdrawal runs first
    /// and carries every check, so once it succeeds the deposit cannot fail
    /// and the pair of mutations is all-or-nothing.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Money) -> Result<(), LedgerError> {
        if !self.accounts.contains_key(to) {
            return Err(LedgerError::AccountNotFound(to.to_string()));
        }
        let source = self
            .accounts
            .get_mut(from)
            .ok_or_else(|| LedgerError::AccountNotFound(from.to_string()))?;
        source.withdraw(amount)?;

        // An aliased transfer puts the funds straight back: the withdrawal
        // above already validated the amount and the funds, and the balance
        // nets to zero.
        if from == to {
            return source.deposit(amount);
        }

        let target = self.accounts.get_mut(to).expect("target checked above");
        target.deposit(amount)
    }

    /// Stamps a new transaction with the next id and today's date. The caller
    /// appends it to the store; nothing is inserted here.
    pub fn record(&mut self, from: Option<&str>, to: &str, amount: Money) -> Transaction {
        let id = self.next_tx_id.to_string();
        self.next_tx_id += 1;
        Transaction::new(
            id,
            from.map(str::to_string),
            to,
            amount,
            Local::now().date_naive(),
        )
    }

    /// Appends a transaction to the in-memory history.
    pub fn push_transaction(&mut self, tx: Transaction) {
        self.observe_tx_id(&tx.id);
        self.transactions.push(tx);
    }

    /// Transactions in insertion (chronological) order.
    pub fn history(&self) -> &[Transaction] {
        &self.transactions
    }

    // Numeric ids already in the log push the counter forward; non-numeric
    // ids from older files are left alone.
    fn observe_tx_id(&mut self, id: &str) {
        if let Ok(n) = id.parse::<u64>() {
            self.next_tx_id = self.next_tx_id.max(n + 1);
        }
    }
}

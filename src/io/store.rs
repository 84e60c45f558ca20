use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::common::error::LedgerError;
use crate::domain::{account::Account, ledger::Ledger, transaction::Transaction};
use crate::io::codec::{
    self, AccountRow, TransactionRow, account_from_row, transaction_from_row,
};

/// What `load` managed to read. Skipped records and unreadable files are
/// reported here (and warned about) instead of aborting the load, so one
/// corrupt line never takes the whole ledger down and a fresh install starts
/// empty.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub accounts: usize,
    pub transactions: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

/// The ledger plus its two backing files.
///
/// Account mutations are persisted by rewriting the whole account file from
/// the in-memory snapshot, so the file never holds more than one record per
/// account. Transactions are append-only.
///
/// Precondition: a single writer. The rewrite-on-mutation policy is not safe
/// if another process writes the same files.
#[derive(Debug)]
pub struct LedgerStore {
    accounts_path: PathBuf,
    transactions_path: PathBuf,
    ledger: Ledger,
}

impl LedgerStore {
    pub fn new(accounts_path: impl Into<PathBuf>, transactions_path: impl Into<PathBuf>) -> Self {
        Self {
            accounts_path: accounts_path.into(),
            transactions_path: transactions_path.into(),
            ledger: Ledger::new(),
        }
    }

    /// Reads both files into memory. Malformed lines are skipped with a
    /// warning; a missing or unreadable file leaves that collection empty and
    /// lands in `LoadSummary::errors` for the operator.
    pub fn load(&mut self) -> LoadSummary {
        let mut summary = LoadSummary::default();
        self.load_accounts(&mut summary);
        self.load_transactions(&mut summary);
        summary
    }

    fn load_accounts(&mut self, summary: &mut LoadSummary) {
        let path = self.accounts_path.clone();
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                let msg = format!("cannot read accounts file {}: {e}", path.display());
                warn!("{msg}");
                summary.errors.push(msg);
                return;
            }
        };

        for row in record_reader(file).deserialize::<AccountRow>() {
            match row
                .map_err(|e| LedgerError::MalformedRecord(e.to_string()))
                .and_then(account_from_row)
            {
                Ok(account) => {
                    // Last record for a number wins, so files written as
                    // repeated snapshots still load the latest balance.
                    self.ledger.restore_account(account);
                    summary.accounts += 1;
                }
                Err(e) => {
                    warn!("skipping account record: {e}");
                    summary.skipped += 1;
                }
            }
        }
    }

    fn load_transactions(&mut self, summary: &mut LoadSummary) {
        let path = self.transactions_path.clone();
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                let msg = format!("cannot read transactions file {}: {e}", path.display());
                warn!("{msg}");
                summary.errors.push(msg);
                return;
            }
        };

        for row in record_reader(file).deserialize::<TransactionRow>() {
            match row
                .map_err(|e| LedgerError::MalformedRecord(e.to_string()))
                .and_then(transaction_from_row)
            {
                Ok(tx) => {
                    self.ledger.push_transaction(tx);
                    summary.transactions += 1;
                }
                Err(e) => {
                    warn!("skipping transaction record: {e}");
                    summary.skipped += 1;
                }
            }
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn find_account(&self, number: &str) -> Option<&Account> {
        self.ledger.account(number)
    }

    /// Opens a zero-balance account and appends its record. The append is
    /// safe under the rewrite policy because the number is new to the file.
    pub fn create_account(&mut self, number: &str) -> Result<(), LedgerError> {
        let row = codec::account_row(self.ledger.insert_account(number)?);
        append_record(&self.accounts_path, &row)
    }

    /// Appends to the in-memory history, then to the transaction file. If the
    /// write fails the in-memory entry stays; the operator reconciles from
    /// the reported error.
    pub fn append_transaction(&mut self, tx: Transaction) -> Result<(), LedgerError> {
        let row = codec::transaction_row(&tx);
        self.ledger.push_transaction(tx);
        append_record(&self.transactions_path, &row)
    }

    /// Rewrites the account file from the in-memory snapshot, one record per
    /// account, sorted by number for deterministic output.
    pub fn persist_accounts(&mut self) -> Result<(), LedgerError> {
        let mut numbers: Vec<&String> = self.ledger.accounts().keys().collect();
        numbers.sort_unstable();

        let file = File::create(&self.accounts_path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        for number in numbers {
            let acc = self.ledger.accounts().get(number).expect("key from map");
            wtr.serialize(codec::account_row(acc))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn record_reader(file: File) -> csv::Reader<File> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file)
}

fn append_record<T: serde::Serialize>(path: &Path, row: &T) -> Result<(), LedgerError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    wtr.serialize(row)?;
    wtr.flush()?;
    Ok(())
}

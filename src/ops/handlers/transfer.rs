use crate::common::{error::LedgerError, money::Money};
use crate::domain::transaction::Transaction;
use crate::io::store::LedgerStore;

/// Moves `amount` between two accounts, rewrites the account file, then
/// records and appends the transaction. A failure before persistence aborts
/// with nothing written; a write failure after the mutation surfaces as
/// `PersistenceFailed` with the in-memory state kept.
pub fn handle(
    store: &mut LedgerStore,
    from: &str,
    to: &str,
    amount: Money,
) -> Result<Transaction, LedgerError> {
    store.ledger_mut().transfer(from, to, amount)?;
    store.persist_accounts()?;

    let tx = store.ledger_mut().record(Some(from), to, amount);
    store.append_transaction(tx.clone())?;
    Ok(tx)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::str::FromStr;

    use super::handle;
    use crate::common::{error::LedgerError, money::Money};
    use crate::io::store::LedgerStore;
    use crate::ops::handlers::deposit;
    use tempfile::TempDir;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn store_with_pair(dir: &TempDir) -> LedgerStore {
        let mut store = LedgerStore::new(
            dir.path().join("accounts.txt"),
            dir.path().join("transactions.txt"),
        );
        store.load();
        store.create_account("CUST001").unwrap();
        store.create_account("CUST002").unwrap();
        deposit::handle(&mut store, "CUST001", money("50.00")).unwrap();
        store
    }

    #[test]
    fn transfer_moves_funds_and_records_the_transaction() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_pair(&dir);

        let tx = handle(&mut store, "CUST001", "CUST002", money("20.00")).unwrap();
        assert_eq!(tx.from.as_deref(), Some("CUST001"));
        assert_eq!(tx.to, "CUST002");
        assert_eq!(tx.amount, money("20.00"));

        assert_eq!(store.find_account("CUST001").unwrap().balance(), money("30.00"));
        assert_eq!(store.find_account("CUST002").unwrap().balance(), money("20.00"));

        let accounts = fs::read_to_string(dir.path().join("accounts.txt")).unwrap();
        assert_eq!(accounts, "CUST001,30.00\nCUST002,20.00\n");

        let transactions = fs::read_to_string(dir.path().join("transactions.txt")).unwrap();
        let line = transactions.trim_end();
        assert!(
            line.starts_with(&format!("{},CUST001,CUST002,20.00,", tx.id)),
            "unexpected transaction line: {line}"
        );
        assert_eq!(store.ledger().history().len(), 1);
    }

    #[test]
    fn failed_transfer_records_nothing() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_pair(&dir);

        let err = handle(&mut store, "CUST001", "CUST002", money("200.00")).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));

        assert_eq!(store.find_account("CUST001").unwrap().balance(), money("50.00"));
        assert_eq!(store.find_account("CUST002").unwrap().balance(), Money::zero());
        assert!(store.ledger().history().is_empty());
        assert!(!dir.path().join("transactions.txt").exists());
    }

    #[test]
    fn transfer_to_unknown_target_fails_before_any_mutation() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_pair(&dir);

        let err = handle(&mut store, "CUST001", "NOPE", money("10.00")).unwrap_err();
        assert!(matches!(err, LedgerError::AccountNotFound(_)));
        assert_eq!(store.find_account("CUST001").unwrap().balance(), money("50.00"));
    }
}

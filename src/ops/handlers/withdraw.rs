use crate::common::{error::LedgerError, money::Money};
use crate::io::store::LedgerStore;

/// Debits `amount` from the account and rewrites the account file. Returns
/// the new balance. A failed debit leaves both memory and disk untouched.
pub fn handle(store: &mut LedgerStore, number: &str, amount: Money) -> Result<Money, LedgerError> {
    let acc = store
        .ledger_mut()
        .account_mut(number)
        .ok_or_else(|| LedgerError::AccountNotFound(number.to_string()))?;
    acc.withdraw(amount)?;
    let balance = acc.balance();

    store.persist_accounts()?;
    Ok(balance)
}

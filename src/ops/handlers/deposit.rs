use crate::common::{error::LedgerError, money::Money};
use crate::io::store::LedgerStore;

/// Credits `amount` to the account and rewrites the account file. Returns the
/// new balance. Nothing is persisted if the account is missing or the amount
/// is rejected.
pub fn handle(store: &mut LedgerStore, number: &str, amount: Money) -> Result<Money, LedgerError> {
    let acc = store
        .ledger_mut()
        .account_mut(number)
        .ok_or_else(|| LedgerError::AccountNotFound(number.to_string()))?;
    acc.deposit(amount)?;
    let balance = acc.balance();

    store.persist_accounts()?;
    Ok(balance)
}

use std::str::FromStr;

use chrono::NaiveDate;

use crate::common::{error::LedgerError, money::Money};
use crate::domain::{account::Account, transaction::Transaction};

const DATE_FMT_ENCODE: &str = "%-d-%-m-%Y";
const DATE_FMT_DECODE: &str = "%d-%m-%Y";

/// On-disk account record: `accountNumber,balance`, balance with exactly two
/// decimal places. One record per line, no header row.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct AccountRow {
    pub number: String,
    pub balance: String,
}

/// On-disk transaction record:
/// `transactionId,fromAccount,toAccount,amount,date`. The `from` field is
/// empty for credits without a source; dates read `5-3-2024` (day and month
/// unpadded).
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct TransactionRow {
    pub id: String,
    pub from: String,
    pub to: String,
    pub amount: String,
    pub date: String,
}

pub fn account_row(account: &Account) -> AccountRow {
    AccountRow {
        number: account.number().to_string(),
        balance: account.balance().to_string_2dp(),
    }
}

/// Turns a persisted row back into an account. Only parse-ability is checked
/// here; balance semantics beyond non-negativity belong to `Account`.
pub fn account_from_row(row: AccountRow) -> Result<Account, LedgerError> {
    if row.number.is_empty() {
        return Err(LedgerError::MalformedRecord(
            "account record with empty account number".to_string(),
        ));
    }
    let balance = parse_non_negative(&row.balance)
        .map_err(|e| LedgerError::MalformedRecord(format!("account {}: {e}", row.number)))?;
    Ok(Account::with_balance(row.number, balance))
}

pub fn transaction_row(tx: &Transaction) -> TransactionRow {
    TransactionRow {
        id: tx.id.clone(),
        from: tx.from.clone().unwrap_or_default(),
        to: tx.to.clone(),
        amount: tx.amount.to_string_2dp(),
        date: tx.date.format(DATE_FMT_ENCODE).to_string(),
    }
}

pub fn transaction_from_row(row: TransactionRow) -> Result<Transaction, LedgerError> {
    if row.id.is_empty() {
        return Err(LedgerError::MalformedRecord(
            "transaction record with empty id".to_string(),
        ));
    }
    if row.to.is_empty() {
        return Err(LedgerError::MalformedRecord(format!(
            "transaction {}: empty target account",
            row.id
        )));
    }
    let amount = parse_non_negative(&row.amount)
        .map_err(|e| LedgerError::MalformedRecord(format!("transaction {}: {e}", row.id)))?;
    if !amount.is_positive() {
        return Err(LedgerError::MalformedRecord(format!(
            "transaction {}: amount must be positive, got {:?}",
            row.id, row.amount
        )));
    }
    let date = NaiveDate::parse_from_str(&row.date, DATE_FMT_DECODE).map_err(|_| {
        LedgerError::MalformedRecord(format!("transaction {}: bad date {:?}", row.id, row.date))
    })?;

    let from = if row.from.is_empty() {
        None
    } else {
        Some(row.from)
    };
    Ok(Transaction::new(row.id, from, row.to, amount, date))
}

fn parse_non_negative(s: &str) -> Result<Money, String> {
    let value = Money::from_str(s).map_err(|_| format!("bad amount {s:?}"))?;
    if value < Money::zero() {
        return Err(format!("negative amount {s:?}"));
    }
    Ok(value)
}

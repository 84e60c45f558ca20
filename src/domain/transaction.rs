use chrono::NaiveDate;

use crate::common::money::Money;

/// One recorded money movement, immutable once appended to the log.
///
/// `from` is `None` for credits with no source account; the persisted record
/// leaves the field empty in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub from: Option<String>,
    pub to: String,
    pub amount: Money,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        from: Option<String>,
        to: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            from,
            to: to.into(),
            amount,
            date,
        }
    }
}

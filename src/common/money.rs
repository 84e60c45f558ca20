use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

const SCALE: i64 = 100;

/// A monetary value stored in the smallest currency unit (cents).
///
/// Wrapping an `i64` keeps balance arithmetic exact and keeps amounts from
/// being confused with other numeric values. Parsing and formatting go through
/// `BigDecimal` so that `"150"`, `"150.0"` and `"150.00"` all mean the same
/// number of cents.
///
/// # Examples
/// ```
/// use bank_ledger::common::money::Money;
///
/// let amount: Money = "150.00".parse().unwrap();
/// assert_eq!(amount.as_cents(), 15000);
/// assert_eq!(amount.to_string_2dp(), "150.00");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Money(i64);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_cents(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.2}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to cents, rounding anything below the cent.
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let cents: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(Money::zero(), Money(0));
    }

    #[test]
    fn test_as_cents() {
        assert_eq!(Money(12345).as_cents(), 12345);
        assert_eq!(Money::zero().as_cents(), 0);
        assert_eq!(Money(-999).as_cents(), -999);
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Money::from_str("1").unwrap(), Money(100));
        assert_eq!(Money::from_str("1.5").unwrap(), Money(150));
        assert_eq!(Money::from_str("150.00").unwrap(), Money(15000));
        assert_eq!(Money::from_str("0.01").unwrap(), Money(1));
        assert_eq!(Money::from_str("  2.00 ").unwrap(), Money(200));
        assert_eq!(Money::from_str("-5").unwrap(), Money(-500));
    }

    #[test]
    fn test_from_str_rounding() {
        assert_eq!(Money::from_str("1.999").unwrap(), Money(200));
        assert_eq!(Money::from_str("0.001").unwrap(), Money(0));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("abc").is_err());
    }

    #[test]
    fn test_to_string_2dp() {
        assert_eq!(Money(100).to_string_2dp(), "1.00");
        assert_eq!(Money(12345).to_string_2dp(), "123.45");
        assert_eq!(Money(1).to_string_2dp(), "0.01");
        assert_eq!(Money(0).to_string_2dp(), "0.00");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money(15000).to_string(), "150.00");
        assert_eq!(Money(50).to_string(), "0.50");
    }

    #[test]
    fn test_is_positive() {
        assert!(Money(1).is_positive());
        assert!(!Money(0).is_positive());
        assert!(!Money(-1).is_positive());
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(Money(100) + Money(50), Money(150));
        assert_eq!(Money(150) - Money(50), Money(100));
        assert_eq!(Money(100) - Money(100), Money::zero());
    }

    #[test]
    fn test_assign_ops() {
        let mut m = Money(100);
        m += Money(50);
        assert_eq!(m, Money(150));
        m -= Money(150);
        assert_eq!(m, Money::zero());
    }

    #[test]
    fn test_ordering() {
        assert!(Money(100) < Money(150));
        assert!(Money(150) > Money(100));
        assert!(Money(100) <= Money(100));
        assert!(Money(100) >= Money(100));
    }
}

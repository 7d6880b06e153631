//! Money type for prices and cart totals.
//!
//! Amounts are integers in the currency's minor unit, so price comparisons
//! in the listing sort and cart sums are exact.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    UAH,
}

impl Currency {
    /// ISO code, e.g. `"USD"`.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::UAH => "UAH",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::UAH => "\u{20b4}",
        }
    }

    /// Minor units per major unit.
    fn minor_per_major(&self) -> i64 {
        100
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
///
/// Deserializes from `{"amount_cents": 37500, "currency": "USD"}` or from a
/// plain number of whole units (`375`, `799.5`) in the default currency, the
/// shape product catalogs use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "MoneyRepr")]
pub struct Money {
    /// Amount in the smallest currency unit (e.g. cents).
    pub amount_cents: i64,
    /// The currency.
    #[serde(default)]
    pub currency: Currency,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyRepr {
    Whole(i64),
    Decimal(f64),
    Minor {
        amount_cents: i64,
        #[serde(default)]
        currency: Currency,
    },
}

impl From<MoneyRepr> for Money {
    fn from(repr: MoneyRepr) -> Self {
        let currency = Currency::default();
        match repr {
            MoneyRepr::Whole(amount) => Money::new(
                amount.saturating_mul(currency.minor_per_major()),
                currency,
            ),
            MoneyRepr::Decimal(amount) => {
                let minor = (amount * currency.minor_per_major() as f64).round();
                Money::new(minor as i64, currency)
            }
            MoneyRepr::Minor {
                amount_cents,
                currency,
            } => Money::new(amount_cents, currency),
        }
    }
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a value from whole major units, e.g. `Money::whole(799, USD)` is $799.
    pub fn whole(amount: i64, currency: Currency) -> Self {
        Self::new(amount * currency.minor_per_major(), currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Format for display. Whole amounts drop the fraction (`$799`),
    /// others keep two places (`$799.50`).
    pub fn display(&self) -> String {
        let per_major = self.currency.minor_per_major();
        let major = self.amount_cents / per_major;
        let minor = (self.amount_cents % per_major).abs();
        if minor == 0 {
            format!("{}{}", self.currency.symbol(), major)
        } else {
            format!("{}{}.{:02}", self.currency.symbol(), major, minor)
        }
    }

    /// Add another value; `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity; `None` on overflow.
    pub fn try_multiply(&self, quantity: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(quantity)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum values of one currency.
    pub fn try_sum<'a>(
        values: impl IntoIterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        values
            .into_iter()
            .try_fold(Money::zero(currency), |acc, value| {
                if value.currency != currency {
                    return Err(CommerceError::CurrencyMismatch {
                        expected: currency.code().to_string(),
                        got: value.currency.code().to_string(),
                    });
                }
                acc.try_add(value).ok_or(CommerceError::Overflow)
            })
    }

    /// Compare amounts, ignoring currency. Catalog prices share one currency.
    pub fn cmp_amount(&self, other: &Money) -> Ordering {
        self.amount_cents.cmp(&other.amount_cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_and_fractional() {
        assert_eq!(Money::whole(799, Currency::USD).display(), "$799");
        assert_eq!(Money::new(79950, Currency::USD).display(), "$799.50");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
    }

    #[test]
    fn test_try_sum() {
        let values = [
            Money::whole(10, Currency::USD),
            Money::whole(15, Currency::USD),
        ];
        let total = Money::try_sum(&values, Currency::USD).unwrap();
        assert_eq!(total, Money::whole(25, Currency::USD));
    }

    #[test]
    fn test_try_sum_rejects_mixed_currency() {
        let values = [Money::whole(1, Currency::USD), Money::whole(1, Currency::EUR)];
        let err = Money::try_sum(&values, Currency::USD).unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_overflow_is_detected() {
        let big = Money::new(i64::MAX, Currency::USD);
        assert!(big.try_multiply(2).is_none());
        assert!(big.try_add(&Money::new(1, Currency::USD)).is_none());
    }

    #[test]
    fn test_currency_defaults_when_missing() {
        let money: Money = serde_json::from_str(r#"{"amount_cents": 1200}"#).unwrap();
        assert_eq!(money.currency, Currency::USD);
    }

    #[test]
    fn test_plain_numbers_are_whole_units() {
        let money: Money = serde_json::from_str("375").unwrap();
        assert_eq!(money, Money::whole(375, Currency::USD));

        let money: Money = serde_json::from_str("799.5").unwrap();
        assert_eq!(money, Money::new(79950, Currency::USD));
        assert_eq!(money.display(), "$799.50");
    }
}

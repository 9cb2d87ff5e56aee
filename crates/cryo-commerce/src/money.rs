//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency of every price in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Minor units per major unit.
const CENTS_PER_UNIT: i64 = 100;

/// Basis points in one whole (100%).
const BPS_DENOMINATOR: i128 = 10_000;

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Shorthand for a USD amount in cents.
    pub const fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Create a Money value from whole currency units.
    ///
    /// ```
    /// use cryo_commerce::money::{Money, Currency};
    /// assert_eq!(Money::from_units(5000, Currency::USD).amount_cents, 500_000);
    /// ```
    pub const fn from_units(units: i64, currency: Currency) -> Self {
        Self::new(units * CENTS_PER_UNIT, currency)
    }

    /// Parse a decimal string such as `"2899.99"` or `"250"`.
    ///
    /// At most two fractional digits are accepted.
    pub fn parse_decimal(input: &str, currency: Currency) -> Result<Self, CommerceError> {
        let invalid = || CommerceError::InvalidAmount(input.to_string());
        let trimmed = input.trim().trim_start_matches(currency.symbol());
        let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();

        let (negative, digits) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if frac.len() > 2 || !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let cents = whole
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or(CommerceError::Overflow)?;

        Ok(Self::new(if negative { -cents } else { cents }, currency))
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Whole-unit part, truncated toward zero.
    pub fn units(&self) -> i64 {
        self.amount_cents / CENTS_PER_UNIT
    }

    /// Add another value, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Subtract another value, returning None on overflow.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        self.amount_cents
            .checked_sub(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by an integer factor, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Apply a rate expressed in basis points (800 = 8%), rounding half away
    /// from zero to the nearest cent.
    pub fn apply_basis_points(&self, bps: u32) -> Money {
        let product = i128::from(self.amount_cents) * i128::from(bps);
        let half = BPS_DENOMINATOR / 2;
        let rounded = if product >= 0 {
            (product + half) / BPS_DENOMINATOR
        } else {
            (product - half) / BPS_DENOMINATOR
        };
        // |amount * bps / 10_000| stays within i64 for any bps <= 10_000;
        // larger rates saturate rather than wrap.
        let cents = i64::try_from(rounded).unwrap_or(if rounded > 0 { i64::MAX } else { i64::MIN });
        Money::new(cents, self.currency)
    }

    /// Amount still needed to reach `target`, or zero once reached.
    pub fn shortfall_to(&self, target: &Money) -> Money {
        match target.try_subtract(self) {
            Some(diff) if diff.amount_cents > 0 => diff,
            _ => Money::zero(self.currency),
        }
    }

    /// Format as a display string with thousands separators (e.g., "$2,899.99").
    pub fn display(&self) -> String {
        format!(
            "{}{}{}",
            if self.is_negative() { "-" } else { "" },
            self.currency.symbol(),
            self.display_amount()
        )
    }

    /// Format the unsigned amount without symbol (e.g., "2,899.99").
    pub fn display_amount(&self) -> String {
        let cents = self.amount_cents.unsigned_abs();
        let whole = (cents / CENTS_PER_UNIT as u64).to_string();
        let frac = cents % CENTS_PER_UNIT as u64;

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("{grouped}.{frac:02}")
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
    fn test_money_from_units() {
        let m = Money::from_units(250, Currency::USD);
        assert_eq!(m.amount_cents, 25_000);
        assert_eq!(m.units(), 250);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Money::parse_decimal("2899.99", Currency::USD).unwrap(), Money::usd(289_999));
        assert_eq!(Money::parse_decimal("250", Currency::USD).unwrap(), Money::usd(25_000));
        assert_eq!(Money::parse_decimal("0.5", Currency::USD).unwrap(), Money::usd(50));
        assert_eq!(Money::parse_decimal("$1,000.00", Currency::USD).unwrap(), Money::usd(100_000));
        assert!(Money::parse_decimal("12.345", Currency::USD).is_err());
        assert!(Money::parse_decimal("abc", Currency::USD).is_err());
        assert!(Money::parse_decimal("", Currency::USD).is_err());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(457_000).display(), "$4,570.00");
        assert_eq!(Money::usd(12_599_999).display(), "$125,999.99");
        assert_eq!(Money::usd(5).display(), "$0.05");
        assert_eq!(Money::usd(-25_000).display(), "-$250.00");
    }

    #[test]
    fn test_try_add_overflow() {
        let usd = Money::usd(1000);
        assert_eq!(usd.try_add(&usd).unwrap().amount_cents, 2000);
        assert!(Money::usd(i64::MAX).try_add(&usd).is_none());
    }

    #[test]
    fn test_try_multiply_overflow() {
        assert!(Money::usd(i64::MAX).try_multiply(2).is_none());
        assert_eq!(Money::usd(289_999).try_multiply(3).unwrap().amount_cents, 869_997);
    }

    #[test]
    fn test_basis_points_rounding() {
        // 8% of $4,000.00
        assert_eq!(Money::usd(400_000).apply_basis_points(800).amount_cents, 32_000);
        // 8% of $0.06 = 0.48 cents, rounds to 0
        assert_eq!(Money::usd(6).apply_basis_points(800).amount_cents, 0);
        // 8% of $0.07 = 0.56 cents, rounds to 1
        assert_eq!(Money::usd(7).apply_basis_points(800).amount_cents, 1);
        // 8% of $2,899.99 = 231.9992
        assert_eq!(Money::usd(289_999).apply_basis_points(800).amount_cents, 23_200);
    }

    #[test]
    fn test_shortfall() {
        let threshold = Money::from_units(5000, Currency::USD);
        assert_eq!(Money::usd(400_000).shortfall_to(&threshold), Money::usd(100_000));
        assert!(Money::usd(600_000).shortfall_to(&threshold).is_zero());
    }
}

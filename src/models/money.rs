//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths (i64) to avoid floating-point
//! precision issues. Display text carries a currency prefix and exactly two
//! decimals; it is never the stored representation.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Currency prefix used when no other symbol is configured
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Largest amount `Money::parse` accepts: one trillion units
///
/// Keeps the running total of a session far from `i64` overflow.
pub const MAX_AMOUNT_CENTS: i64 = 1_000_000_000_000 * 100;

/// Prefixes stripped before parsing an amount
const KNOWN_PREFIXES: &[&str] = &["₹", "Rs.", "Rs", "INR", "$"];

/// A monetary amount stored as hundredths of the currency unit
///
/// Serializes as a plain two-decimal string (`"200.00"`) so audit entries
/// and CSV exports stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use fibertrack::models::Money;
    /// let amount = Money::from_cents(1050); // ₹ 10.50
    /// assert_eq!(amount.to_string(), "₹ 10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the hundredths portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "10.5", "10", "-10.50" and any of those behind a
    /// currency prefix such as "₹ 10.50". More than two decimals, or a
    /// magnitude above [`MAX_AMOUNT_CENTS`], is rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());

        let s = s.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, s),
        };

        let s = KNOWN_PREFIXES
            .iter()
            .find_map(|prefix| s.strip_prefix(prefix))
            .unwrap_or(s)
            .trim();

        let (units_str, cents_str) = match s.split_once('.') {
            Some((units, cents)) => (units, cents),
            None => (s, ""),
        };

        if units_str.is_empty() && cents_str.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(units_str) || !all_digits(cents_str) {
            return Err(invalid());
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| invalid())?
        };

        let cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
            2 => cents_str.parse().map_err(|_| invalid())?,
            _ => return Err(MoneyParseError::TooManyDecimals(original.trim().to_string())),
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .filter(|v| *v <= MAX_AMOUNT_CENTS)
            .ok_or_else(|| MoneyParseError::OutOfRange(original.trim().to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Parse text produced by [`Money::format_with_symbol`]
    pub fn parse_with_symbol(s: &str, symbol: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        match rest.strip_prefix(symbol).filter(|_| !symbol.is_empty()) {
            Some(amount) if negative => Self::parse(&format!("-{}", amount.trim())),
            Some(amount) => Self::parse(amount),
            None => Self::parse(s),
        }
    }

    /// Parse displayed text back into an amount, falling back to zero
    ///
    /// Used when a formatted value is read back for editing; a malformed
    /// string never surfaces as an error.
    pub fn parse_or_zero(s: &str, symbol: &str) -> Self {
        match Self::parse_with_symbol(s, symbol) {
            Ok(amount) => amount,
            Err(e) => {
                log::debug!("{}; using 0.00", e);
                Self::zero()
            }
        }
    }

    /// Add two amounts, or `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum amounts, or `None` if the total overflows
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, amount| acc.checked_add(amount))
    }

    /// Format with a currency symbol, e.g. `₹ 10.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let separator = if symbol.is_empty() { "" } else { " " };
        format!(
            "{}{}{}{}.{:02}",
            sign,
            symbol,
            separator,
            self.units().abs(),
            self.cents_part()
        )
    }

    /// Format without any prefix, e.g. `10.50`
    pub fn format_plain(&self) -> String {
        self.format_with_symbol("")
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format_plain())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Money::parse(&s).map_err(de::Error::custom)
    }
}


/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid amount: '{0}'")]
    InvalidFormat(String),

    #[error("Invalid amount: '{0}' has more than two decimals")]
    TooManyDecimals(String),

    #[error("Amount '{0}' exceeds the largest accepted amount of 1000000000000.00")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "₹ 10.50");
        assert_eq!(Money::from_cents(0).to_string(), "₹ 0.00");
        assert_eq!(Money::from_cents(5).to_string(), "₹ 0.05");
        assert_eq!(Money::from_cents(-1050).to_string(), "-₹ 10.50");
    }

    #[test]
    fn test_format_with_symbol() {
        let m = Money::from_cents(20000);
        assert_eq!(m.format_with_symbol("Rs."), "Rs. 200.00");
        assert_eq!(m.format_plain(), "200.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₹ 10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₹10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("Rs. 7").unwrap().cents(), 700);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
    }

    #[test]
    fn test_parse_rejects_third_decimal() {
        assert_eq!(
            Money::parse("12.349"),
            Err(MoneyParseError::TooManyDecimals("12.349".into()))
        );
        assert!(Money::parse("₹ 0.001").is_err());
    }

    #[test]
    fn test_parse_caps_magnitude() {
        assert_eq!(
            Money::parse("1000000000000").unwrap().cents(),
            MAX_AMOUNT_CENTS
        );
        assert_eq!(
            Money::parse("1000000000000.01"),
            Err(MoneyParseError::OutOfRange("1000000000000.01".into()))
        );
        assert!(Money::parse("90000000000000000").is_err());
        assert!(Money::parse("-90000000000000000").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("₹").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("+5").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_with_symbol() {
        let m = Money::from_cents(123456);
        assert_eq!(Money::parse_with_symbol(&m.format_with_symbol("€"), "€").unwrap(), m);
        assert_eq!(Money::parse_with_symbol("-€ 1.00", "€").unwrap().cents(), -100);
        assert_eq!(Money::parse_with_symbol("₹ 2.00", "").unwrap().cents(), 200);
        assert!(Money::parse_with_symbol("€ x", "€").is_err());
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(Money::parse_or_zero("₹ 200.00", "₹"), Money::from_cents(20000));
        assert_eq!(Money::parse_or_zero("N/A", "₹"), Money::zero());
        assert_eq!(Money::parse_or_zero("", "₹"), Money::zero());
    }

    #[test]
    fn test_display_then_parse_returns_same_amount() {
        for cents in [0, 1, 9, 10, 99, 100, 12345, 50_000, 9_999_999_99] {
            let m = Money::from_cents(cents);
            assert_eq!(Money::parse(&m.to_string()).unwrap(), m);
            assert_eq!(Money::parse(&m.format_with_symbol("Rs.")).unwrap(), m);
        }
    }

    #[test]
    fn test_checked_sum() {
        let total = Money::checked_sum([
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ]);
        assert_eq!(total, Some(Money::from_cents(600)));
        assert_eq!(Money::checked_sum(Vec::new()), Some(Money::zero()));
    }

    #[test]
    fn test_checked_sum_overflow() {
        let huge = Money::from_cents(i64::MAX - 1);
        assert_eq!(Money::checked_sum([huge, Money::from_cents(2)]), None);
        assert_eq!(huge.checked_add(Money::from_cents(1)), Some(Money::from_cents(i64::MAX)));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"10.50\"");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);

        assert!(serde_json::from_str::<Money>("\"ten\"").is_err());
    }
}

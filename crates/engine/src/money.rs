use std::{fmt, str::FromStr};

use crate::{EngineError, ResultEngine};

const MINOR_PER_MAJOR: i64 = 100;

/// Money amount represented as **integer minor units** (cents).
///
/// Every amount stored in the ledger and every balance goes through this type,
/// so sums never accumulate floating-point drift. Conversion to and from
/// floating point happens only at the HTTP boundary.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap().minor(), 1000);
/// assert_eq!("10,5".parse::<Money>().unwrap().minor(), 1050);
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Converts a major-unit float (as found in JSON) into minor units.
    ///
    /// Rejects non-finite values and values with more than two decimals.
    pub fn from_major(value: f64) -> ResultEngine<Self> {
        if !value.is_finite() {
            return Err(EngineError::InvalidAmount(
                "amount must be a finite number".to_string(),
            ));
        }
        let scaled = value * MINOR_PER_MAJOR as f64;
        let rounded = scaled.round();
        // Float representation error tolerance, in cents.
        if (scaled - rounded).abs() > 1e-6 {
            return Err(EngineError::InvalidAmount("too many decimals".to_string()));
        }
        if rounded.abs() >= i64::MAX as f64 {
            return Err(EngineError::InvalidAmount("amount too large".to_string()));
        }
        Ok(Self(rounded as i64))
    }

    /// Major-unit representation used on the wire.
    #[must_use]
    pub fn to_major(self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    /// Sums every amount, failing instead of wrapping on overflow.
    pub fn checked_sum<I>(amounts: I) -> ResultEngine<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts.into_iter().try_fold(Money::ZERO, |acc, amount| {
            acc.checked_add(amount)
                .ok_or_else(|| EngineError::Overflow("ledger balance too large".to_string()))
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = abs / MINOR_PER_MAJOR as u64;
        let minor = abs % MINOR_PER_MAJOR as u64;
        write!(f, "{sign}{major}.{minor:02}")
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a decimal string into minor units.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount("amount must be a number".to_string());
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim().replace(',', ".");
        if rest.is_empty() {
            return Err(empty());
        }

        let (major_str, minor_str) = match rest.split_once('.') {
            Some((major, minor)) => (major, Some(minor)),
            None => (rest.as_str(), None),
        };

        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let major: i64 = major_str.parse().map_err(|_| overflow())?;

        let minor: i64 = match minor_str {
            None | Some("") => 0,
            Some(frac) if !frac.chars().all(|c| c.is_ascii_digit()) => return Err(invalid()),
            Some(frac) if frac.len() == 1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            Some(frac) if frac.len() == 2 => frac.parse::<i64>().map_err(|_| invalid())?,
            Some(_) => return Err(EngineError::InvalidAmount("too many decimals".to_string())),
        };

        let total = major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|v| v.checked_add(minor))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -total } else { total }))
    }
}

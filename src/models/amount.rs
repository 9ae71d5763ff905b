//! Amount type for representing expense values
//!
//! Stores an exact decimal as an integer mantissa plus a decimal scale, so
//! text read from the store formats back to the same number and totals never
//! pick up floating-point drift.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg};
use std::str::FromStr;

use crate::error::TrackerError;

/// Maximum number of digits after the decimal point
pub const MAX_SCALE: u32 = 9;

/// Maximum number of digits before the decimal point
///
/// A parsed value rescaled to [`MAX_SCALE`] stays below 10^24, so even
/// `u32::MAX` of them sum well inside i128.
pub const MAX_WHOLE_DIGITS: usize = 15;

/// A signed decimal amount
///
/// Equality and ordering are numeric: `10` equals `10.0`.
#[derive(Debug, Clone, Copy)]
pub struct Amount {
    units: i128,
    scale: u32,
}

impl Amount {
    /// Create an amount of `units * 10^-scale`
    ///
    /// Scales above [`MAX_SCALE`] are clamped to it by dividing the mantissa.
    pub fn new(units: i128, scale: u32) -> Self {
        if scale > MAX_SCALE {
            let excess = scale - MAX_SCALE;
            return Self {
                units: units / pow10(excess),
                scale: MAX_SCALE,
            };
        }
        Self { units, scale }
    }

    /// Create an amount from a whole number
    pub const fn from_whole(value: i64) -> Self {
        Self {
            units: value as i128,
            scale: 0,
        }
    }

    pub const fn zero() -> Self {
        Self { units: 0, scale: 0 }
    }

    pub const fn is_zero(&self) -> bool {
        self.units == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.units > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.units < 0
    }

    pub const fn abs(&self) -> Self {
        Self {
            units: self.units.saturating_abs(),
            scale: self.scale,
        }
    }

    /// Number of digits after the decimal point as written
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Approximate value for chart scaling and percentages
    pub fn to_f64(&self) -> f64 {
        self.units as f64 / 10f64.powi(self.scale as i32)
    }

    /// Parse a plain decimal: optional leading `-`, digits, at most one `.`
    ///
    /// Surrounding whitespace is ignored. Thousands separators, exponents,
    /// a leading `+`, empty input, more than [`MAX_WHOLE_DIGITS`] whole digits
    /// and more than [`MAX_SCALE`] fractional digits are rejected.
    pub fn parse(text: &str) -> Result<Self, TrackerError> {
        let invalid = || TrackerError::InvalidAmount(text.to_string());
        let trimmed = text.trim();

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > MAX_SCALE as usize || whole.len() > MAX_WHOLE_DIGITS {
            return Err(invalid());
        }

        let mut units: i128 = 0;
        for b in whole.bytes().chain(fraction.bytes()) {
            units = units * 10 + i128::from(b - b'0');
        }

        Ok(Self {
            units: if negative { -units } else { units },
            scale: fraction.len() as u32,
        })
    }

    /// Format rounded to two decimals with a currency symbol, e.g. `-₹4.00`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let cents = self.round_to_scale(2);
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.saturating_abs();
        format!("{}{}{}.{:02}", sign, symbol, cents / 100, cents % 100)
    }

    /// Mantissa at `scale` digits, rounding half away from zero when shrinking
    fn round_to_scale(&self, scale: u32) -> i128 {
        if scale >= self.scale {
            return self.rescaled(scale);
        }
        let divisor = pow10(self.scale - scale);
        let quotient = self.units / divisor;
        let remainder = self.units % divisor;
        if remainder.abs() >= divisor - remainder.abs() {
            quotient + self.units.signum()
        } else {
            quotient
        }
    }

    /// Mantissa at a larger scale, saturating at the i128 bounds
    fn rescaled(&self, scale: u32) -> i128 {
        self.units.saturating_mul(pow10(scale - self.scale))
    }
}

fn pow10(exp: u32) -> i128 {
    10i128.pow(exp)
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Amount {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Plain decimal with at least one fractional digit: `10.0`, `-4.25`
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.units < 0 { "-" } else { "" };
        let magnitude = self.units.unsigned_abs();
        if self.scale == 0 {
            return write!(f, "{}{}.0", sign, magnitude);
        }
        let divisor = pow10(self.scale).unsigned_abs();
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            magnitude / divisor,
            magnitude % divisor,
            width = self.scale as usize
        )
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Amount {}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.rescaled(scale).cmp(&other.rescaled(scale))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let scale = self.scale.max(other.scale);
        Self {
            units: self.rescaled(scale).saturating_add(other.rescaled(scale)),
            scale,
        }
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            units: self.units.saturating_neg(),
            scale: self.scale,
        }
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

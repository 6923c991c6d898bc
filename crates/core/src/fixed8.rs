//! Fixed-point decimal with 8 fractional digits, backed by an `i64`.
//!
//! All on-chain amounts (output values, fees) are carried as raw `i64`
//! multiples of 10^-8 and serialized as little-endian signed 64-bit values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Raw units per whole amount: 10^8.
pub const UNIT: i64 = 100_000_000;

/// A signed fixed-point amount with 8 decimal places.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fixed8(i64);

impl Fixed8 {
    pub const ZERO: Fixed8 = Fixed8(0);

    /// Wraps a raw value already scaled by 10^8.
    pub const fn from_raw(raw: i64) -> Self {
        Fixed8(raw)
    }

    /// Converts a whole-unit amount, failing on overflow.
    pub fn from_units(units: i64) -> CoreResult<Self> {
        units
            .checked_mul(UNIT)
            .map(Fixed8)
            .ok_or(CoreError::Overflow("Fixed8::from_units"))
    }

    pub const fn raw(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Rounds up to the next whole unit. `1.00000001` ceils to `2`,
    /// `-1.5` ceils to `-1`. Fails when the result exceeds the raw range.
    pub fn ceil(self) -> CoreResult<Fixed8> {
        let quotient = self.0.div_euclid(UNIT);
        let remainder = self.0.rem_euclid(UNIT);
        if remainder == 0 {
            return Ok(self);
        }
        quotient
            .checked_add(1)
            .and_then(|q| q.checked_mul(UNIT))
            .map(Fixed8)
            .ok_or(CoreError::Overflow("Fixed8::ceil"))
    }

    pub fn checked_add(self, other: Fixed8) -> CoreResult<Fixed8> {
        self.0
            .checked_add(other.0)
            .map(Fixed8)
            .ok_or(CoreError::Overflow("Fixed8::checked_add"))
    }

    pub fn checked_sub(self, other: Fixed8) -> CoreResult<Fixed8> {
        self.0
            .checked_sub(other.0)
            .map(Fixed8)
            .ok_or(CoreError::Overflow("Fixed8::checked_sub"))
    }

    pub fn checked_mul_raw(self, factor: i64) -> CoreResult<Fixed8> {
        self.0
            .checked_mul(factor)
            .map(Fixed8)
            .ok_or(CoreError::Overflow("Fixed8::checked_mul_raw"))
    }
}

impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let whole = magnitude / UNIT as u64;
        let frac = magnitude % UNIT as u64;
        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else {
            let digits = format!("{frac:08}");
            write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}

impl FromStr for Fixed8 {
    type Err = CoreError;

    /// Parses a decimal string with at most 8 fractional digits.
    fn from_str(s: &str) -> CoreResult<Self> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole_str, frac_str) = match rest.split_once('.') {
            Some((w, f)) => (w, f),
            None => (rest, ""),
        };
        if whole_str.is_empty() && frac_str.is_empty() {
            return Err(CoreError::Format(format!("invalid decimal: {s:?}")));
        }
        if frac_str.len() > 8 {
            return Err(CoreError::Format(format!(
                "too many decimal places in {s:?}: max 8"
            )));
        }
        let parse_digits = |digits: &str| -> CoreResult<i64> {
            if digits.is_empty() {
                return Ok(0);
            }
            digits
                .parse::<i64>()
                .map_err(|_| CoreError::Format(format!("invalid decimal: {s:?}")))
        };
        let whole = parse_digits(whole_str)?;
        let mut frac = parse_digits(frac_str)?;
        for _ in frac_str.len()..8 {
            frac *= 10;
        }
        let raw = whole
            .checked_mul(UNIT)
            .and_then(|w| w.checked_add(frac))
            .ok_or(CoreError::Overflow("Fixed8::from_str"))?;
        Ok(Fixed8(if negative { -raw } else { raw }))
    }
}

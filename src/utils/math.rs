//! Integer helpers.

use crate::error::{Error, Result};

/// Greatest common divisor of `|a|` and `|b|` by recursive Euclid.
///
/// Signs are dropped, so the result is never negative. `gcd(a, 0) == |a|` and
/// `gcd(0, 0) == 0`. Returns `u64` so that `i64::MIN` has a representable
/// magnitude.
pub fn gcd(a: i64, b: i64) -> u64 {
    euclid(a.unsigned_abs(), b.unsigned_abs())
}

fn euclid(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        euclid(b, a % b)
    }
}

/// Least common multiple, `|a * b| / gcd(a, b)`.
///
/// Fails with [`Error::ArithmeticError`] when both inputs are zero (the
/// divisor would be zero) or when the result does not fit in `u64`.
pub fn lcm(a: i64, b: i64) -> Result<u64> {
    let divisor = gcd(a, b);
    if divisor == 0 {
        return Err(Error::ArithmeticError(format!(
            "lcm({}, {}) divides by gcd = 0",
            a, b
        )));
    }
    (a.unsigned_abs() / divisor)
        .checked_mul(b.unsigned_abs())
        .ok_or_else(|| Error::ArithmeticError(format!("lcm({}, {}) overflows u64", a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn test_gcd_negative_inputs_use_magnitude() {
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(12, -18), 6);
        assert_eq!(gcd(-12, -18), 6);
        assert_eq!(gcd(i64::MIN, 0), 1u64 << 63);
    }

    #[test]
    fn test_lcm_basics() {
        assert_eq!(lcm(12, 18).unwrap(), 36);
        assert_eq!(lcm(-4, 6).unwrap(), 12);
        assert_eq!(lcm(5, 0).unwrap(), 0);
        assert_eq!(lcm(1, 1).unwrap(), 1);
    }

    #[test]
    fn test_lcm_both_zero_is_arithmetic_error() {
        assert!(matches!(lcm(0, 0), Err(Error::ArithmeticError(_))));
    }

    #[test]
    fn test_lcm_overflow_is_arithmetic_error() {
        assert!(matches!(lcm(i64::MAX, i64::MAX - 1), Err(Error::ArithmeticError(_))));
    }
}

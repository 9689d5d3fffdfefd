//! Pure integer properties used by hint generation and evaluation.
//!
//! Everything here works on the magnitude of its input where a sign makes no
//! sense (factors, digits). Zero has no finite factor list and divides nothing.

use crate::error::{NumberError, Result};

/// Positive divisors of `|n|`, ascending. Empty for `n == 0`.
#[must_use]
pub fn factors(n: i64) -> Vec<u64> {
    let n = n.unsigned_abs();
    if n == 0 {
        return Vec::new();
    }

    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut d: u64 = 1;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            low.push(d);
            let pair = n / d;
            if pair != d {
                high.push(pair);
            }
        }
        d += 1;
    }

    high.reverse();
    low.extend(high);
    low
}

/// Number of positive divisors of `|n|`; zero for `n == 0`.
#[must_use]
pub fn factor_count(n: i64) -> usize {
    factors(n).len()
}

/// True iff `d` divides `n` evenly. Zero never divides anything.
#[must_use]
pub fn is_factor(n: i64, d: i64) -> bool {
    match n.checked_rem(d) {
        Some(rem) => rem == 0,
        // `i64::MIN % -1` overflows, but the division is exact
        None => d == -1,
    }
}

#[must_use]
pub fn is_prime(n: i64) -> bool {
    n >= 2 && factors(n).len() == 2
}

/// Count of the factors of `n` that are themselves prime.
#[must_use]
pub fn prime_factor_count(n: i64) -> usize {
    factors(n)
        .into_iter()
        .filter(|&f| i64::try_from(f).is_ok_and(is_prime))
        .count()
}

/// Base-10 digits of `|n|`, most significant first. `digits(0) == [0]`.
#[must_use]
pub fn digits(n: i64) -> Vec<u8> {
    let mut n = n.unsigned_abs();
    if n == 0 {
        return vec![0];
    }

    let mut out = Vec::new();
    while n > 0 {
        out.push((n % 10) as u8);
        n /= 10;
    }
    out.reverse();
    out
}

#[must_use]
pub fn digit_sum(n: i64) -> u64 {
    digits(n).into_iter().map(u64::from).sum()
}

#[must_use]
pub fn digit_length(n: i64) -> usize {
    digits(n).len()
}

/// True iff `k * k == n` for some integer `k`. Always false for negatives.
#[must_use]
pub fn is_perfect_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let n = n.unsigned_abs();
    let root = integer_root(n, 2);
    root.checked_pow(2) == Some(n)
}

/// True iff `k * k * k == n` for some integer `k`, negative `n` included.
#[must_use]
pub fn is_perfect_cube(n: i64) -> bool {
    let magnitude = n.unsigned_abs();
    let root = integer_root(magnitude, 3);
    root.checked_pow(3) == Some(magnitude)
}

/// Floor of the `exp`-th root of `n`.
fn integer_root(n: u64, exp: u32) -> u64 {
    if n < 2 {
        return n;
    }

    let mut root = (n as f64).powf(1.0 / f64::from(exp)).round() as u64;
    let fits = |r: u64| r.checked_pow(exp).is_some_and(|value| value <= n);
    while root > 0 && !fits(root) {
        root -= 1;
    }
    while fits(root + 1) {
        root += 1;
    }
    root
}

/// Accept `value` only if it lies in `[low, high]` (inclusive).
///
/// Factor enumeration is trial division up to the square root, so callers
/// bound user input with this before asking for its properties.
pub fn validate_in_range(value: i64, low: i64, high: i64) -> Result<i64> {
    if low > high {
        return Err(NumberError::InvalidRange { low, high });
    }
    if !(low..=high).contains(&value) {
        return Err(NumberError::out_of_range(value, low, high));
    }
    Ok(value)
}

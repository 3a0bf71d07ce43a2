//! Euclid contains the math helper functions used trough the library.
//!
//! Currently that is the combinatorics needed by the
//! [Binomial](crate::distributions::Binomial) probability mass function.
//! The helpers are public because they are uscefull on their own.
//!

/// Computes the [factorial](https://en.wikipedia.org/wiki/Factorial) of `n`
/// (the product of `2..=n`). Returns `1.0` for `n <= 1`.
///
/// The result is computed in `f64`: it is exact up to `n = 22` (where the
/// values still fit in the 53 bits of mantissa) and loses precision beyond
/// that. From `n = 171` onwards the result overflows to `+inf`.
#[must_use]
pub fn factorial(n: u64) -> f64 {
    let mut result: f64 = 1.0;
    for i in 2..=n {
        result = result * (i as f64);
    }
    return result;
}

/// Computes the [binomial coefficient](https://en.wikipedia.org/wiki/Binomial_coefficient)
/// `n` choose `k`: the number of ways to pick `k` elements out of `n`.
///
/// `k <= n` must hold.
///
/// It is computed as `n! / (k! * (n-k)!)` with [factorial], so it inherits
/// the precision limits of the `f64` factorials: for large `n` the quotient
/// degrades and can become `inf / inf = NaN`. If you need large arguments,
/// use a log-space computation instead.
#[must_use]
pub fn choose(n: u64, k: u64) -> f64 {
    let denominator: f64 = factorial(k) * factorial(n - k);
    return factorial(n) / denominator;
}

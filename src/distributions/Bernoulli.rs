//! # Bernoulli distribution
//!
//! The [Bernoulli distribution](https://en.wikipedia.org/wiki/Bernoulli_distribution).
//!
//! It represents a value that can eiter take the value `1` with probability
//! `p` or `0` with probability `1 - p`.
//!
//! It can be interpreted as a coin toss, where `p = 0.5` and the result `1`
//! represents heads and `0` represents tails. We can also have an unfair coin
//! by changing the paramenter `p` to another value. Note that `p` must belong
//! to `[0, 1]`.
//!

use rand::Rng;

use crate::{distribution_trait::Distribution, domain::Domain, errors::RandVarError};

pub const BERNOULLI_DOMAIN: Domain = Domain::Integers(0, 1);

/// Represents a Bernoulli distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    /// Creates a new [Bernoulli distribution](https://en.wikipedia.org/wiki/Bernoulli_distribution).
    ///
    ///  - `p` indicates the probability of success (returning `1.0`).
    ///     - `p` must belong in the interval `[0.0, 1.0]`. Otherwise an error will be returned.
    pub const fn new(p: f64) -> Result<Bernoulli, RandVarError> {
        if !p.is_finite() {
            if p.is_nan() {
                return Err(RandVarError::NanErr);
            }
            return Err(RandVarError::InvalidNumber);
        }
        if !(0.0 <= p && p <= 1.0) {
            return Err(RandVarError::InvalidNumber);
        }

        return Ok(Bernoulli { p });
    }

    /// Creates a new [Bernoulli distribution](https://en.wikipedia.org/wiki/Bernoulli_distribution)
    /// without any checks.
    ///
    /// ## Safety
    ///
    /// If the following conditions are not fullfiled, the returned
    /// distribution will be invalid.
    ///
    ///  - `p` must be finite (no NaNs or `+-inf`)
    ///  - `p` must be a valid probability (`p` belongs to the interval `[0, 1]`)
    ///
    #[must_use]
    pub const unsafe fn new_unchecked(p: f64) -> Bernoulli {
        return Bernoulli { p };
    }

    /// Return `p` (probability of success).
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    /// Draws once from the distribution, as a boolean.
    ///
    /// `true` means success (the `1.0` outcome of [Distribution::sample]).
    #[must_use]
    pub fn sample_bool(&self) -> bool {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        return rng.random::<f64>() < self.p;
    }
}

impl Distribution for Bernoulli {
    fn density_at(&self, x: f64) -> f64 {
        let mut ret: f64 = 0.0;
        if x == 1.0 {
            ret = self.p;
        } else if x == 0.0 {
            ret = 1.0 - self.p;
        }
        return ret;
    }

    fn get_domain(&self) -> &Domain {
        return &BERNOULLI_DOMAIN;
    }

    fn sample(&self) -> f64 {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        if rng.random::<f64>() < self.p {
            return 1.0;
        }
        return 0.0;
    }

    fn sample_many(&self, count: usize) -> Vec<f64> {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        let mut rand_unit: Vec<f64> = std::vec![0.0; count];
        rng.fill(rand_unit.as_mut_slice());

        return rand_unit
            .iter()
            .map(|&u| if u < self.p { 1.0 } else { 0.0 })
            .collect::<Vec<f64>>();
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.p);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.p * (1.0 - self.p));
    }
}

impl Default for Bernoulli {
    fn default() -> Self {
        Self { p: 0.5 }
    }
}

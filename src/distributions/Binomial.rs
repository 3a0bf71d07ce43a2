//! # Binomial distribution
//!
//! The [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
//! models the number of successes of `trials` independent
//! [Bernoulli trials](crate::distributions::Bernoulli) with success
//! probability `rate`.
//!
//! For example, if you want to know the probability of getting exacly 17
//! heads in 22 throws of a coin, we can model this as a Binomial distribution
//! with `trials = 22` and `rate = 0.5` and evaluate the density at `17.0`.
//!
//! The probability mass function is computed trough the factorial-based
//! [choose](crate::euclid::choose), so it degrades in precision once the
//! factorials leave the exact range of `f64` (see [crate::euclid]).
//!

use rand::Rng;

use crate::{
    distribution_trait::Distribution, domain::Domain, errors::RandVarError, euclid,
};

/// Represents a Binomial distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    domain: Domain,
    trials: u64,
    rate: f64,
}

impl Binomial {
    /// Creates a new [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution).
    ///
    ///  - `trials` indicates the number of Bernoulli trials.
    ///  - `rate` indicates the probability of success of each trial.
    ///     - `rate` must belong in the interval `[0.0, 1.0]`. Otherwise an error will be returned.
    pub fn new(trials: u64, rate: f64) -> Result<Binomial, RandVarError> {
        if rate.is_nan() {
            return Err(RandVarError::NanErr);
        }
        if !(0.0 <= rate && rate <= 1.0) {
            return Err(RandVarError::InvalidNumber);
        }

        let domain: Domain = Domain::Integers(0, trials.try_into().unwrap_or(i64::MAX));

        return Ok(Binomial {
            domain,
            trials,
            rate,
        });
    }

    /// Creates a new [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
    /// without any checks.
    ///
    /// ## Safety
    ///
    /// If the following conditions are not fullfiled, the returned
    /// distribution will be invalid.
    ///
    ///  - `rate` must be a valid probability (`rate` belongs to the interval `[0, 1]`)
    ///  - `rate` must not be a NaN
    ///
    #[must_use]
    pub unsafe fn new_unchecked(trials: u64, rate: f64) -> Binomial {
        let domain: Domain = Domain::Integers(0, trials.try_into().unwrap_or(i64::MAX));

        return Binomial {
            domain,
            trials,
            rate,
        };
    }

    /// Return `trials` (number of Bernoulli trials).
    #[must_use]
    pub const fn get_trials(&self) -> u64 {
        return self.trials;
    }

    /// Return `rate` (probability of success of each trial).
    #[must_use]
    pub const fn get_rate(&self) -> f64 {
        return self.rate;
    }
}

impl Distribution for Binomial {
    fn density_at(&self, x: f64) -> f64 {
        if x.fract() != 0.0 || x < 0.0 || (self.trials as f64) < x {
            return 0.0;
        }

        let successes: u64 = x as u64;
        let coefficient: f64 = euclid::choose(self.trials, successes);
        let prob_success: f64 = self.rate.powi(successes as i32);
        let prob_failure: f64 = (1.0 - self.rate).powi((self.trials - successes) as i32);

        return coefficient * prob_success * prob_failure;
    }

    fn get_domain(&self) -> &Domain {
        return &self.domain;
    }

    /// Draws a value with [inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling):
    /// one uniform draw, then a walk of the cumulative mass until the draw
    /// is covered.
    fn sample(&self) -> f64 {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        let u: f64 = rng.random::<f64>();

        let mut accumulated: f64 = 0.0;
        for k in 0..=self.trials {
            accumulated += self.density_at(k as f64);
            if u <= accumulated {
                return k as f64;
            }
        }

        // Rounding can leave the accumulated mass slightly below `u` even
        // after all the terms: clamp to the top of the support.
        return self.trials as f64;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some((self.trials as f64) * self.rate);
    }

    fn variance(&self) -> Option<f64> {
        return Some((self.trials as f64) * self.rate * (1.0 - self.rate));
    }
}

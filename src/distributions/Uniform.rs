//! # Uniform distribution
//!
//! The [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! is a continuous distribution where all possible outcomes in the interval
//! `[start, end)` have equal likelyhood of happening.
//!
//! Note that the interval is half-open: `start` can be drawn, `end` cannot,
//! and the density is `0.0` at `end` itself.
//!

use rand::Rng;

use crate::{distribution_trait::Distribution, domain::Domain, errors::RandVarError};

#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    domain: Domain,
    /// The minimum value (included)
    start: f64,
    /// The maximum value (excluded)
    end: f64,
}

impl Uniform {
    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    ///
    ///  - `start` indicates the minimum value.
    ///  - `end` indicates the maximum value.
    ///  - `start < end` must be fulfilled or an error will be returned.
    ///  - `start` and `end` must both be finite values (no `+-inf` or NaNs)
    pub const fn new(start: f64, end: f64) -> Result<Uniform, RandVarError> {
        if !start.is_finite() || !end.is_finite() {
            if start.is_nan() || end.is_nan() {
                return Err(RandVarError::NanErr);
            }
            return Err(RandVarError::InvalidNumber);
        }

        if end <= start {
            return Err(RandVarError::DegenerateSupport);
        }

        let domain: Domain = Domain::Range(start, end);

        return Ok(Uniform { domain, start, end });
    }

    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    /// Does not do any checks.
    ///
    /// ## Safety
    ///
    /// If the following conditions are not fullfiled, the returned
    /// distribution will be invalid.
    ///
    ///  - `start < end`. (With `start == end` the density divides by zero
    ///     and sampling collapses onto `start`.)
    ///  - `start` and `end` must both be finite values (no `+-inf` or NaNs)
    ///
    #[must_use]
    pub const unsafe fn new_unchecked(start: f64, end: f64) -> Uniform {
        let domain: Domain = Domain::Range(start, end);

        return Uniform { domain, start, end };
    }

    /// Return `start` (minimum value, included).
    #[must_use]
    pub const fn get_start(&self) -> f64 {
        return self.start;
    }

    /// Return `end` (maximum value, excluded).
    #[must_use]
    pub const fn get_end(&self) -> f64 {
        return self.end;
    }
}

impl Distribution for Uniform {
    fn density_at(&self, x: f64) -> f64 {
        if x < self.start || self.end <= x {
            return 0.0;
        }
        return 1.0 / (self.end - self.start);
    }

    fn get_domain(&self) -> &Domain {
        return &self.domain;
    }

    fn sample(&self) -> f64 {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        return self.start + rng.random::<f64>() * (self.end - self.start);
    }

    fn sample_many(&self, count: usize) -> Vec<f64> {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        let mut rand_unit: Vec<f64> = std::vec![0.0; count];
        rng.fill(rand_unit.as_mut_slice());

        let length: f64 = self.end - self.start;
        return rand_unit
            .iter()
            .map(|&u| self.start + u * length)
            .collect::<Vec<f64>>();
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(0.5 * (self.start + self.end));
    }

    fn variance(&self) -> Option<f64> {
        let length: f64 = self.end - self.start;
        return Some((1.0 / 12.0) * length * length);
    }
}

impl Default for Uniform {
    /// The standard unit interval, `[0, 1)`.
    fn default() -> Self {
        Uniform::new(0.0, 1.0).unwrap()
    }
}

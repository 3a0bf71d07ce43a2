//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! is a very important continuous probability distribution.
//!
//! This distribution is very frequent in statistics and extremly well
//! studied. Trough the [Central Limit Theorem](https://en.wikipedia.org/wiki/Central_limit_theorem)
//! it shows up whenever many small independent effects are added together,
//! wich makes it the default model for measurement noise and similar
//! quantities.
//!
//! Sampling uses the [Box-Muller transform](https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform)
//! (the cartesian variant): two uniform draws are mapped to one standard
//! normal value, wich is then scaled and shifted.
//!

use rand::Rng;
use std::f64::consts::PI;

use crate::{distribution_trait::Distribution, domain::Domain, errors::RandVarError};

pub const NORMAL_DOMAIN: Domain = Domain::Reals;

/// Represents a Normal (Gaussian) distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// Creates a new [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution).
    ///
    ///  - `mean` indicates the location of the center of the distribution.
    ///  - `std_dev` indicates the standard deviation (spread).
    ///     - `std_dev` must be stricly positive. Otherwise an error will be returned.
    ///  - Both values must be finite (no `+-inf` or NaNs)
    pub const fn new(mean: f64, std_dev: f64) -> Result<Normal, RandVarError> {
        if !mean.is_finite() || !std_dev.is_finite() {
            if mean.is_nan() || std_dev.is_nan() {
                return Err(RandVarError::NanErr);
            }
            return Err(RandVarError::InvalidNumber);
        }

        if std_dev <= 0.0 {
            return Err(RandVarError::InvalidNumber);
        }

        return Ok(Normal { mean, std_dev });
    }

    /// Creates a new [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
    /// without any checks.
    ///
    /// ## Safety
    ///
    /// If the following conditions are not fullfiled, the returned
    /// distribution will be invalid.
    ///
    ///  - `std_dev` must be stricly positive
    ///  - `mean` and `std_dev` must both be finite values (no `+-inf` or NaNs)
    ///
    #[must_use]
    pub const unsafe fn new_unchecked(mean: f64, std_dev: f64) -> Normal {
        return Normal { mean, std_dev };
    }

    /// Return the mean of the distribution.
    #[must_use]
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Return the standard deviation of the distribution.
    #[must_use]
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.std_dev;
    }
}

impl Distribution for Normal {
    fn density_at(&self, x: f64) -> f64 {
        let variance: f64 = self.std_dev * self.std_dev;
        let normalization: f64 = 1.0 / (2.0 * PI * variance).sqrt();
        let deviation: f64 = x - self.mean;

        return normalization * (-(deviation * deviation) / (2.0 * variance)).exp();
    }

    fn get_domain(&self) -> &Domain {
        return &NORMAL_DOMAIN;
    }

    /// Draws a value with the [Box-Muller transform](https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform).
    ///
    /// A draw of `u_1 == 0.0` maps to an infinite result trough the
    /// logarithm. With a real entropy source this is arbitrarily rare and
    /// it is left unguarded.
    fn sample(&self) -> f64 {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        let u_1: f64 = rng.random::<f64>();
        let u_2: f64 = rng.random::<f64>();

        let standard: f64 = (-2.0 * u_1.ln()).sqrt() * (2.0 * PI * u_2).cos();

        return standard * self.std_dev + self.mean;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.mean);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.std_dev * self.std_dev);
    }
}

impl Default for Normal {
    /// The standard normal distribution (`mean = 0`, `std_dev = 1`).
    fn default() -> Self {
        Normal { mean: 0.0, std_dev: 1.0 }
    }
}

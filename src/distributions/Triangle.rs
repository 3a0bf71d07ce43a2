//! # Triangle distribution
//!
//! The [Triangular distribution](https://en.wikipedia.org/wiki/Triangular_distribution)
//! is a continuous distribution whose density ramps up linearly from `min`
//! to a peak at `mode` and back down to `max`. It is a common choice when
//! only the extremes and the most likely value of a quantity are known.
//!
//! Sampling uses [rejection sampling](https://en.wikipedia.org/wiki/Rejection_sampling):
//! candidates are drawn uniformly over the support and accepted with
//! probability proportional to the density at the candidate. The acceptance
//! loop terminates almost surely (for a triangular target about half of the
//! candidates are accepted) but it has no a priori bound. [build_triangle]
//! can set a cap on the number of rejected candidates per draw if a hard
//! bound is needed.
//!

use crate::{
    distribution_trait::Distribution, distributions::Uniform::Uniform, domain::Domain,
    errors::RandVarError,
};

/// Represents a Triangular distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    domain: Domain,
    min: f64,
    mode: f64,
    max: f64,
    /// The density at `mode`: `2 / (max - min)`, the height that normalizes
    /// the triangle to unit area.
    peak: f64,
    slope_up: f64,
    slope_down: f64,
    /// Candidate generator for the rejection loop, over `[min, max)`.
    candidates: Uniform,
    /// Acceptance threshold generator, over `[0, peak)`.
    thresholds: Uniform,
    /// Upper bound on rejected candidates per draw. `None` leaves the
    /// acceptance loop unbounded.
    max_rejections: Option<u64>,
}

/// Creates a new [Triangle] distribution, with an optional cap on the
/// rejection sampling loop.
///
/// ## Inputs:
///
/// 1. `min`: the lower end of the support.
/// 2. `mode`: the location of the density peak. `min <= mode <= max`.
/// 3. `max`: the upper end of the support. `min < max`.
/// 4. `max_rejections`: (optional) how many replacement candidates a single
///    [sample](Distribution::sample) call may draw after a rejection before
///    giving up and returning the current candidate unaccepted. Leaving it
///    empty keeps the acceptance loop unbounded, like [Triangle::new] does.
///
/// ```
/// use RandomVariables::distributions::Triangle::build_triangle;
///
/// let commute_minutes = build_triangle()
///     .min(10.0)
///     .mode(15.0)
///     .max(40.0)
///     .max_rejections(128)
///     .call()
///     .unwrap();
/// ```
#[bon::builder]
pub fn build_triangle(
    min: f64,
    mode: f64,
    max: f64,
    max_rejections: Option<u64>,
) -> Result<Triangle, RandVarError> {
    return Triangle::assemble(min, mode, max, max_rejections);
}

impl Triangle {
    /// Creates a new [Triangular distribution](https://en.wikipedia.org/wiki/Triangular_distribution).
    ///
    ///  - `min` indicates the minimum value.
    ///  - `mode` indicates the value where the density peaks.
    ///  - `max` indicates the maximum value.
    ///  - `min <= mode <= max` and `min < max` must be fulfilled or an error
    ///     will be returned.
    ///  - All 3 values must be finite (no `+-inf` or NaNs)
    ///
    /// The rejection sampling loop of the returned distribution is unbounded
    /// (see [build_triangle] for a capped alternative).
    pub fn new(min: f64, mode: f64, max: f64) -> Result<Triangle, RandVarError> {
        return Triangle::assemble(min, mode, max, None);
    }

    fn assemble(
        min: f64,
        mode: f64,
        max: f64,
        max_rejections: Option<u64>,
    ) -> Result<Triangle, RandVarError> {
        if !min.is_finite() || !mode.is_finite() || !max.is_finite() {
            if min.is_nan() || mode.is_nan() || max.is_nan() {
                return Err(RandVarError::NanErr);
            }
            return Err(RandVarError::InvalidNumber);
        }

        if !(min <= mode && mode <= max) {
            return Err(RandVarError::InvalidNumber);
        }

        if max <= min {
            return Err(RandVarError::DegenerateSupport);
        }

        let peak: f64 = 2.0 / (max - min);

        // SAFETY: `min < max` and `0.0 < peak` were just checked.
        let candidates: Uniform = unsafe { Uniform::new_unchecked(min, max) };
        let thresholds: Uniform = unsafe { Uniform::new_unchecked(0.0, peak) };

        // If `min == mode` (or `mode == max`) the matching slope is infinite,
        // but then its branch of the density covers an empty interval and the
        // slope is never evaluated.
        return Ok(Triangle {
            domain: Domain::Range(min, max),
            min,
            mode,
            max,
            peak,
            slope_up: peak / (mode - min),
            slope_down: peak / (max - mode),
            candidates,
            thresholds,
            max_rejections,
        });
    }

    /// Return `min` (minimum value).
    #[must_use]
    pub const fn get_min(&self) -> f64 {
        return self.min;
    }

    /// Return `mode` (location of the density peak).
    #[must_use]
    pub const fn get_mode(&self) -> f64 {
        return self.mode;
    }

    /// Return `max` (maximum value).
    #[must_use]
    pub const fn get_max(&self) -> f64 {
        return self.max;
    }

    /// Return the density at `mode` (the maximum value the density takes).
    #[must_use]
    pub const fn get_peak(&self) -> f64 {
        return self.peak;
    }
}

impl Distribution for Triangle {
    fn density_at(&self, x: f64) -> f64 {
        if x <= self.min || self.max <= x {
            return 0.0;
        }
        if x <= self.mode {
            return self.slope_up * (x - self.min);
        }
        return self.slope_down * (self.max - x);
    }

    fn get_domain(&self) -> &Domain {
        return &self.domain;
    }

    /// Draws a value by rejection sampling: a candidate `x ~ Uniform[min, max)`
    /// is accepted the first time a threshold `y ~ Uniform[0, peak)` falls at
    /// or below `density_at(x)`.
    ///
    /// If a `max_rejections` cap was configured (see [build_triangle]) and
    /// the loop exhausts it, the current candidate is returned even though
    /// it was not accepted.
    fn sample(&self) -> f64 {
        let mut candidate: f64 = self.candidates.sample();
        let mut threshold: f64 = self.thresholds.sample();
        let mut rejections: u64 = 0;

        while self.density_at(candidate) < threshold {
            if let Some(cap) = self.max_rejections {
                if cap <= rejections {
                    break;
                }
            }
            candidate = self.candidates.sample();
            threshold = self.thresholds.sample();
            rejections += 1;
        }

        return candidate;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some((self.min + self.mode + self.max) / 3.0);
    }

    fn variance(&self) -> Option<f64> {
        let squares: f64 = self.min * self.min + self.mode * self.mode + self.max * self.max;
        let products: f64 =
            self.min * self.mode + self.min * self.max + self.mode * self.max;
        return Some((squares - products) / 18.0);
    }
}

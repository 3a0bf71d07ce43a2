#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `RandomVariables` should have a snake case name convert the identifier to snake case: `random_variables`"
// The rest of the names will follow the snake_case convention.

//! # Random Variables
//!
//! A small library of probability distributions for simulations, Monte Carlo
//! methods and stochastic modeling. Every distribution supports random
//! sampling (one value or a batch) and density evaluation trough the shared
//! [Distribution](distribution_trait::Distribution) trait:
//!
//!  - [sample](distribution_trait::Distribution::sample): one random draw.
//!  - [sample_many](distribution_trait::Distribution::sample_many): `n` ordered draws.
//!  - [density_at](distribution_trait::Distribution::density_at): the pdf/pmf at a point.
//!  - [get_domain](distribution_trait::Distribution::get_domain): where the density lives.
//!  - [expected_value](distribution_trait::Distribution::expected_value) and
//!     [variance](distribution_trait::Distribution::variance): closed form moments.
//!
//! ## Distributions
//!
//! ### Continuous:
//!
//!  - [x] [Uniform distribution](crate::distributions::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!  - [x] [Triangular distribution](crate::distributions::Triangle) ([Wiki](https://en.wikipedia.org/wiki/Triangular_distribution))
//!  - [x] [Normal distribution](crate::distributions::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!
//! ### Discrete:
//!
//!  - [x] [Bernoulli](crate::distributions::Bernoulli) ([Wiki](https://en.wikipedia.org/wiki/Bernoulli_distribution))
//!  - [x] [Binomial](crate::distributions::Binomial) ([Wiki](https://en.wikipedia.org/wiki/Binomial_distribution))
//!
//! The discrete distributions place their mass on integer-valued `f64`
//! points (`0.0` and `1.0` for a Bernoulli), so all 5 variants share the
//! same interface.
//!
//! Each distribution can be built with its validated constructor
//! (`Bernoulli::new(p)`, ...), with one of the [create_bernoulli] family of
//! factories below, or (for the ones with optional knobs) with a builder
//! like [distributions::Triangle::build_triangle]. The combinatoric helpers
//! feeding the Binomial are public in [euclid].
//!
//! ## Example
//!
//! ```
//! use RandomVariables::{create_normal, distribution_trait::Distribution};
//!
//! let noise = create_normal(0.0, 2.5).unwrap();
//!
//! let one: f64 = noise.sample();
//! let many: Vec<f64> = noise.sample_many(10_000);
//! assert_eq!(many.len(), 10_000);
//!
//! // 1/sqrt(2*pi*variance) at the center
//! assert!((noise.density_at(0.0) - 0.15957691216057308).abs() < 1.0e-12);
//! ```
//!
//! ## Randomness
//!
//! Samplers consume uniform values in `[0, 1)` from the thread local
//! generator of [rand]. The library does not manage seeding: if you need
//! reproducible streams, this is not the crate for you.
//!

use crate::{
    distributions::{
        Bernoulli::Bernoulli, Binomial::Binomial, Normal::Normal, Triangle::Triangle,
        Uniform::Uniform,
    },
    errors::RandVarError,
};

pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;

/// Creates a [Bernoulli] distribution with success probability `p`.
///
/// Convenience wrapper over [Bernoulli::new].
pub const fn create_bernoulli(p: f64) -> Result<Bernoulli, RandVarError> {
    return Bernoulli::new(p);
}

/// Creates a [Uniform] distribution over `[start, end)`.
///
/// Convenience wrapper over [Uniform::new].
pub const fn create_uniform(start: f64, end: f64) -> Result<Uniform, RandVarError> {
    return Uniform::new(start, end);
}

/// Creates a [Triangle] distribution over `[min, max]` with the density
/// peaking at `mode`.
///
/// Convenience wrapper over [Triangle::new]. The rejection sampling loop is
/// unbounded; use [distributions::Triangle::build_triangle] to cap it.
pub fn create_triangle(min: f64, mode: f64, max: f64) -> Result<Triangle, RandVarError> {
    return Triangle::new(min, mode, max);
}

/// Creates a [Binomial] distribution counting the successes of `trials`
/// Bernoulli trials of probability `rate`.
///
/// Convenience wrapper over [Binomial::new].
pub fn create_binomial(trials: u64, rate: f64) -> Result<Binomial, RandVarError> {
    return Binomial::new(trials, rate);
}

/// Creates a [Normal] distribution with the given mean and standard
/// deviation.
///
/// Convenience wrapper over [Normal::new].
pub const fn create_normal(mean: f64, std_dev: f64) -> Result<Normal, RandVarError> {
    return Normal::new(mean, std_dev);
}

//! Large-sample sanity checks: the empirical moments of the samplers must
//! agree with the closed form moments within a tolerance far wider than the
//! standard error at this sample size.

use RandomVariables::{
    create_bernoulli, create_binomial, create_normal, create_triangle, create_uniform,
    distribution_trait::Distribution,
};
use assert_approx_eq::assert_approx_eq;

const SAMPLE_COUNT: usize = 100_000;

fn mean(samples: &[f64]) -> f64 {
    let total: f64 = samples.iter().sum();
    return total / (samples.len() as f64);
}

fn sample_variance(samples: &[f64]) -> f64 {
    let center: f64 = mean(samples);
    let total: f64 = samples
        .iter()
        .map(|&x| (x - center) * (x - center))
        .sum();
    return total / ((samples.len() - 1) as f64);
}

#[test]
fn bernoulli_sample_mean() {
    let distribution = create_bernoulli(0.3).expect("valid probability");
    let samples: Vec<f64> = distribution.sample_many(SAMPLE_COUNT);

    // standard error ~ 0.0014
    assert_approx_eq!(mean(&samples), distribution.expected_value().unwrap(), 2.0e-2);
}

#[test]
fn bernoulli_sample_bool_frequency() {
    let distribution = create_bernoulli(0.7).expect("valid probability");
    let mut successes: u32 = 0;
    for _ in 0..SAMPLE_COUNT {
        if distribution.sample_bool() {
            successes += 1;
        }
    }

    let frequency: f64 = f64::from(successes) / (SAMPLE_COUNT as f64);
    assert_approx_eq!(frequency, 0.7, 2.0e-2);
}

#[test]
fn uniform_sample_moments() {
    let distribution = create_uniform(2.0, 5.0).expect("valid interval");
    let samples: Vec<f64> = distribution.sample_many(SAMPLE_COUNT);

    assert_approx_eq!(mean(&samples), 3.5, 5.0e-2);
    assert_approx_eq!(sample_variance(&samples), 0.75, 5.0e-2);
}

#[test]
fn triangle_sample_moments() {
    let distribution = create_triangle(0.0, 1.0, 3.0).expect("valid parameterization");
    let samples: Vec<f64> = distribution.sample_many(SAMPLE_COUNT);

    assert_approx_eq!(mean(&samples), distribution.expected_value().unwrap(), 5.0e-2);
    assert_approx_eq!(
        sample_variance(&samples),
        distribution.variance().unwrap(),
        5.0e-2
    );
}

#[test]
fn triangle_capped_sampler_stays_close() {
    // with a generous cap the acceptance loop virtually never gives up, so
    // the empirical mean should still match the closed form
    let distribution = RandomVariables::distributions::Triangle::build_triangle()
        .min(0.0)
        .mode(1.0)
        .max(3.0)
        .max_rejections(64)
        .call()
        .expect("valid parameterization");
    let samples: Vec<f64> = distribution.sample_many(SAMPLE_COUNT);

    assert_approx_eq!(mean(&samples), 4.0 / 3.0, 5.0e-2);
}

#[test]
fn binomial_sample_mean() {
    let distribution = create_binomial(10, 0.4).expect("valid parameters");
    let samples: Vec<f64> = distribution.sample_many(SAMPLE_COUNT);

    // standard error ~ 0.005
    assert_approx_eq!(mean(&samples), 4.0, 5.0e-2);
}

#[test]
fn normal_sample_moments() {
    let distribution = create_normal(5.0, 2.0).expect("valid parameters");
    let samples: Vec<f64> = distribution.sample_many(SAMPLE_COUNT);

    // standard error of the mean ~ 0.0063
    assert_approx_eq!(mean(&samples), 5.0, 5.0e-2);
    // standard error of the variance ~ 0.018
    assert_approx_eq!(sample_variance(&samples), 4.0, 2.5e-1);
}

// Discrete
pub mod Bernoulli;
pub mod Binomial;

// Continuous
pub mod Normal;
pub mod Triangle;
pub mod Uniform;

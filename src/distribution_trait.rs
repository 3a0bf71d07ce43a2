use crate::domain::Domain;

/// The trait implemented by every distribution in the library.
///
/// It is the whole interface of a distribution: evaluating the density,
/// drawing samples (one at a time or in batches) and querying the basic
/// moments. Holding a `&dyn Distribution` (or a generic bound) lets the
/// caller work with any variant without knowing wich one it is.
///
/// None of the provided methods are guaranteed to work if the implemented
/// [Distribution::density_at] is NOT a valid density. So, it needs to
/// fullfill:
///  - The function must be stricly non-negative
///  - The function must be real valued
///  - The function must have a total mass of 1 over the domain.
pub trait Distribution {
    // Requiered methods:

    /// Evaluates the density of the distribution at the point `x`.
    ///
    /// For the continuous distributions this is the
    /// [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density Function). For the discrete ones it is the
    /// [PMF](https://en.wikipedia.org/wiki/Probability_mass_function)
    /// (Probability Mass Function), evaluated at the integer-valued points
    /// of the support.
    ///
    /// Outside the support the result is exactly `0.0`.
    fn density_at(&self, x: f64) -> f64;

    /// Returns a reference to the [Domain] where [Distribution::density_at]
    /// can be non-zero. The returned domain should be constant and not change.
    fn get_domain(&self) -> &Domain;

    /// Draws a single random value from the distribution.
    ///
    /// The entropy comes from the thread local generator of [rand], wich
    /// supplies uniform values in `[0, 1)`. There is no seeding surface:
    /// reproducibility is the responsability of the caller.
    fn sample(&self) -> f64;

    /// Returns the expected value of the distribution, if it exists.
    fn expected_value(&self) -> Option<f64>;

    /// Returns the variance of the distribution, if it exists.
    fn variance(&self) -> Option<f64>;

    // Provided methods:

    /// Draws `count` independent values from the distribution, in draw order.
    ///
    /// Equivalent to calling [Distribution::sample] `count` times and
    /// collecting the results. `count = 0` simply returns an empty vector.
    ///
    /// Implementors may override this method when batching the random draws
    /// is cheaper, as long as one uniform value is consumed per returned
    /// sample and the draw order is kept.
    fn sample_many(&self, count: usize) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(count);
        for _ in 0..count {
            ret.push(self.sample());
        }
        return ret;
    }
}

use thiserror::Error;

/// The ways a distribution can fail to be constructed.
///
/// All checks happen at construction time. Once a distribution is built,
/// sampling and density evaluation cannot fail (although they can produce
/// floating point special values, see the notes on each distribution).
#[derive(Error, Debug)]
pub enum RandVarError {
    /// A NaN (Not a Number) was found in the input.
    #[error("A NaN (Not a Number) was found in the input. ")]
    NanErr,
    /// A parameter did not fullfill the conditions of the constructor.
    /// Maybe it was infinite when a finite value was needed, outside
    /// `[0, 1]` when a probability was asked for, or a non-positive
    /// standard deviation.
    #[error(
        "A parameter did not fullfill the conditions of the constructor. Maybe it was infinite when a finite value was needed, outside `[0, 1]` when a probability was asked for, or a non-positive standard deviation. "
    )]
    InvalidNumber,
    /// An interval was given with zero or negative length.
    #[error("An interval was given with zero or negative length. ")]
    DegenerateSupport,
}

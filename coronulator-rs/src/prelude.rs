pub use crate::catalog::{options_for, Dimension, Kind, Opt, Selection};
pub use crate::error::{InputError, RiskError};
pub use crate::risk::{
    death_probability, estimate, format_probability, Estimate, Odds, Profile,
};

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;

/// Number of risk dimensions a person is described by.
pub const NUM_DIMENSIONS: usize = 9;

/// Simple trait to simplify the use of values that are stored per risk
/// dimension.
pub trait ForDimension<T> {
    /// Return the content stored for the given dimension.
    fn for_dimension(&self, dim: Dimension) -> T;
}

impl<T> ForDimension<T> for [T; NUM_DIMENSIONS]
where
    T: Copy,
{
    fn for_dimension(&self, dim: Dimension) -> T {
        self[dim.index()]
    }
}

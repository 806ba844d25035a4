#[macro_use]
mod macros;

pub mod batch;
pub mod catalog;
pub mod config;
pub mod error;
pub mod prelude;
pub mod risk;
pub mod utils;

pub use crate::catalog::{options_for, Dimension, Opt, Selection};
pub use crate::error::{InputError, RiskError};
pub use crate::risk::{death_probability, estimate, format_probability, Estimate, Odds, Profile};

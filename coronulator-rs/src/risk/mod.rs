//! The risk engine: a pure aggregation of resolved risk factors into a death
//! probability, and the rule used to display that probability.
//!
//! Both operations are stateless and can be called from any thread.
mod aggregate;
mod format;
mod profile;

pub use aggregate::*;
pub use format::*;
pub use profile::*;

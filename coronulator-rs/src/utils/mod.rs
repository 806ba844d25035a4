mod functions;
mod stats;

pub use functions::*;
pub use stats::*;

//! Table configuration loading and validation.

pub mod load;

pub use load::*;

//! Pool screening and tag rendering

pub mod sanitize;
pub mod tags;

pub use sanitize::*;
pub use tags::*;

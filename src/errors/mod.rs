//! Error types

pub mod tag_error;

pub use tag_error::*;

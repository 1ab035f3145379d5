//! Core data types and structures

pub mod pools;
pub mod tags;

pub use pools::*;
pub use tags::*;

//! Helpers over collections of comparable elements.

pub mod frequency;

pub use frequency::{count, most_frequent};

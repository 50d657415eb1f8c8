//! Pure data structures for the order domain.

pub mod order;

pub use order::*;

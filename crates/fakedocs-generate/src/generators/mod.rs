//! Value samplers shared by every variant.

pub mod inference;
pub mod primitives;

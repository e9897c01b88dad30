//! Synthetic sample generation
pub mod generator;

pub use self::generator::SampleGenerator;

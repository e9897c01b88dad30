//! Method scoring
pub mod scorer;

pub use self::scorer::{score, score_checked};

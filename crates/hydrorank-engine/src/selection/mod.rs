//! Recommendation selection
pub mod selector;

pub use self::selector::{select_leader, RecommendationTracker};

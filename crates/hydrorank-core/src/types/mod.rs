//! Core data types for the Hydrorank simulator

pub mod method;
pub mod recommendation;
pub mod sample;
pub mod scored;
pub mod state;

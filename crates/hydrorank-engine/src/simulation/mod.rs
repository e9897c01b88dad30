//! Simulation loop, state holder, and presentation handle
pub mod runner;
pub mod state;

pub use self::runner::{Simulation, SimulationHandle};
pub use self::state::{SimulationState, TickOutcome};

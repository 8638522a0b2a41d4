pub mod census;
pub mod tick;

pub use census::CityCensus;
pub use tick::{run_simulation_tick, SimulationEvent};

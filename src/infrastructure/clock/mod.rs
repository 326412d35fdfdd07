pub mod simulation_clock;
pub mod system_clock;

pub use simulation_clock::SimulationClock;
pub use system_clock::SystemClock;

pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod log;
pub mod simulator;
pub mod scenario;

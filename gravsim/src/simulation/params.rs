//! Numerical and physical parameters for a run
//!
//! `Parameters` holds the runtime settings:
//! - integration step `delta_time` and logging interval `log_step` (seconds),
//! - total simulated `duration` (seconds),
//! - gravitational constant `G` and the coincidence guard `min_separation`

pub const MINUTE: i64 = 60;
pub const HOUR: i64 = MINUTE * 60;
pub const DAY: i64 = HOUR * 24;
pub const WEEK: i64 = DAY * 7;

pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub delta_time: i64, // integration step
    pub log_step: i64, // how often state is recorded
    pub duration: i64, // total simulated time
    pub G: f64, // gravitational constant
    pub min_separation: f64, // pairs closer than this are a singularity
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            delta_time: MINUTE,
            log_step: MINUTE,
            duration: WEEK * 4,
            G: GRAVITATIONAL_CONSTANT,
            min_separation: 1.0e-3,
        }
    }
}

impl Parameters {
    /// True when every log row will be visited by the stepping loop
    pub fn log_aligned(&self) -> bool {
        self.delta_time > 0 && self.log_step % self.delta_time == 0
    }
}

//! Error type shared by the simulation and visualization layers

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// The trajectory log could not be allocated
    #[error("failed to allocate trajectory log of {rows} rows x {bodies} bodies")]
    LogAllocation { rows: usize, bodies: usize },

    /// Two bodies are too close together to evaluate gravity between them
    #[error("bodies {first} and {second} are {distance:e} m apart, below the minimum separation")]
    PhysicsSingularity { first: usize, second: usize, distance: f64 },

    /// A time lookup fell outside the logged range
    #[error("time {time_seconds} s maps to log row {index}, outside 0..{capacity}")]
    OutOfRange { time_seconds: i64, index: i64, capacity: usize },

    /// The row exists but the stepping loop never wrote it
    #[error("log row {index} (time {time_seconds} s) was never written; is log_step a multiple of delta_time?")]
    UnwrittenRow { time_seconds: i64, index: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

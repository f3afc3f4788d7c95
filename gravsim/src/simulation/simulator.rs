//! Batch driver: runs the integrator over a whole duration and fills a
//! [`TrajectoryLog`].

use tracing::{debug, info, warn};

use crate::error::{Result, SimError};
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::euler_step;
use crate::simulation::log::TrajectoryLog;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};

/// Simulate `initial` for `duration` seconds.
///
/// Each step is logged *before* its forces are applied, so row 0 always
/// holds the initial state.
pub fn simulate(initial: &[Body], duration: i64, params: &Parameters) -> Result<TrajectoryLog> {
    if params.delta_time <= 0 {
        return Err(SimError::InvalidConfig(format!(
            "delta_time must be positive, got {}",
            params.delta_time
        )));
    }

    let mut sys = System::new(initial.to_vec());
    let forces = ForceSet::gravity(params);
    let mut log = TrajectoryLog::allocate(duration, params.log_step, initial.len())?;

    if !params.log_aligned() {
        warn!(
            delta_time = params.delta_time,
            log_step = params.log_step,
            "log_step is not a multiple of delta_time; some log rows will stay empty"
        );
    }

    let steps = duration / params.delta_time;
    info!(bodies = initial.len(), duration, steps, rows = log.capacity(), "simulating");

    for step in 0..=steps {
        let t = step * params.delta_time;
        log.write_if_due(&sys.bodies, t)?;
        euler_step(&mut sys, &forces, params.delta_time)?;
    }

    debug!(t_end = sys.t, "simulation finished");
    Ok(log)
}

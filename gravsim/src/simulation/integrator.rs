//! Fixed-step time integrator
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked first and the
//! position drifts with the updated velocity.

use super::forces::ForceSet;
use super::states::{Body, System};
use crate::error::Result;

/// Advance one body by `dt` seconds from its accumulated force
pub fn integrate(body: &mut Body, dt: f64) {
    // v_n+1 = v_n + (f_n / m) dt
    body.v += body.f / body.m * dt;
    // x_n+1 = x_n + v_n+1 dt
    body.x += body.v * dt;
}

/// Compute forces for the whole system and advance every body by one step
pub fn euler_step(sys: &mut System, forces: &ForceSet, delta_time: i64) -> Result<()> {
    forces.compute_forces(&mut sys.bodies)?;

    let dt = delta_time as f64;
    for b in sys.bodies.iter_mut() {
        integrate(b, dt);
    }
    sys.t += delta_time;
    Ok(())
}

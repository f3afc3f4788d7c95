//! Core state types for the simulation.
//!
//! - `Body`   a point mass with its motion state and display symbol
//! - `System` the working set of bodies plus the current simulation time
//!
//! Positions are metres, velocities m/s, forces newtons, masses kg.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub f: NVec3, // force accumulated during the current step
    pub m: f64, // mass
    pub symbol: char, // glyph drawn at the body's current position
}

impl Body {
    pub fn new(symbol: char, m: f64, x: NVec3, v: NVec3) -> Self {
        Self {
            x,
            v,
            f: NVec3::zeros(),
            m,
            symbol,
        }
    }

    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, fixed for a run
    pub t: i64, // time in seconds
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0 }
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    /// Velocity of the centre of mass
    pub fn com_velocity(&self) -> NVec3 {
        let p: NVec3 = self.bodies.iter().map(Body::momentum).sum();
        p / self.total_mass()
    }
}

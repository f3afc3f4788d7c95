//! Force contributors for the simulator
//!
//! A `ForceSet` zeroes every body's accumulated force and then lets each
//! registered `ForceLaw` add its contribution in place.

use crate::error::{Result, SimError};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3};

/// Collection of force terms
/// Each term implements [`ForceLaw`] and adds into `Body::f`
pub struct ForceSet {
    terms: Vec<Box<dyn ForceLaw + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Force set holding only Newtonian gravity configured from `params`
    pub fn gravity(params: &Parameters) -> Self {
        Self::new().with(NewtonianGravity {
            G: params.G,
            min_separation: params.min_separation,
        })
    }

    /// Add a force term
    pub fn with(mut self, term: impl ForceLaw + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Reset and recompute the force on every body
    pub fn compute_forces(&self, bodies: &mut [Body]) -> Result<()> {
        // Forces never carry over between steps
        for b in bodies.iter_mut() {
            b.f = NVec3::zeros();
        }
        for term in &self.terms {
            term.apply(bodies)?;
        }
        Ok(())
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// A force source operating on a slice of bodies
pub trait ForceLaw {
    fn apply(&self, bodies: &mut [Body]) -> Result<()>;
}

/// Unsoftened Newtonian gravity (direct n^2 sum)
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64,
    pub min_separation: f64,
}

impl ForceLaw for NewtonianGravity {
    fn apply(&self, bodies: &mut [Body]) -> Result<()> {
        let n = bodies.len();

        // Every pair is checked before any force is added, so an error leaves `f` untouched
        for i in 0..n {
            for j in (i + 1)..n {
                let distance = (bodies[j].x - bodies[i].x).norm();
                if distance < self.min_separation {
                    return Err(SimError::PhysicsSingularity {
                        first: i,
                        second: j,
                        distance,
                    });
                }
            }
        }

        // Each unordered pair (i, j) with i < j
        for i in 0..n {
            for j in (i + 1)..n {
                let (bi, bj) = (bodies[i], bodies[j]);

                // r points from i to j, so i is pulled along +r and j along -r
                let r = bj.x - bi.x;
                let distance = r.norm();
                let magnitude = self.G * bi.m * bj.m / (distance * distance);
                let force = magnitude * r / distance;

                // The same vector is added and subtracted, so the pair cancels exactly
                bodies[i].f += force;
                bodies[j].f -= force;
            }
        }
        Ok(())
    }
}

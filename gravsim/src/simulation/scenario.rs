//! Build a validated runtime scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`
//! containing:
//! - numerical parameters (`Parameters`)
//! - initial bodies at t = 0
//! - the initial view (`ViewState`)
//! - the playback step

use tracing::warn;

use crate::configuration::config::{BodyConfig, CameraConfig, ScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::log::TrajectoryLog;
use crate::simulation::params::Parameters;
use crate::simulation::simulator::simulate;
use crate::simulation::states::{Body, NVec3};
use crate::visualization::camera::{Camera, Orientation, ViewState};

/// Fully-initialized run description
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub bodies: Vec<Body>,
    pub view: ViewState,
    pub render_step: i64,
}

fn invalid(msg: impl Into<String>) -> SimError {
    SimError::InvalidConfig(msg.into())
}

fn check_selector(name: &str, index: Option<usize>, n: usize) -> Result<()> {
    match index {
        Some(i) if i >= n => Err(invalid(format!("camera.{name} = {i} but there are only {n} bodies"))),
        _ => Ok(()),
    }
}

fn build_view(cfg: &CameraConfig, n: usize) -> Result<ViewState> {
    if !(cfg.zoom > 0.0) {
        return Err(invalid(format!("camera.zoom must be positive, got {}", cfg.zoom)));
    }
    if !(cfg.view_size > 0.0) {
        return Err(invalid(format!("camera.view_size must be positive, got {}", cfg.view_size)));
    }
    if cfg.pixels_x == 0 || cfg.pixels_y == 0 {
        return Err(invalid("camera pixel counts must be positive"));
    }
    check_selector("focused", cfg.focused, n)?;
    check_selector("motion_relative_to", cfg.motion_relative_to, n)?;

    Ok(ViewState {
        camera: Camera {
            pivot: NVec3::from(cfg.pivot),
            zoom: cfg.zoom,
            view_size: cfg.view_size,
            pixels_x: cfg.pixels_x,
            pixels_y: cfg.pixels_y,
        },
        orientation: Orientation {
            yaw: cfg.yaw,
            pitch: cfg.pitch,
        },
        focused: cfg.focused,
        motion_relative_to: cfg.motion_relative_to,
    })
}

fn build_body(i: usize, bc: &BodyConfig) -> Result<Body> {
    if !(bc.m > 0.0) {
        return Err(invalid(format!("body {i} ({}) must have a positive mass", bc.symbol)));
    }
    Ok(Body::new(bc.symbol, bc.m, NVec3::from(bc.x), NVec3::from(bc.v)))
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = Parameters::from(&cfg.parameters);

        if parameters.delta_time <= 0 {
            return Err(invalid("parameters.delta_time must be positive"));
        }
        if parameters.log_step <= 0 {
            return Err(invalid("parameters.log_step must be positive"));
        }
        if parameters.duration < 0 {
            return Err(invalid("parameters.duration must not be negative"));
        }
        if cfg.render.render_step <= 0 {
            return Err(invalid("render.render_step must be positive"));
        }
        if !parameters.log_aligned() {
            warn!(
                delta_time = parameters.delta_time,
                log_step = parameters.log_step,
                "log_step is not a multiple of delta_time"
            );
        }
        if cfg.bodies.is_empty() {
            return Err(invalid("a scenario needs at least one body"));
        }

        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| build_body(i, bc))
            .collect::<Result<Vec<_>>>()?;

        let view = build_view(&cfg.camera, bodies.len())?;

        Ok(Self {
            parameters,
            bodies,
            view,
            render_step: cfg.render.render_step,
        })
    }

    /// Run the configured duration
    pub fn simulate(&self) -> Result<TrajectoryLog> {
        simulate(&self.bodies, self.parameters.duration, &self.parameters)
    }
}

//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – integration step, log interval, duration, constants
//! - [`RenderConfig`]     – playback settings
//! - [`CameraConfig`]     – initial camera, orientation and body selectors
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! All times are whole seconds, all distances metres.
//!
//! ```yaml
//! parameters:
//!   delta_time: 60          # integration step
//!   log_step: 60            # must be a multiple of delta_time
//!   duration: 604800        # one week
//!   G: 6.67430e-11          # optional
//!   min_separation: 1.0e-3  # optional, coincident-body guard
//!
//! render:
//!   render_step: 86400      # playback advances one day per step
//!
//! camera:
//!   pivot: [0.0, 0.0, 0.0]
//!   zoom: 1.0
//!   view_size: 8.0e8
//!   pixels_x: 32
//!   pixels_y: 40
//!   yaw: 0.0                # degrees
//!   pitch: 0.0              # degrees
//!   focused: 0              # optional body index locked to the view centre
//!   motion_relative_to: 0   # optional body index whose motion is cancelled
//!
//! bodies:
//!   - symbol: E
//!     m: 5.972e24
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!   - symbol: M
//!     m: 7.348e22
//!     x: [3.844e8, 0.0, 0.0]
//!     v: [0.0, 1022.0, 0.0]
//! ```
//!
//! [`Scenario::build_scenario`](crate::simulation::scenario::Scenario::build_scenario)
//! validates this and maps it to runtime types.

use serde::Deserialize;

use crate::simulation::params::{Parameters, DAY};

/// Global numerical and physical parameters
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub delta_time: i64, // integration step in seconds
    pub log_step: i64, // how often the state is recorded
    pub duration: i64, // total simulated time
    #[serde(default)]
    pub G: Option<f64>, // gravitational constant, SI value when omitted
    #[serde(default)]
    pub min_separation: Option<f64>, // distance treated as a collision singularity
}

/// Playback configuration
#[derive(Deserialize, Debug, Clone)]
pub struct RenderConfig {
    #[serde(default = "default_render_step")]
    pub render_step: i64, // seconds between frames during playback
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            render_step: default_render_step(),
        }
    }
}

fn default_render_step() -> i64 {
    DAY
}

/// Initial camera and view selectors
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CameraConfig {
    pub pivot: [f64; 3], // point the camera orbits around
    pub zoom: f64, // magnification, > 0
    pub view_size: f64, // width of the field of view at zoom 1, metres
    pub pixels_x: usize, // grid columns
    pub pixels_y: usize, // grid rows
    pub yaw: f64, // degrees around world Z
    pub pitch: f64, // degrees around the yawed X axis
    pub focused: Option<usize>, // body locked to the view centre
    pub motion_relative_to: Option<usize>, // body whose own motion is cancelled from trails
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pivot: [0.0; 3],
            zoom: 1.0,
            view_size: 8.0e8,
            pixels_x: 32,
            pixels_y: 40,
            yaw: 0.0,
            pitch: 0.0,
            focused: None,
            motion_relative_to: None,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub symbol: char, // glyph drawn at the body's position
    pub m: f64, // mass in kg
    pub x: [f64; 3], // initial position in metres
    pub v: [f64; 3], // initial velocity in m/s
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

impl From<&ParametersConfig> for Parameters {
    fn from(cfg: &ParametersConfig) -> Self {
        let defaults = Parameters::default();
        Parameters {
            delta_time: cfg.delta_time,
            log_step: cfg.log_step,
            duration: cfg.duration,
            G: cfg.G.unwrap_or(defaults.G),
            min_separation: cfg.min_separation.unwrap_or(defaults.min_separation),
        }
    }
}

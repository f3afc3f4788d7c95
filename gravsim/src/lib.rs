pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{Body, System, NVec3};
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT, MINUTE, HOUR, DAY, WEEK};
pub use simulation::forces::{ForceLaw, ForceSet, NewtonianGravity};
pub use simulation::integrator::{integrate, euler_step};
pub use simulation::log::TrajectoryLog;
pub use simulation::simulator::simulate;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, RenderConfig, CameraConfig, BodyConfig, ScenarioConfig};

pub use visualization::rotation::{rotate_z_up, rotate_pitch_then_yaw, unrotate_z_up};
pub use visualization::camera::{Camera, Optics, Orientation, Projection, ViewState};
pub use visualization::renderer::{render_frame, slope_glyph, Cell, Frame, Renderer, Tier, TrailBuffer};
pub use visualization::playback::{Command, Outcome, PanDirection, PlaybackController};

pub use benchmark::benchmark::{bench_simulate, bench_render};

pub mod rotation;
pub mod camera;
pub mod renderer;
pub mod display;
pub mod playback;

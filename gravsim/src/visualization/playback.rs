//! Interactive playback over a finished trajectory log
//!
//! Each cycle renders one frame, reads one line of input and maps it to a
//! [`Command`]. Camera commands are applied and reported as
//! [`Outcome::Continue`]; time navigation and quitting are handed back to the
//! caller.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{Result, SimError};
use crate::simulation::log::TrajectoryLog;
use crate::simulation::states::NVec3;
use crate::visualization::camera::ViewState;
use crate::visualization::display::{body_information, draw_frame};
use crate::visualization::renderer::Renderer;

const SPIN_STEP_DEGREES: f64 = 5.0;
const SPIN_DEFAULT_DELAY: Duration = Duration::from_millis(10);

/// Result of one render/input cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    InputEnded,
    Advance,
    Retreat,
    Continue,
}

/// Camera-relative pan directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
    Toward, // towards the eye, view +Z
    Away,
}

impl PanDirection {
    pub fn vector(self) -> NVec3 {
        match self {
            PanDirection::Up => NVec3::new(0.0, 1.0, 0.0),
            PanDirection::Down => NVec3::new(0.0, -1.0, 0.0),
            PanDirection::Left => NVec3::new(-1.0, 0.0, 0.0),
            PanDirection::Right => NVec3::new(1.0, 0.0, 0.0),
            PanDirection::Toward => NVec3::new(0.0, 0.0, 1.0),
            PanDirection::Away => NVec3::new(0.0, 0.0, -1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Advance,
    Retreat,
    ZoomIn,
    ZoomOut,
    SetZoom(f64), // exponent of two
    Pan(PanDirection, f64), // multiple of the pan resolution
    Yaw(f64), // degrees, 0 resets
    Pitch(f64), // degrees, 0 resets
    Rotate,
    Info,
    Quit,
    Unknown,
}

/// Leading integer of `s`, like C `atoi`: `"12abc"` is 12, `"abc"` is 0
fn leading_int(s: &str) -> f64 {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .take_while(|&(i, c)| c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    s[..end].parse::<i64>().map_or(0.0, |n| n as f64)
}

/// Longest finite leading float of `s`, 0 when there is none
fn leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    (1..=s.len())
        .rev()
        .filter(|&n| s.is_char_boundary(n))
        .find_map(|n| s[..n].parse::<f64>().ok().filter(|v| v.is_finite()))
        .unwrap_or(0.0)
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let input = line.trim();

        match input {
            "" => return Command::Advance,
            "b" => return Command::Retreat,
            "+" => return Command::ZoomIn,
            "-" => return Command::ZoomOut,
            "-1" => return Command::Quit,
            "i" => return Command::Info,
            "rotate" => return Command::Rotate,
            _ => {}
        }

        if let Some(rest) = input.strip_prefix("yaw") {
            return Command::Yaw(leading_int(rest));
        }
        if let Some(rest) = input.strip_prefix("pitch") {
            return Command::Pitch(leading_int(rest));
        }
        if let Some(rest) = input.strip_prefix('z') {
            return Command::SetZoom(leading_float(rest));
        }

        let mut chars = input.chars();
        let direction = match chars.next() {
            Some('w') => PanDirection::Up,
            Some('s') => PanDirection::Down,
            Some('a') => PanDirection::Left,
            Some('d') => PanDirection::Right,
            Some('q') => PanDirection::Toward,
            Some('e') => PanDirection::Away,
            _ => return Command::Unknown,
        };
        let rest = chars.as_str();
        let amount = if rest.is_empty() { 1.0 } else { leading_int(rest) };
        Command::Pan(direction, amount)
    }
}

/// Drives rendering and input for one trajectory log
pub struct PlaybackController<'a, R, W> {
    log: &'a TrajectoryLog,
    view: ViewState,
    renderer: Renderer,
    render_step: i64,
    input: R,
    output: W,
    spin_delay: Duration,
}

impl<'a, R: BufRead, W: Write> PlaybackController<'a, R, W> {
    pub fn new(log: &'a TrajectoryLog, view: ViewState, render_step: i64, input: R, output: W) -> Self {
        Self {
            log,
            view,
            renderer: Renderer::new(),
            render_step,
            input,
            output,
            spin_delay: SPIN_DEFAULT_DELAY,
        }
    }

    /// Pause between frames of the `rotate` animation
    pub fn with_spin_delay(mut self, delay: Duration) -> Self {
        self.spin_delay = delay;
        self
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show(&mut self, time: i64) -> Result<()> {
        let frame = self.renderer.render(self.log, time, &self.view)?;
        self.output.write_all(draw_frame(&frame, &self.view).as_bytes())?;
        Ok(())
    }

    fn prompt(&mut self, time_control: bool) -> Result<()> {
        if time_control {
            write!(self.output, "[ TIME: ENTER > | b < ]   ")?;
        }
        write!(self.output, "[ ZOOM: - | z0 | + ]   [ QUIT: -1 ] ")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Apply a parsed command at `time`
    pub fn apply(&mut self, command: Command, time: i64, time_control: bool) -> Result<Outcome> {
        let cam = &mut self.view.camera;
        match command {
            Command::Advance if time_control => return Ok(Outcome::Advance),
            Command::Retreat if time_control => return Ok(Outcome::Retreat),
            Command::Quit => return Ok(Outcome::Quit),
            Command::ZoomIn => {
                cam.zoom_by(2.0);
            }
            Command::ZoomOut => {
                cam.zoom_by(0.5);
            }
            Command::SetZoom(exponent) => {
                cam.set_zoom(exponent);
            }
            Command::Pan(direction, amount) => {
                let distance = amount * cam.pan_resolution();
                self.view.orientation.pan(cam, direction.vector(), distance);
            }
            Command::Yaw(delta) => self.view.orientation.turn_yaw(delta),
            Command::Pitch(delta) => self.view.orientation.turn_pitch(delta),
            Command::Rotate => self.spin(time)?,
            Command::Info => {
                let text = body_information(self.log.read_row(time)?);
                self.output.write_all(text.as_bytes())?;
                self.output.flush()?;
                if self.read_line()?.is_none() {
                    return Ok(Outcome::InputEnded);
                }
            }
            Command::Advance | Command::Retreat | Command::Unknown => {}
        }
        Ok(Outcome::Continue)
    }

    /// Render, read one line and act on it
    pub fn cycle(&mut self, time: i64, time_control: bool) -> Result<Outcome> {
        self.show(time)?;
        self.prompt(time_control)?;

        let Some(line) = self.read_line()? else {
            return Ok(Outcome::InputEnded);
        };
        let command = Command::parse(&line);
        debug!(?command, time, "playback command");
        self.apply(command, time, time_control)
    }

    /// Cycle at a fixed time until something other than `Continue` happens
    pub fn interact(&mut self, time: i64, time_control: bool) -> Result<Outcome> {
        loop {
            match self.cycle(time, time_control)? {
                Outcome::Continue => continue,
                other => return Ok(other),
            }
        }
    }

    /// Step through `[start, end]` in `render_step` buckets.
    ///
    /// Returns `Quit` or `InputEnded` when the user leaves, or `Advance` when
    /// playback runs past the last bucket.
    pub fn playback(&mut self, start: i64, end: i64) -> Result<Outcome> {
        if self.render_step <= 0 {
            return Err(SimError::InvalidConfig(format!(
                "render_step must be positive, got {}",
                self.render_step
            )));
        }

        let last = end.min(self.log.end_time());
        if last < end {
            warn!(end, last, "playback end is past the simulated range, clamping");
        }

        let mut bucket = start.max(0) / self.render_step;
        let last_bucket = last / self.render_step;
        if bucket > last_bucket {
            warn!(start, last, "playback start is past the simulated range, nothing to show");
        }
        info!(start, end = last, render_step = self.render_step, "starting playback");

        while bucket <= last_bucket {
            match self.interact(bucket * self.render_step, true)? {
                Outcome::Advance => bucket += 1,
                Outcome::Retreat => bucket = (bucket - 1).max(0),
                Outcome::Continue => {}
                outcome @ (Outcome::Quit | Outcome::InputEnded) => return Ok(outcome),
            }
        }
        Ok(Outcome::Advance)
    }

    /// One full turn of yaw in fixed steps, rendering each step
    fn spin(&mut self, time: i64) -> Result<()> {
        let steps = (360.0 / SPIN_STEP_DEGREES) as usize;
        for _ in 0..steps {
            self.show(time)?;
            self.view.orientation.yaw += SPIN_STEP_DEGREES;
            if !self.spin_delay.is_zero() {
                thread::sleep(self.spin_delay);
            }
        }
        Ok(())
    }
}

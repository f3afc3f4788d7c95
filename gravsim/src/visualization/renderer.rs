//! ASCII rasterizer
//!
//! A frame is built in three passes:
//!
//! 1. every body at the requested time is projected to find where its symbol
//!    goes,
//! 2. every logged sample of every body (the whole run, past and future) is
//!    projected into a [`TrailBuffer`]: the depth per pixel is nearest-wins,
//!    the direction glyph per pixel is last-write-wins,
//! 3. cells are composed as body symbol, else trail glyph shaded by depth
//!    relative to the nearest trail sample, else an empty marker.
//!
//! Rendering is a pure function of the log, the time and the [`ViewState`].

use tracing::{debug, trace};

use crate::error::{Result, SimError};
use crate::simulation::log::TrajectoryLog;
use crate::simulation::states::{Body, NVec3};
use crate::visualization::camera::{Orientation, ViewState};

pub const EMPTY_GLYPH: char = '.';

/// Colour class of a rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Body,
    Nearest,
    Near,
    Mid,
    Far,
    Farthest,
    Empty,
}

impl Tier {
    /// Bucket a trail sample by how much farther it is than the nearest one,
    /// as a fraction of the nearest depth
    pub fn from_fraction(fraction: f64) -> Tier {
        if fraction > 1.0 {
            Tier::Farthest
        } else if fraction > 0.50 {
            Tier::Far
        } else if fraction > 0.25 {
            Tier::Mid
        } else if fraction > 0.10 {
            Tier::Near
        } else {
            Tier::Nearest
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub tier: Tier,
}

/// Direction glyph for a view-space velocity
pub fn slope_glyph(v: NVec3) -> char {
    let vx = if v.x.abs() < 1e-6 { 1e-6 } else { v.x };
    let ratio = v.y / vx;

    if ratio > 4.0 {
        '|' // steep up
    } else if ratio > 0.5 {
        '/'
    } else if ratio > -0.5 {
        '='
    } else if ratio > -4.0 {
        '\\'
    } else {
        '|' // steep down
    }
}

/// Dense 2-D grid indexed by `(column, row)`
#[derive(Debug, Clone)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get_mut(y * self.width + x)
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width.max(1))
    }
}

/// Per-pixel trail state for one frame
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    depth: Grid<Option<f64>>, // None = unoccupied
    glyph: Grid<char>,
    closest: Option<f64>,
}

impl TrailBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            depth: Grid::new(width, height, None),
            glyph: Grid::new(width, height, EMPTY_GLYPH),
            closest: None,
        }
    }

    /// Record a sample. The stored depth keeps the nearest sample seen, the
    /// glyph always takes the latest one. Returns false if `(x, y)` is
    /// outside the buffer.
    pub fn plot(&mut self, x: usize, y: usize, depth: f64, glyph: char) -> bool {
        let Some(slot) = self.depth.get_mut(x, y) else {
            return false;
        };
        if slot.map_or(true, |d| depth < d) {
            *slot = Some(depth);
        }
        if let Some(g) = self.glyph.get_mut(x, y) {
            *g = glyph;
        }
        self.closest = Some(self.closest.map_or(depth, |c| c.min(depth)));
        true
    }

    pub fn depth_at(&self, x: usize, y: usize) -> Option<f64> {
        self.depth.get(x, y).copied().flatten()
    }

    pub fn glyph_at(&self, x: usize, y: usize) -> Option<char> {
        self.depth_at(x, y)?;
        self.glyph.get(x, y).copied()
    }

    /// Nearest depth plotted so far
    pub fn closest(&self) -> Option<f64> {
        self.closest
    }

    /// Shade of an occupied pixel
    pub fn tier_at(&self, x: usize, y: usize) -> Option<Tier> {
        let d = self.depth_at(x, y)?;
        let closest = self.closest.unwrap_or(d);
        let fraction = if closest > 1e-9 {
            ((d - closest) / closest).max(0.0)
        } else {
            0.0
        };
        Some(Tier::from_fraction(fraction))
    }
}

/// A composed text frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub time: i64,
    pub cells: Grid<Cell>,
    pub closest: Option<f64>,
}

impl Frame {
    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(x, y).copied()
    }

    /// Glyphs only, one line per row; handy for logs and tests
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for row in self.cells.rows() {
            out.extend(row.iter().map(|c| c.glyph));
            out.push('\n');
        }
        out
    }
}

fn selected<'a>(row: &'a [Body], index: Option<usize>, what: &str) -> Result<Option<&'a Body>> {
    match index {
        None => Ok(None),
        Some(i) => row.get(i).map(Some).ok_or_else(|| {
            SimError::InvalidConfig(format!("{what} body {i} does not exist ({} bodies)", row.len()))
        }),
    }
}

/// Render the system as seen at `time` seconds
pub fn render_frame(log: &TrajectoryLog, time: i64, view: &ViewState) -> Result<Frame> {
    let cam = &view.camera;
    let optics = cam.optics();
    let (w, h) = (cam.pixels_x, cam.pixels_y);

    let now = log.read_row(time)?;
    let focus = selected(now, view.focused, "focused")?.map_or(NVec3::zeros(), |b| b.x);
    let anchor_now = selected(now, view.motion_relative_to, "motion-relative")?.map(|b| b.x);

    // Current positions
    let current: Vec<Option<(usize, usize)>> = now
        .iter()
        .map(|b| view.project(&optics, b.x, focus).and_then(|p| p.pixel(w, h)))
        .collect();

    // Trails over the whole log
    let mut trail = TrailBuffer::new(w, h);
    let mut plotted = 0usize;
    for (t, row) in log.rows() {
        let offset = match (anchor_now, view.motion_relative_to) {
            (Some(anchor), Some(k)) => anchor - row[k].x,
            _ => NVec3::zeros(),
        };

        for b in row {
            let Some(p) = view.project(&optics, b.x + offset, focus) else {
                continue;
            };
            let Some((x, y)) = p.pixel(w, h) else {
                continue;
            };
            let glyph = slope_glyph(view.orientation.rotate(b.v));
            if trail.plot(x, y, p.depth, glyph) {
                plotted += 1;
            }
        }
        trace!(t, "trail row projected");
    }

    // Compose
    let mut cells = Grid::new(w, h, Cell { glyph: EMPTY_GLYPH, tier: Tier::Empty });
    for y in 0..h {
        for x in 0..w {
            let body = current
                .iter()
                .position(|&px| px == Some((x, y)))
                .map(|i| Cell { glyph: now[i].symbol, tier: Tier::Body });

            let cell = body.or_else(|| {
                let glyph = trail.glyph_at(x, y)?;
                let tier = trail.tier_at(x, y)?;
                Some(Cell { glyph, tier })
            });

            if let (Some(cell), Some(slot)) = (cell, cells.get_mut(x, y)) {
                *slot = cell;
            }
        }
    }

    debug!(time, plotted, closest = ?trail.closest(), "frame rendered");
    Ok(Frame {
        time,
        cells,
        closest: trail.closest(),
    })
}

/// Stateful front for [`render_frame`] that remembers the orientation of the
/// previous frame.
///
/// The comparison only drives a `debug!` line when yaw or pitch changes
/// between frames. Every frame is still rendered from scratch.
#[derive(Debug, Default)]
pub struct Renderer {
    previous: Option<Orientation>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `view` is oriented differently from the last rendered frame
    pub fn orientation_changed(&self, view: &ViewState) -> bool {
        self.previous != Some(view.orientation)
    }

    pub fn render(&mut self, log: &TrajectoryLog, time: i64, view: &ViewState) -> Result<Frame> {
        if self.orientation_changed(view) {
            debug!(
                yaw = view.orientation.yaw,
                pitch = view.orientation.pitch,
                "view orientation changed"
            );
            self.previous = Some(view.orientation);
        }
        render_frame(log, time, view)
    }
}

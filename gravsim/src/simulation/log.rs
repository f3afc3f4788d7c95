//! Time-indexed trajectory log
//!
//! One row per `log_step` seconds, each row holding a full copy of every
//! body. Row `k` covers `k * log_step`; lookups floor the requested time onto
//! that grid. The buffer is sized once and is never resized, so after
//! `simulate` returns it can be shared freely between readers.

use crate::error::{Result, SimError};
use crate::simulation::states::{Body, NVec3};

#[derive(Debug, Clone)]
pub struct TrajectoryLog {
    log_step: i64,
    body_count: usize,
    capacity: usize, // number of rows
    data: Vec<Body>, // row-major, `capacity * body_count` entries
    written: Vec<bool>, // rows the stepping loop actually visited
}

impl TrajectoryLog {
    /// Allocate a log covering `0..=duration` seconds.
    ///
    /// Fails with [`SimError::LogAllocation`] when the buffer cannot be
    /// obtained; there is no degraded mode.
    pub fn allocate(duration: i64, log_step: i64, body_count: usize) -> Result<Self> {
        if log_step <= 0 || duration < 0 {
            return Err(SimError::InvalidConfig(format!(
                "cannot size a log for duration {duration} s with log_step {log_step} s"
            )));
        }

        let capacity = (duration / log_step) as usize + 1;
        let alloc_err = || SimError::LogAllocation {
            rows: capacity,
            bodies: body_count,
        };
        let cells = capacity.checked_mul(body_count).ok_or_else(alloc_err)?;

        let mut data = Vec::new();
        data.try_reserve_exact(cells).map_err(|_| alloc_err())?;
        data.resize(cells, Body::new(' ', 0.0, NVec3::zeros(), NVec3::zeros()));

        let mut written = Vec::new();
        written.try_reserve_exact(capacity).map_err(|_| alloc_err())?;
        written.resize(capacity, false);

        Ok(Self {
            log_step,
            body_count,
            capacity,
            data,
            written,
        })
    }

    pub fn log_step(&self) -> i64 {
        self.log_step
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn body_count(&self) -> usize {
        self.body_count
    }

    /// Last time covered by the log
    pub fn end_time(&self) -> i64 {
        (self.capacity as i64 - 1) * self.log_step
    }

    /// Record `bodies` if `time_seconds` falls exactly on the log grid.
    /// Returns whether a row was written.
    pub fn write_if_due(&mut self, bodies: &[Body], time_seconds: i64) -> Result<bool> {
        if time_seconds % self.log_step != 0 {
            return Ok(false);
        }

        let index = self.index_of(time_seconds)?;
        debug_assert_eq!(bodies.len(), self.body_count);

        let start = index * self.body_count;
        self.data[start..start + self.body_count].copy_from_slice(bodies);
        self.written[index] = true;
        Ok(true)
    }

    /// Snapshot of every body at `time_seconds` (floored onto the log grid)
    pub fn read_row(&self, time_seconds: i64) -> Result<&[Body]> {
        let index = self.index_of(time_seconds)?;
        if !self.written[index] {
            return Err(SimError::UnwrittenRow {
                time_seconds,
                index,
            });
        }
        Ok(self.row(index))
    }

    /// Written rows in time order, paired with their timestamps
    pub fn rows(&self) -> impl Iterator<Item = (i64, &[Body])> + '_ {
        (0..self.capacity)
            .filter(|&k| self.written[k])
            .map(|k| (k as i64 * self.log_step, self.row(k)))
    }

    fn row(&self, index: usize) -> &[Body] {
        let start = index * self.body_count;
        &self.data[start..start + self.body_count]
    }

    fn index_of(&self, time_seconds: i64) -> Result<usize> {
        let index = time_seconds.div_euclid(self.log_step);
        if index < 0 || index >= self.capacity as i64 {
            return Err(SimError::OutOfRange {
                time_seconds,
                index,
                capacity: self.capacity,
            });
        }
        Ok(index as usize)
    }
}

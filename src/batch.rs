//! The row loop shared by every batch entry point.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WktKitError};

/// Options for [`BatchRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOptions {
    /// Number of rows between two interrupt checks. `0` disables checking.
    pub interrupt_interval: usize,
}

impl BatchOptions {
    pub fn with_interrupt_interval(self, interrupt_interval: usize) -> Self {
        Self { interrupt_interval }
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            interrupt_interval: 10_000,
        }
    }
}

/// A cooperative cancellation signal, polled between rows.
pub trait Interrupt {
    fn is_interrupted(&self) -> bool;
}

/// Never interrupts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverInterrupt;

impl Interrupt for NeverInterrupt {
    fn is_interrupted(&self) -> bool {
        false
    }
}

impl Interrupt for AtomicBool {
    fn is_interrupted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

static NEVER: NeverInterrupt = NeverInterrupt;

/// Rows seen by a [`BatchRunner`] so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Rows processed.
    pub rows: usize,
    /// Rows whose operation failed and produced a missing value.
    pub failed: usize,
}

/// Iterates rows in order, isolating per-row failures and polling for interrupts.
///
/// An interrupt aborts the whole call with [`WktKitError::Interrupted`]; rows computed before
/// it are discarded.
pub struct BatchRunner<'a> {
    options: BatchOptions,
    interrupt: &'a dyn Interrupt,
    progress: Progress,
}

impl<'a> BatchRunner<'a> {
    pub fn new(options: BatchOptions) -> Self {
        Self {
            options,
            interrupt: &NEVER,
            progress: Progress::default(),
        }
    }

    pub fn with_interrupt(self, interrupt: &'a dyn Interrupt) -> Self {
        Self { interrupt, ..self }
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    fn check_interrupt(&self, row: usize) -> Result<()> {
        let interval = self.options.interrupt_interval;
        if interval > 0 && row % interval == 0 && self.interrupt.is_interrupted() {
            warn!("batch interrupted at row {row}");
            return Err(WktKitError::Interrupted { row });
        }
        Ok(())
    }

    /// Call `op` once per row index.
    pub fn run<T, F>(&mut self, len: usize, mut op: F) -> Result<Vec<T>>
    where
        F: FnMut(usize) -> T,
    {
        debug!("starting batch of {len} rows");
        let mut output = Vec::with_capacity(len);
        for row in 0..len {
            self.check_interrupt(row)?;
            output.push(op(row));
            self.progress.rows += 1;
        }
        debug!("finished batch of {len} rows");
        Ok(output)
    }

    /// Call a fallible `op` once per row index, turning row failures into `None`.
    pub fn try_run<T, F>(&mut self, len: usize, mut op: F) -> Result<Vec<Option<T>>>
    where
        F: FnMut(usize) -> Result<T>,
    {
        let mut failed = 0;
        let output = self.run(len, |row| match op(row) {
            Ok(value) => Some(value),
            Err(err) => {
                trace!("row {row} failed: {err}");
                failed += 1;
                None
            }
        })?;
        self.progress.failed += failed;
        if failed > 0 {
            debug!("{failed} of {len} rows produced missing values");
        }
        Ok(output)
    }
}

use crate::SchedulingError;

use super::{Profit, TimeStep, ID};

/// A weighted time interval `[start, end)` earning `profit` when selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Job {
    id: ID,             // Caller supplied identifier, survives sorting
    start: TimeStep,    // Start of the interval
    end: TimeStep,      // End of the interval, never before `start` once validated
    profit: Profit,     // Profit earned by completing the job
}

impl Job {
    pub fn new(id: ID, start: TimeStep, end: TimeStep, profit: Profit) -> Self {
        Self {
            id,
            start,
            end,
            profit,
        }
    }

    pub fn id(&self) -> ID {
        self.id
    }

    pub fn start(&self) -> TimeStep {
        self.start
    }

    pub fn end(&self) -> TimeStep {
        self.end
    }

    pub fn profit(&self) -> Profit {
        self.profit
    }

    /// Length of the interval, or `None` if it does not fit in a `TimeStep`.
    pub fn duration(&self) -> Option<TimeStep> {
        self.end.checked_sub(self.start)
    }

    /// Checks that the job does not end before it starts.
    pub fn validate(&self) -> Result<(), SchedulingError> {
        if self.start > self.end {
            return Err(SchedulingError::InvalidJob {
                id: self.id,
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Two jobs overlap when they share time strictly inside one of them.
    /// Shared endpoints do not count.
    pub fn overlaps(&self, other: &Job) -> bool {
        self.start < other.end && other.start < self.end
    }
}

use thiserror::Error;

use crate::models::{TimeStep, ID};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    #[error("job {id} is invalid: start {start} is after end {end}")]
    InvalidJob { id: ID, start: TimeStep, end: TimeStep },

    #[error("profit overflow while adding job {id}")]
    ProfitOverflow { id: ID },
}

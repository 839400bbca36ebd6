pub mod constants;
pub mod errors;

pub use constants::{OutcomeCode, TieBreak};
pub use errors::SchedulingError;

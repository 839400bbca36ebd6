mod models;
mod utils;

pub use models::*;
pub use utils::{constants, errors};
pub use utils::{OutcomeCode, SchedulingError, TieBreak};

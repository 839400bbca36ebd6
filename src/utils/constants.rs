use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// Process exit status reported by the command line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeCode {
    Scheduled = 0,
    InvalidInput = 1,
    ReadError = 2,
}

/// Which branch wins when taking and skipping a job yield the same profit.
///
/// Only the returned subset depends on this choice, never the optimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TieBreak {
    #[default]
    #[value(name = "take")]
    PreferTake,
    #[value(name = "skip")]
    PreferSkip,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

mod job;
pub mod jobset;
pub mod optimizer;

pub use job::Job;
pub use jobset::JobSet;
pub use optimizer::{schedule, IntervalOptimizer, OptimizerConfig, ProfitTable, Schedule};

pub type TimeStep = i64;

pub type Profit = i64;

pub type ID = u32;

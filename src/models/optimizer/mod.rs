pub mod optimizer;
pub mod profit_table;
pub mod search;

pub use optimizer::{schedule, IntervalOptimizer, OptimizerConfig, Schedule};
pub use profit_table::ProfitTable;
pub use search::{next_after, next_compatible};

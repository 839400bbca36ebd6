use tracing::debug;

use crate::{Job, JobSet, Profit, SchedulingError, TieBreak, ID};

use super::profit_table::ProfitTable;
use super::search::next_after;

/// Tunables of the optimizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimizerConfig {
    pub tie_break: TieBreak, // Branch kept when taking and skipping a job are worth the same
}

/// Result of a scheduling call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    max_profit: Profit,  // Best total profit
    selected: Vec<Job>,  // Jobs achieving it, ordered by start time
}

impl Schedule {
    pub fn max_profit(&self) -> Profit {
        self.max_profit
    }

    pub fn selected(&self) -> &[Job] {
        &self.selected
    }

    pub fn into_parts(self) -> (Profit, Vec<Job>) {
        (self.max_profit, self.selected)
    }
}

/// Selects a set of pairwise non-overlapping jobs with maximum total profit.
#[derive(Debug, Clone, Default)]
pub struct IntervalOptimizer {
    config: OptimizerConfig,
}

/// Sorted working copy of the input with everything the recurrence needs.
struct Prepared {
    jobs: JobSet,        // Jobs ordered by start time
    next: Vec<usize>,    // First compatible index after each job
    table: ProfitTable,  // Suffix profits
}

impl IntervalOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Computes the best total profit and the jobs achieving it.
    ///
    /// # Arguments
    /// * `jobs` - The candidate jobs, in any order. They are copied, never modified.
    ///
    /// # Returns
    /// * `Result<Schedule, SchedulingError>` - The optimal schedule, or `InvalidJob`
    ///   if some job starts after it ends.
    pub fn schedule(&self, jobs: &[Job]) -> Result<Schedule, SchedulingError> {
        let prepared = Self::prepare(jobs)?;
        let selected = self.reconstruct(&prepared);
        let max_profit = prepared.table.best();

        debug!(
            jobs = jobs.len(),
            selected = selected.len(),
            max_profit,
            tie_break = %self.config.tie_break,
            "schedule computed"
        );

        Ok(Schedule {
            max_profit,
            selected,
        })
    }

    /// Computes only the best total profit.
    pub fn max_profit(&self, jobs: &[Job]) -> Result<Profit, SchedulingError> {
        Ok(Self::prepare(jobs)?.table.best())
    }

    /// Builds the profit table for `jobs` without selecting any of them.
    pub fn profit_table(&self, jobs: &[Job]) -> Result<ProfitTable, SchedulingError> {
        Ok(Self::prepare(jobs)?.table)
    }

    fn prepare(jobs: &[Job]) -> Result<Prepared, SchedulingError> {
        let input = JobSet::new(jobs.to_vec());
        // Nothing is sorted or computed until every job is known to be valid.
        input.validate()?;

        let sorted = input.sorted_by_start();
        let starts = sorted.starts();

        let next: Vec<usize> = sorted
            .iter()
            .enumerate()
            .map(|(i, job)| next_after(&starts, i, job.end()))
            .collect();
        let profits: Vec<Profit> = sorted.iter().map(Job::profit).collect();
        let ids: Vec<ID> = sorted.iter().map(Job::id).collect();

        let table = ProfitTable::fill(&profits, &next, &ids)?;

        Ok(Prepared {
            jobs: sorted,
            next,
            table,
        })
    }

    /// Walks the table from the front, following the branch that produced each slot.
    fn reconstruct(&self, prepared: &Prepared) -> Vec<Job> {
        let Prepared { jobs, next, table } = prepared;
        let mut selected = Vec::new();
        let mut i = 0;

        while let Some(job) = jobs.get(i) {
            // The fill already proved this sum fits.
            let take = job.profit() + table[next[i]];
            let skip = table[i + 1];

            let take_it = match self.config.tie_break {
                TieBreak::PreferTake => take >= skip,
                TieBreak::PreferSkip => take > skip,
            };

            if take_it {
                selected.push(*job);
                i = next[i];
            } else {
                i += 1;
            }
        }

        selected
    }
}

/// Schedules `jobs` with the default configuration.
pub fn schedule(jobs: &[Job]) -> Result<Schedule, SchedulingError> {
    IntervalOptimizer::default().schedule(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs(triples: &[(i64, i64, i64)]) -> Vec<Job> {
        JobSet::from_triples(triples).get_jobs().clone()
    }

    #[test]
    fn test_touching_jobs_are_combined() {
        let result = schedule(&jobs(&[(1, 3, 50), (2, 4, 10), (3, 5, 40)])).unwrap();
        assert_eq!(result.max_profit(), 90);
        assert_eq!(
            result.selected(),
            &[Job::new(1, 1, 3, 50), Job::new(3, 3, 5, 40)]
        );
    }

    #[test]
    fn test_all_overlapping_keeps_most_profitable() {
        let result = schedule(&jobs(&[(1, 2, 100), (1, 2, 19), (1, 2, 27)])).unwrap();
        assert_eq!(result.max_profit(), 100);
        assert_eq!(result.selected(), &[Job::new(1, 1, 2, 100)]);
    }

    #[test]
    fn test_empty_input() {
        let result = schedule(&[]).unwrap();
        assert_eq!(result.max_profit(), 0);
        assert!(result.selected().is_empty());
    }

    #[test]
    fn test_single_job() {
        let result = schedule(&[Job::new(1, 5, 10, 7)]).unwrap();
        assert_eq!(result.into_parts(), (7, vec![Job::new(1, 5, 10, 7)]));
    }

    #[test]
    fn test_invalid_job_prevents_any_result() {
        let input = jobs(&[(1, 3, 50), (5, 3, 10)]);
        assert_eq!(
            schedule(&input),
            Err(SchedulingError::InvalidJob { id: 2, start: 5, end: 3 })
        );
        assert!(IntervalOptimizer::default().max_profit(&input).is_err());
    }

    #[test]
    fn test_input_is_not_modified() {
        let input = jobs(&[(3, 5, 40), (1, 3, 50), (2, 4, 10)]);
        let before = input.clone();
        schedule(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn test_tie_break_prefer_take() {
        // Both jobs overlap and are worth the same.
        let input = jobs(&[(0, 2, 5), (1, 3, 5)]);
        let result = IntervalOptimizer::default().schedule(&input).unwrap();
        assert_eq!(result.max_profit(), 5);
        assert_eq!(result.selected(), &[Job::new(1, 0, 2, 5)]);
    }

    #[test]
    fn test_tie_break_prefer_skip() {
        let input = jobs(&[(0, 2, 5), (1, 3, 5)]);
        let result = IntervalOptimizer::default()
            .with_tie_break(TieBreak::PreferSkip)
            .schedule(&input)
            .unwrap();
        assert_eq!(result.max_profit(), 5);
        assert_eq!(result.selected(), &[Job::new(2, 1, 3, 5)]);
    }

    #[test]
    fn test_prefer_skip_drops_zero_profit_jobs() {
        let input = jobs(&[(0, 1, 0), (1, 2, 4)]);
        let take = IntervalOptimizer::default().schedule(&input).unwrap();
        let skip = IntervalOptimizer::new(OptimizerConfig { tie_break: TieBreak::PreferSkip })
            .schedule(&input)
            .unwrap();
        assert_eq!(take.selected().len(), 2);
        assert_eq!(skip.selected(), &[Job::new(2, 1, 2, 4)]);
        assert_eq!(take.max_profit(), skip.max_profit());
    }

    #[test]
    fn test_zero_length_jobs_share_an_instant() {
        // A longer job starting at 1 listed before a zero-length job at 1.
        let result = schedule(&jobs(&[(1, 3, 2), (1, 1, 5), (1, 1, 4), (0, 1, 3)])).unwrap();
        assert_eq!(result.max_profit(), 14);
        assert_eq!(result.selected().len(), 4);
    }

    #[test]
    fn test_zero_length_job_inside_another_conflicts() {
        let result = schedule(&jobs(&[(0, 4, 10), (2, 2, 3)])).unwrap();
        assert_eq!(result.max_profit(), 10);
        assert_eq!(result.selected(), &[Job::new(1, 0, 4, 10)]);
    }

    #[test]
    fn test_equal_starts_ordered_by_end_in_either_input_order() {
        let short = Job::new(1, 0, 2, 4);
        let long = Job::new(2, 0, 5, 10);
        let middle = Job::new(3, 2, 6, 7);
        let late = Job::new(4, 5, 8, 3);

        let forward = schedule(&[long, short, middle, late]).unwrap();
        let backward = schedule(&[short, long, late, middle]).unwrap();

        assert_eq!(forward.max_profit(), 13);
        assert_eq!(backward.max_profit(), 13);
        assert_eq!(forward.selected(), &[long, late]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_ids_survive_sorting() {
        let input = vec![Job::new(42, 10, 12, 1), Job::new(7, 0, 5, 1)];
        let result = schedule(&input).unwrap();
        let ids: Vec<ID> = result.selected().iter().map(Job::id).collect();
        assert_eq!(ids, vec![7, 42]);
    }

    #[test]
    fn test_profit_table_is_monotonic() {
        let input = jobs(&[(1, 4, 3), (2, 6, 8), (4, 7, 2), (6, 9, 5), (0, 10, 9)]);
        let table = IntervalOptimizer::default().profit_table(&input).unwrap();
        assert_eq!(table.len(), input.len() + 1);
        assert!(table.is_monotonic());
        assert_eq!(table.best(), 13);
    }

    #[test]
    fn test_profit_overflow() {
        let input = vec![Job::new(1, 0, 1, Profit::MAX), Job::new(2, 1, 2, 1)];
        assert_eq!(schedule(&input), Err(SchedulingError::ProfitOverflow { id: 1 }));
    }
}

use std::ops::Index;

use tracing::trace;

use crate::{Profit, SchedulingError, ID};

/// Best achievable profit for every suffix of the sorted jobs.
///
/// Slot `i` holds the best profit using only jobs at sorted positions `i..n`,
/// slot `n` is the base case `0`. The table never decreases towards the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfitTable {
    table: Vec<Profit>,
}

impl ProfitTable {
    /// Fills the table from the last job to the first.
    ///
    /// # Arguments
    /// * `profits` - Profit of each job, in sorted order.
    /// * `next` - For each job, the index of the first job compatible with it.
    ///   Must satisfy `i < next[i] <= n`.
    /// * `ids` - Identifier of each job, used to report overflows.
    ///
    /// # Returns
    /// * `Result<Self, SchedulingError>` - The filled table, or `ProfitOverflow` if
    ///   a running sum does not fit in `Profit`.
    pub fn fill(profits: &[Profit], next: &[usize], ids: &[ID]) -> Result<Self, SchedulingError> {
        let n = profits.len();
        debug_assert_eq!(next.len(), n);
        debug_assert_eq!(ids.len(), n);

        let mut table: Vec<Profit> = vec![0; n + 1];

        // table[i] depends on table[i + 1] and table[next[i]], both after i.
        for i in (0..n).rev() {
            debug_assert!(next[i] > i && next[i] <= n, "next[{i}] = {} out of range", next[i]);

            let take = profits[i]
                .checked_add(table[next[i]])
                .ok_or(SchedulingError::ProfitOverflow { id: ids[i] })?;
            let skip = table[i + 1];
            table[i] = take.max(skip);

            trace!(index = i, take, skip, best = table[i], "profit table slot filled");
        }

        Ok(Self { table })
    }

    /// Best profit over all jobs.
    pub fn best(&self) -> Profit {
        self.table[0]
    }

    pub fn value(&self, index: usize) -> Option<Profit> {
        self.table.get(index).copied()
    }

    /// Number of slots, one more than the number of jobs.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }

    pub fn as_slice(&self) -> &[Profit] {
        &self.table
    }

    /// Checks that including more jobs never lowers the best profit.
    pub fn is_monotonic(&self) -> bool {
        self.table.windows(2).all(|w| w[0] >= w[1])
    }
}

impl Index<usize> for ProfitTable {
    type Output = Profit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.table[index]
    }
}

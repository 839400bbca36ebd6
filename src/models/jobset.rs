use crate::SchedulingError;

use super::{Job, Profit, TimeStep};

/// An owned, ordered collection of jobs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobSet {
    jobs: Vec<Job>,
}

impl JobSet {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn new_empty() -> Self {
        Self { jobs: Vec::new() }
    }

    /// Builds a job set from `(start, end, profit)` triples, numbering the jobs from 1.
    pub fn from_triples(triples: &[(TimeStep, TimeStep, Profit)]) -> Self {
        let jobs = triples
            .iter()
            .zip(1..)
            .map(|(&(start, end, profit), id)| Job::new(id, start, end, profit))
            .collect();
        Self { jobs }
    }

    pub fn add_job(&mut self, job: Job) {
        self.jobs.push(job);
    }

    pub fn get_jobs(&self) -> &Vec<Job> {
        &self.jobs
    }

    pub fn get(&self, index: usize) -> Option<&Job> {
        self.jobs.get(index)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    /// Fails on the first job whose start is after its end.
    pub fn validate(&self) -> Result<(), SchedulingError> {
        self.jobs.iter().try_for_each(Job::validate)
    }

    /// Returns a new set ordered by ascending start time, leaving `self` untouched.
    ///
    /// Equal starts are ordered by ascending end, which places zero-length jobs
    /// before longer jobs beginning at the same instant.
    pub fn sorted_by_start(&self) -> JobSet {
        let mut jobs = self.jobs.clone();
        jobs.sort_by_key(|job| (job.start(), job.end()));
        JobSet { jobs }
    }

    /// Start times, index-aligned with the jobs.
    pub fn starts(&self) -> Vec<TimeStep> {
        self.jobs.iter().map(|job| job.start()).collect()
    }

    /// Sum of every profit, failing with `ProfitOverflow` on the job that overflows it.
    pub fn total_profit(&self) -> Result<Profit, SchedulingError> {
        self.jobs.iter().try_fold(0 as Profit, |total, job| {
            total
                .checked_add(job.profit())
                .ok_or(SchedulingError::ProfitOverflow { id: job.id() })
        })
    }
}

impl From<Vec<Job>> for JobSet {
    fn from(jobs: Vec<Job>) -> Self {
        Self::new(jobs)
    }
}

impl<'a> IntoIterator for &'a JobSet {
    type Item = &'a Job;
    type IntoIter = std::slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}

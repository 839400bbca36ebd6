use std::error::Error;
use std::path::Path;
use std::process;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use csv::ReaderBuilder;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use jobscheduling::{IntervalOptimizer, Job, JobSet, OutcomeCode, Profit, TieBreak, TimeStep};

/// Reads a job file and returns a `JobSet`.
///
/// Each line holds `start, end, profit`. Jobs are numbered from 1 in file order.
pub fn read_job_file<P: AsRef<Path>>(file_path: P) -> Result<JobSet, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(file_path)?;
    let mut jobs = JobSet::new_empty();

    let mut id = 1;

    for result in rdr.records() {
        let record = result?;
        if record.len() != 3 {
            return Err(format!("line {}: expected 3 fields, found {}", id, record.len()).into());
        }

        let start: TimeStep = record[0].parse()?;
        let end: TimeStep = record[1].parse()?;
        let profit: Profit = record[2].parse()?;

        jobs.add_job(Job::new(id, start, end, profit));
        id += 1;
    }

    Ok(jobs)
}

pub fn build_cli_command() -> Command {
    Command::new("Job Scheduler")
        .version("1.0")
        .about("Selects non-overlapping jobs with maximum total profit")

        .arg(Arg::new("job_file")
            .required(true)
            .help("Path to the job file (start, end, profit per line)"))

        .arg(Arg::new("tie_break")
            .short('t')
            .long("tie-break")
            .help("Branch kept when taking and skipping a job are worth the same")
            .value_parser(value_parser!(TieBreak))
            .default_value("take"))

        .arg(Arg::new("selected")
            .short('s')
            .long("selected")
            .action(ArgAction::SetTrue)
            .help("Print the selected jobs"))

        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .help("Enable debug logging"))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> OutcomeCode {
    let Some(job_file) = matches.get_one::<String>("job_file") else {
        return OutcomeCode::InvalidInput;
    };

    let jobs = match read_job_file(job_file) {
        Ok(jobs) => jobs,
        Err(e) => {
            error!(file = %job_file, "cannot read job file: {e}");
            eprintln!("Error reading job file: {}", e);
            return OutcomeCode::ReadError;
        }
    };
    info!(file = %job_file, jobs = jobs.len(), "job file loaded");

    let Some(&tie_break) = matches.get_one::<TieBreak>("tie_break") else {
        error!("no tie-break policy given");
        return OutcomeCode::InvalidInput;
    };
    debug!(%tie_break, "optimizer configured");

    let optimizer = IntervalOptimizer::default().with_tie_break(tie_break);

    let schedule = match optimizer.schedule(jobs.get_jobs()) {
        Ok(schedule) => schedule,
        Err(e) => {
            error!("scheduling failed: {e}");
            eprintln!("Invalid job set: {}", e);
            return OutcomeCode::InvalidInput;
        }
    };

    println!("Maximum Profit = {}", schedule.max_profit());

    if matches.get_flag("selected") {
        for job in schedule.selected() {
            println!(
                "job {}: [{}, {}) profit {}",
                job.id(),
                job.start(),
                job.end(),
                job.profit()
            );
        }
    }

    OutcomeCode::Scheduled
}

fn main() {
    // cargo run <job_file> [-t take|skip] [-s] [-v]
    // example : cargo run jobs.csv -t skip -s
    let matches: ArgMatches = build_cli_command().get_matches();

    init_logging(matches.get_flag("verbose"));

    let outcome = run(&matches);

    process::exit(outcome as i32);
}

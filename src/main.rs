//! `file-sched` command-line front end.
//!
//! ```text
//! file-sched <DIR> [fifo|sjf|priority|all] [--seed N] [--config FILE] [--json]
//! ```

use std::process::ExitCode;

use tracing::error;

use file_sched::telemetry::init_tracing;
use file_sched::{Discipline, Run, SchedulerConfig, SchedulerSession};

const USAGE: &str =
    "usage: file-sched <DIR> [fifo|sjf|priority|all] [--seed N] [--config FILE] [--json]";

#[derive(Debug)]
struct Args {
    dir: String,
    discipline: Option<Discipline>,
    seed: Option<u64>,
    config: Option<String>,
    json: bool,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut dir = None;
    let mut discipline = None;
    let mut seed = None;
    let mut config = None;
    let mut json = false;

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--seed" => {
                let value = argv.next().ok_or("--seed needs a value")?;
                seed = Some(value.parse().map_err(|_| format!("bad seed: {value}"))?);
            }
            "--config" => config = Some(argv.next().ok_or("--config needs a path")?),
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ if dir.is_none() => dir = Some(arg),
            "all" => discipline = None,
            _ => discipline = Some(arg.parse::<Discipline>().map_err(|e| e.to_string())?),
        }
    }

    Ok(Args {
        dir: dir.ok_or(USAGE)?,
        discipline,
        seed,
        config,
        json,
    })
}

fn print_run(run: &Run) {
    println!("== {} ({})", run.discipline, run.discipline.description());
    for warning in &run.warnings {
        println!("warning: {warning}");
    }
    print!("{}", run.timeline);
    println!(
        "makespan = {}, avg waiting = {:.2}, avg turnaround = {:.2}\n",
        run.kpi.makespan, run.kpi.avg_waiting, run.kpi.avg_turnaround
    );
}

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let mut config = match &args.config {
        Some(path) => match SchedulerConfig::from_json_file(path) {
            Ok(c) => c,
            Err(e) => {
                error!(error = %e, "config load failed");
                return ExitCode::FAILURE;
            }
        },
        None => SchedulerConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut session = match SchedulerSession::from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "invalid config");
            return ExitCode::FAILURE;
        }
    };
    session.select_directory(&args.dir);

    let runs = match args.discipline {
        Some(d) => session.run(d).map(|r| vec![r]),
        None => session.run_all(),
    };
    let runs = match runs {
        Ok(runs) => runs,
        Err(e) => {
            error!(error = %e, "scheduling failed");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&runs) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                error!(error = %e, "serialization failed");
                return ExitCode::FAILURE;
            }
        }
    } else {
        runs.iter().for_each(print_run);
    }

    ExitCode::SUCCESS
}

#![deny(unsafe_code)]

//! Drives the diagnostic facility through one named scenario per run so the
//! line format, filtering and fatal termination can be observed from outside
//! the process.

use mimalloc::MiMalloc;

/// High-performance memory allocator for improved allocation throughput.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod scenarios;

use std::process::ExitCode;

use clap::{Arg, ArgAction, Command, value_parser};
use logging::LogConfig;

use scenarios::{Scenario, ScenarioOptions};

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("diaglog-probe")
        .about("Emit diagnostic records for one scenario and exit.")
        .arg(
            Arg::new("scenario")
                .required(true)
                .value_name("SCENARIO")
                .help("Scenario to run.")
                .value_parser(Scenario::NAMES),
        )
        .arg(
            Arg::new("message")
                .long("message")
                .short('m')
                .value_name("TEXT")
                .default_value("probe message")
                .help("Body text for scenarios that log a message.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .value_name("N")
                .default_value("4")
                .help("Worker threads for the concurrent scenario.")
                .value_parser(value_parser!(u32).range(1..=64)),
        )
        .arg(
            Arg::new("lines")
                .long("lines")
                .value_name("N")
                .default_value("50")
                .help("Records per worker for the concurrent scenario.")
                .value_parser(value_parser!(u32).range(1..=10_000)),
        )
}

fn main() -> ExitCode {
    let matches = match clap_command().try_get_matches() {
        Ok(matches) => matches,
        Err(error) => {
            let _ = error.print();
            return ExitCode::from(2);
        }
    };

    let config = match LogConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("diaglog-probe: {error}");
            return ExitCode::from(2);
        }
    };

    let Some(scenario) = matches
        .get_one::<String>("scenario")
        .and_then(|name| Scenario::from_name(name))
    else {
        return ExitCode::from(2);
    };

    let options = ScenarioOptions {
        message: matches
            .get_one::<String>("message")
            .cloned()
            .unwrap_or_default(),
        threads: matches.get_one::<u32>("threads").copied().unwrap_or(4),
        lines: matches.get_one::<u32>("lines").copied().unwrap_or(50),
    };

    scenario.run(config, &options);
    ExitCode::SUCCESS
}

//! Named scenarios exercised by `diaglog-probe`.
//!
//! Scenarios that are expected to terminate print `after` to stdout once the
//! fatal statement returns, which only happens if termination failed.

use logging::{
    LogConfig, LogRecord, Severity, SourceLocation, check, check_eq, check_lt, dcheck, log,
    log_assert, notreached, pcheck, plog, set_last_error_code, vlog,
};

/// `ESRCH` on Linux, the code used by the errno scenarios.
const NO_SUCH_PROCESS: i32 = 3;

/// `ENOENT`, set before the failing `pcheck!`.
const NO_SUCH_FILE: i32 = 2;

/// Parsed command-line options shared by all scenarios.
pub struct ScenarioOptions {
    pub message: String,
    pub threads: u32,
    pub lines: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scenario {
    Info,
    Levels,
    Verbose,
    Location,
    Errno,
    Fatal,
    Check,
    CheckEq,
    CheckLt,
    Pcheck,
    LogAssert,
    Dcheck,
    Dfatal,
    Notreached,
    Concurrent,
    Tracing,
}

impl Scenario {
    pub const NAMES: [&'static str; 16] = [
        "info",
        "levels",
        "verbose",
        "location",
        "errno",
        "fatal",
        "check",
        "check-eq",
        "check-lt",
        "pcheck",
        "log-assert",
        "dcheck",
        "dfatal",
        "notreached",
        "concurrent",
        "tracing",
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        let scenario = match name {
            "info" => Self::Info,
            "levels" => Self::Levels,
            "verbose" => Self::Verbose,
            "location" => Self::Location,
            "errno" => Self::Errno,
            "fatal" => Self::Fatal,
            "check" => Self::Check,
            "check-eq" => Self::CheckEq,
            "check-lt" => Self::CheckLt,
            "pcheck" => Self::Pcheck,
            "log-assert" => Self::LogAssert,
            "dcheck" => Self::Dcheck,
            "dfatal" => Self::Dfatal,
            "notreached" => Self::Notreached,
            "concurrent" => Self::Concurrent,
            "tracing" => Self::Tracing,
            _ => return None,
        };
        Some(scenario)
    }

    pub fn run(self, config: LogConfig, options: &ScenarioOptions) {
        if self == Self::Tracing {
            run_tracing(config, options);
            return;
        }
        logging::init(config);

        let message = options.message.as_str();
        match self {
            Self::Info => log!(Info, "{message}"),
            Self::Levels => {
                log!(Info, "level INFO");
                log!(Warning, "level WARNING");
                log!(Error, "level ERROR");
                log!(ErrorReport, "level ERROR_REPORT");
            }
            Self::Verbose => {
                for level in 1..=3 {
                    vlog!(level, "verbosity {level}");
                }
            }
            Self::Location => {
                LogRecord::open(
                    SourceLocation::new(module_path!(), "/deep/nested/dir/widget.cc", 42),
                    Severity::Info,
                )
                .stream(message);
            }
            Self::Errno => {
                set_last_error_code(NO_SUCH_PROCESS);
                plog!(Error, "{message}");
            }
            Self::Fatal => {
                log!(Fatal, "{message}");
                println!("after");
            }
            Self::Check => {
                let ready = false;
                check!(ready, "{message}");
                println!("after");
            }
            Self::CheckEq => {
                let a = 3;
                let b = 4;
                check_eq!(a, b);
                println!("after");
            }
            Self::CheckLt => {
                let used = 9;
                let limit = 4;
                check_lt!(used, limit, "quota exceeded");
                println!("after");
            }
            Self::Pcheck => {
                set_last_error_code(NO_SUCH_FILE);
                pcheck!(message.is_empty(), "probe");
                println!("after");
            }
            Self::LogAssert => {
                let attached = false;
                log_assert!(attached);
                println!("after");
            }
            Self::Dcheck => {
                dcheck!(message.is_empty());
                println!("survived");
            }
            Self::Dfatal => {
                log!(DFatal, "{message}");
                println!("survived");
            }
            Self::Notreached => {
                notreached!();
                println!("survived");
            }
            Self::Concurrent => run_concurrent(options),
            Self::Tracing => {}
        }
    }
}

fn run_concurrent(options: &ScenarioOptions) {
    let padding = "x".repeat(120);
    std::thread::scope(|scope| {
        for worker in 0..options.threads {
            let padding = padding.as_str();
            scope.spawn(move || {
                for line in 0..options.lines {
                    log!(Info, "worker={worker} line={line} {padding}");
                }
            });
        }
    });
}

#[cfg(feature = "tracing")]
fn run_tracing(config: LogConfig, options: &ScenarioOptions) {
    logging::init_tracing(config);
    tracing::info!(scenario = "tracing", "{}", options.message);
    tracing::warn!("tracing warning");
    tracing::debug!("tracing debug");
    tracing::trace!("tracing trace");
}

#[cfg(not(feature = "tracing"))]
fn run_tracing(config: LogConfig, options: &ScenarioOptions) {
    logging::init(config);
    log!(Warning, "tracing support not compiled in: {}", options.message);
}

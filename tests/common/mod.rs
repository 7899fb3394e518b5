//! Shared helpers for running `diaglog-probe` and parsing its stderr lines.

#![allow(dead_code)]

use std::process::Output;

use assert_cmd::Command;

pub use logging::{MAX_VERBOSITY_ENV, MIN_SEVERITY_ENV};

/// Runs the probe with a clean threshold environment plus `envs`.
pub fn run_probe(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_diaglog-probe"));
    command
        .env_remove(MIN_SEVERITY_ENV)
        .env_remove(MAX_VERBOSITY_ENV)
        .args(args);
    for (key, value) in envs {
        command.env(key, value);
    }
    command
        .output()
        .unwrap_or_else(|error| panic!("failed to run diaglog-probe: {error}"))
}

pub fn stderr_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stderr.clone())
        .expect("stderr is UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

/// One line split along `[pid:tid:date,time.micros:SEVERITY] file:line] body`.
#[derive(Debug)]
pub struct ParsedLine {
    pub pid: u32,
    pub tid: u64,
    pub severity: String,
    pub file: String,
    pub line: u32,
    pub body: String,
}

/// Parses a record line, panicking with the line when it is malformed.
pub fn parse_line(line: &str) -> ParsedLine {
    let rest = line.strip_prefix('[').unwrap_or_else(|| malformed(line));
    let (header, rest) = rest.split_once("] ").unwrap_or_else(|| malformed(line));
    let (location, body) = rest.split_once("] ").unwrap_or_else(|| malformed(line));

    let fields: Vec<&str> = header.split(':').collect();
    if fields.len() != 4 {
        malformed(line);
    }
    let pid = fields[0].parse().unwrap_or_else(|_| malformed(line));
    let tid = fields[1].parse().unwrap_or_else(|_| malformed(line));
    if !is_timestamp(fields[2]) {
        malformed(line);
    }

    let (file, line_number) = location.rsplit_once(':').unwrap_or_else(|| malformed(line));
    let line_number = line_number.parse().unwrap_or_else(|_| malformed(line));

    ParsedLine {
        pid,
        tid,
        severity: fields[3].to_owned(),
        file: file.to_owned(),
        line: line_number,
        body: body.to_owned(),
    }
}

fn malformed(line: &str) -> ! {
    panic!("malformed record line: {line:?}")
}

/// `YYYYMMDD,HHMMSS.micros` with every digit group at its fixed width.
fn is_timestamp(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 22
        && bytes[8] == b','
        && bytes[15] == b'.'
        && bytes
            .iter()
            .enumerate()
            .all(|(index, byte)| index == 8 || index == 15 || byte.is_ascii_digit())
}

/// Reports whether the process ended through a signal rather than an exit code.
pub fn terminated_by_signal(output: &Output) -> bool {
    #[cfg(unix)]
    {
        output.status.code().is_none()
    }
    #[cfg(not(unix))]
    {
        !output.status.success()
    }
}

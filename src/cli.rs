use std::ffi::OsString;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, ValueHint};

use crate::config::{Config, DEFAULT_RATIO, DEFAULT_THRESHOLD};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "token-lint",
    version,
    about = "Flag source files whose estimated token count exceeds a limit",
    long_about = None,
    after_help = "PATH forms: FILE, DIR (non-recursive), DIR/... (recursive), ./... (current dir, recursive).\n\
                  Exit status is 1 when any file exceeds the threshold."
)]
pub struct Args {
    /// Files or directories to check (defaults to ./...)
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub paths: Vec<String>,

    /// Maximum tokens before a file is reported
    #[arg(long = "threshold", value_name = "N", default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: i64,

    /// Tokens per character ratio
    #[arg(long = "ratio", value_name = "FLOAT", default_value_t = DEFAULT_RATIO, allow_negative_numbers = true)]
    pub ratio: f64,

    /// Show token counts for all files, not just violations
    #[arg(long = "all", action = ArgAction::SetTrue)]
    pub all: bool,

    /// Source-file extension to scan for (no dot)
    #[arg(long = "ext", value_name = "EXT", default_value = "go")]
    pub extension: String,

    /// Output JSON instead of text
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "csv")]
    pub json: bool,

    /// Output CSV instead of text
    #[arg(long = "csv", action = ArgAction::SetTrue, conflicts_with = "json")]
    pub csv: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI on the process arguments and returns the exit code.
///
/// # Errors
/// Returns an error for invalid settings or when path expansion fails.
pub fn run() -> Result<i32> {
    run_from(std::env::args_os())
}

/// Runs the CLI on `argv` (program name first) and returns the exit code.
///
/// # Errors
/// Returns an error for invalid settings or when path expansion fails.
pub fn run_from<I, T>(argv: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = match Args::try_parse_from(normalize_flags(argv)) {
        Ok(args) => args,
        Err(err) => {
            // help and version go to stdout and are not failures
            err.print().ok();
            return Ok(i32::from(err.use_stderr()));
        }
    };
    let config = Config::from_args(&args)?;
    run_impl::run_with_config(&config)
}

/// Rewrites single-dash long flags (`-threshold 10`, `-all`) to their
/// double-dash form so both spellings are accepted.
///
/// Flag parsing stops at the first path: everything from there on is passed
/// after a `--`, so `token-lint main.go -all` checks a file named `-all`.
fn normalize_flags<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cmd = Args::command();
    // (long name, takes a value)
    let longs: Vec<(&str, bool)> = cmd
        .get_arguments()
        .filter_map(|a| Some((a.get_long()?, a.get_action().takes_values())))
        .chain([("help", false), ("version", false)])
        .collect();

    let mut out = Vec::new();
    let mut passthrough = false;
    let mut expect_value = false;
    for (i, arg) in argv.into_iter().map(Into::into).enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let Some(s) = arg.to_str().filter(|s| s.len() > 1 && s.starts_with('-')) else {
            // first path: no more flags
            passthrough = true;
            out.push(OsString::from("--"));
            out.push(arg);
            continue;
        };
        let flag = s.trim_start_matches('-');
        let (name, inline_value) = flag.split_once('=').map_or((flag, false), |(n, _)| (n, true));
        match longs.iter().find(|(long, _)| *long == name) {
            Some(&(_, takes_value)) => {
                expect_value = takes_value && !inline_value;
                out.push(OsString::from(format!("--{flag}")));
            }
            None => out.push(arg),
        }
    }
    out
}

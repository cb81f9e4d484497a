use anyhow::{Result, bail};

use crate::cli::Args;

pub const DEFAULT_THRESHOLD: i64 = 25_000;
pub const DEFAULT_RATIO: f64 = 0.65;
/// Scanned when no paths are given.
pub const DEFAULT_PATH: &str = "./...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub threshold: usize,
    pub ratio: f64,
    pub show_all: bool,
    pub paths: Vec<String>,
    pub extension: String,
    pub format: OutputFormat,
    pub verbose: u8,
}

impl Config {
    /// Builds a config from parsed arguments.
    ///
    /// # Errors
    /// Returns an error if the ratio or the threshold is not positive.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn from_args(args: &Args) -> Result<Self> {
        // also rejects NaN
        if !(args.ratio > 0.0) {
            bail!("ratio must be positive");
        }
        let threshold = match usize::try_from(args.threshold) {
            Ok(t) if t > 0 => t,
            _ => bail!("threshold must be positive"),
        };

        let paths = if args.paths.is_empty() {
            vec![DEFAULT_PATH.to_string()]
        } else {
            args.paths.clone()
        };

        let format = if args.json {
            OutputFormat::Json
        } else if args.csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Text
        };

        Ok(Self {
            threshold,
            ratio: args.ratio,
            show_all: args.all,
            paths,
            extension: args.extension.trim_start_matches('.').to_string(),
            format,
            verbose: args.verbose,
        })
    }
}

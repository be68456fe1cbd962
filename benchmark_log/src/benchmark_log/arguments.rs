//!
//! The benchmark log arguments.
//!

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

///
/// The benchmark log arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output of warnings.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The benchmark log commands.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Appends entries produced by a benchmark run to the log.
    Append {
        /// The benchmark log file.
        log_path: PathBuf,

        /// Entry files, each with an entry or an array of entries.
        /// If only one path is provided and it is a directory, all JSON files inside are used.
        #[arg(long = "entry", required = true)]
        entry_paths: Vec<PathBuf>,

        /// The suite to append to.
        #[arg(long, default_value = benchmark_log::Document::DEFAULT_SUITE)]
        suite: String,

        /// Rejects entries older than the last entry of the suite.
        #[arg(long)]
        strict: bool,

        /// Sets `lastUpdate` to the current time instead of the entry date.
        #[arg(long)]
        stamp_now: bool,

        /// Repository URL, used to create the log if it does not exist.
        #[arg(long)]
        repo_url: Option<String>,

        /// Log layout: `json` or `script`. Defaults to the layout of the existing log.
        #[arg(long)]
        layout: Option<benchmark_log::Layout>,
    },

    /// Prints the entries of a suite as JSON.
    Read {
        /// The benchmark log file.
        log_path: PathBuf,

        /// The suite to read.
        #[arg(long, default_value = benchmark_log::Document::DEFAULT_SUITE)]
        suite: String,

        /// The output file. If unset, the result is printed to `stdout`.
        #[arg(short, long)]
        output_path: Option<PathBuf>,
    },

    /// Checks the invariants of the log.
    Validate {
        /// The benchmark log file.
        log_path: PathBuf,
    },

    /// Exports the per-metric series of a suite.
    Series {
        /// The benchmark log file.
        log_path: PathBuf,

        /// The suite to export.
        #[arg(long, default_value = benchmark_log::Document::DEFAULT_SUITE)]
        suite: String,

        /// Only metrics with names matching the regular expression are exported.
        #[arg(long)]
        filter: Option<regex::Regex>,

        /// Series output format: `json`, `csv`, or `xlsx`.
        #[arg(long, default_value_t = benchmark_log::OutputFormat::Json)]
        output_format: benchmark_log::OutputFormat,

        /// The output file. If unset, text formats are printed to `stdout`.
        #[arg(short, long)]
        output_path: Option<PathBuf>,
    },

    /// Compares the latest run of a suite against the previous one.
    Compare {
        /// The benchmark log file.
        log_path: PathBuf,

        /// The suite to compare.
        #[arg(long, default_value = benchmark_log::Document::DEFAULT_SUITE)]
        suite: String,

        /// Only metrics with names matching the regular expression are compared.
        #[arg(long)]
        filter: Option<regex::Regex>,

        /// The regression ratio raising an alert, e.g. `2.0` for 200%.
        #[arg(long, default_value_t = benchmark_log::Comparison::DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Exits with an error if any metric raises an alert.
        #[arg(long)]
        fail_on_alert: bool,

        /// The output file. If unset, the result is printed to `stdout`.
        #[arg(short, long)]
        output_path: Option<PathBuf>,
    },
}

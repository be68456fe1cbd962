//!
//! The benchmark log binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    init_logging(arguments.quiet);

    match arguments.command {
        Command::Append {
            log_path,
            entry_paths,
            suite,
            strict,
            stamp_now,
            repo_url,
            layout,
        } => append(
            log_path.as_path(),
            entry_paths,
            suite.as_str(),
            benchmark_log::AppendOptions::new(strict, stamp_now),
            repo_url,
            layout,
        ),
        Command::Read {
            log_path,
            suite,
            output_path,
        } => read(log_path.as_path(), suite.as_str(), output_path.as_deref()),
        Command::Validate { log_path } => validate(log_path.as_path()),
        Command::Series {
            log_path,
            suite,
            filter,
            output_format,
            output_path,
        } => series(
            log_path.as_path(),
            suite,
            filter,
            output_format,
            output_path.as_deref(),
        ),
        Command::Compare {
            log_path,
            suite,
            filter,
            threshold,
            fail_on_alert,
            output_path,
        } => compare(
            log_path.as_path(),
            suite.as_str(),
            filter,
            threshold,
            fail_on_alert,
            output_path.as_deref(),
        ),
    }
}

///
/// Initializes logging to `stderr`, configurable with `RUST_LOG`.
///
fn init_logging(quiet: bool) {
    let default_level = if quiet { "error" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

///
/// Appends entries to the log, creating it if it is absent and a repository URL is provided.
///
/// The log is rewritten only if all entries are appended successfully.
///
pub(crate) fn append(
    log_path: &Path,
    entry_paths: Vec<PathBuf>,
    suite: &str,
    options: benchmark_log::AppendOptions,
    repo_url: Option<String>,
    layout: Option<benchmark_log::Layout>,
) -> anyhow::Result<()> {
    let benchmark_log::Input {
        mut document,
        layout: existing_layout,
    } = if log_path.exists() {
        benchmark_log::Input::try_from(log_path)?
    } else {
        let Some(repo_url) = repo_url else {
            anyhow::bail!(
                "Benchmark log {log_path:?} does not exist. Use `--repo-url` to create it."
            );
        };
        tracing::info!(path = %log_path.display(), "creating a new benchmark log");
        benchmark_log::Input {
            document: benchmark_log::Document::new(repo_url),
            layout: benchmark_log::Layout::from_extension(log_path),
        }
    };
    let layout = match layout {
        Some(benchmark_log::Layout::Script { .. })
            if matches!(existing_layout, benchmark_log::Layout::Script { .. }) =>
        {
            existing_layout
        }
        Some(layout) => layout,
        None => existing_layout,
    };

    let mut appended = 0;
    for path in benchmark_log::EntryReport::resolve_paths(entry_paths)?.into_iter() {
        match benchmark_log::EntryReport::try_from(path.as_path()) {
            Ok(report) => {
                for entry in report.into_entries().into_iter() {
                    document.append_with(suite, entry, options)?;
                    appended += 1;
                }
            }
            Err(benchmark_log::InputError::EmptyFile { path }) => {
                tracing::warn!("Entry file {path:?} is empty and will be skipped.");
                continue;
            }
            Err(error) => Err(error)?,
        }
    }
    if appended == 0 {
        tracing::warn!("No entries to append, the log is left untouched.");
        return Ok(());
    }

    let output = benchmark_log::Output::try_from((document, layout))?;
    output.write_to_file(log_path)?;
    tracing::info!(suite, appended, path = %log_path.display(), "benchmark log updated");

    Ok(())
}

///
/// Writes the entries of a suite as JSON.
///
pub(crate) fn read(log_path: &Path, suite: &str, output_path: Option<&Path>) -> anyhow::Result<()> {
    let input = benchmark_log::Input::try_from(log_path)?;
    let entries = input.document.read(suite)?;

    let json = benchmark_log::output::json::Json::new(entries)?;
    benchmark_log::Output::from(json).write(output_path)
}

///
/// Prints the violated invariants and fails if any of them is an error.
///
pub(crate) fn validate(log_path: &Path) -> anyhow::Result<()> {
    let input = benchmark_log::Input::try_from(log_path)?;
    let violations = benchmark_log::validate(&input.document);

    for violation in violations.iter() {
        match violation.severity() {
            benchmark_log::Severity::Error => println!("{} {violation}", "error:".bright_red()),
            benchmark_log::Severity::Warning => println!("{} {violation}", "warning:".yellow()),
        }
    }

    let errors = benchmark_log::validation::error_count(violations.as_slice());
    if errors > 0 {
        anyhow::bail!(
            "Benchmark log {log_path:?} violates {errors} invariant(s) in {} entries",
            input.document.len()
        );
    }
    println!(
        "{} {} entries in {} suite(s), {} warning(s)",
        "ok:".green(),
        input.document.len(),
        input.document.entries.len(),
        violations.len()
    );
    Ok(())
}

///
/// Exports the per-metric series of a suite.
///
pub(crate) fn series(
    log_path: &Path,
    suite: String,
    filter: Option<regex::Regex>,
    output_format: benchmark_log::OutputFormat,
    output_path: Option<&Path>,
) -> anyhow::Result<()> {
    if output_format == benchmark_log::OutputFormat::Xlsx && output_path.is_none() {
        anyhow::bail!(
            "The `xlsx` format requires an output file. Use `--output-path` to specify it."
        );
    }

    let input = benchmark_log::Input::try_from(log_path)?;
    let entries = input.document.read(suite.as_str())?;
    let series = benchmark_log::Series::collect(entries, filter.as_ref());
    if series.is_empty() {
        tracing::warn!(suite = suite.as_str(), "no metrics to export");
    }

    let output = benchmark_log::Output::try_from((suite, series, output_format))?;
    output.write(output_path)
}

///
/// Compares the latest run of a suite against the previous one.
///
pub(crate) fn compare(
    log_path: &Path,
    suite: &str,
    filter: Option<regex::Regex>,
    threshold: f64,
    fail_on_alert: bool,
    output_path: Option<&Path>,
) -> anyhow::Result<()> {
    let input = benchmark_log::Input::try_from(log_path)?;
    let entries = input.document.read(suite)?;

    let Some(mut comparison) = benchmark_log::Comparison::latest(entries) else {
        tracing::warn!(suite, "there are no two distinct commits to compare");
        return Ok(());
    };
    if let Some(filter) = filter.as_ref() {
        comparison.retain_matching(filter);
    }
    comparison.sort_worst();

    match output_path {
        Some(output_path) => {
            colored::control::set_override(false);
            let mut report = Vec::new();
            comparison.write_all(&mut report, suite, threshold)?;
            benchmark_log::Output::SingleFile(String::from_utf8(report)?)
                .write_to_file(output_path)?;
        }
        None => {
            let mut stdout = std::io::stdout();
            comparison.write_all(&mut stdout, suite, threshold)?;
            writeln!(stdout)?;
        }
    }

    let alerts = comparison.alerts(threshold);
    if fail_on_alert && !alerts.is_empty() {
        anyhow::bail!(
            "{} metric(s) regressed beyond the threshold of {:.0}%: {}",
            alerts.len(),
            threshold * 100.0,
            alerts
                .iter()
                .map(|change| change.name.as_str())
                .collect::<Vec<&str>>()
                .join(", ")
        );
    }

    Ok(())
}

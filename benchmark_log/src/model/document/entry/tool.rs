//!
//! The benchmark comparison tool.
//!

use std::str::FromStr;

///
/// The benchmark comparison tool, which defines how measurements of a run are judged.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    /// `cargo bench` output.
    Cargo,
    /// `go test -bench` output.
    Go,
    /// Benchmark.js output.
    Benchmarkjs,
    /// Luau benchmark output.
    Benchmarkluau,
    /// pytest-benchmark output.
    Pytest,
    /// Google C++ benchmark framework output.
    Googlecpp,
    /// Catch2 benchmark output.
    Catch2,
    /// BenchmarkTools.jl output.
    Julia,
    /// Java Microbenchmark Harness output.
    Jmh,
    /// BenchmarkDotNet output.
    Benchmarkdotnet,
    /// Custom measurements where a higher value is an improvement.
    CustomBiggerIsBetter,
    /// Custom measurements where a lower value is an improvement.
    CustomSmallerIsBetter,
}

///
/// The direction of improvement of a measurement.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Throughput-like values.
    BiggerIsBetter,
    /// Time-like values.
    SmallerIsBetter,
}

impl Tool {
    /// All supported tools.
    pub const ALL: [Self; 12] = [
        Self::Cargo,
        Self::Go,
        Self::Benchmarkjs,
        Self::Benchmarkluau,
        Self::Pytest,
        Self::Googlecpp,
        Self::Catch2,
        Self::Julia,
        Self::Jmh,
        Self::Benchmarkdotnet,
        Self::CustomBiggerIsBetter,
        Self::CustomSmallerIsBetter,
    ];

    ///
    /// Returns the direction of improvement for the tool's measurements.
    ///
    pub fn direction(&self) -> Direction {
        match self {
            Self::CustomBiggerIsBetter | Self::Benchmarkjs => Direction::BiggerIsBetter,
            _ => Direction::SmallerIsBetter,
        }
    }
}

impl FromStr for Tool {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.to_string() == string)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown tool `{string}`. Supported tools: {}",
                    Self::ALL
                        .into_iter()
                        .map(|tool| tool.to_string())
                        .collect::<Vec<String>>()
                        .join(", ")
                )
            })
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cargo => write!(f, "cargo"),
            Self::Go => write!(f, "go"),
            Self::Benchmarkjs => write!(f, "benchmarkjs"),
            Self::Benchmarkluau => write!(f, "benchmarkluau"),
            Self::Pytest => write!(f, "pytest"),
            Self::Googlecpp => write!(f, "googlecpp"),
            Self::Catch2 => write!(f, "catch2"),
            Self::Julia => write!(f, "julia"),
            Self::Jmh => write!(f, "jmh"),
            Self::Benchmarkdotnet => write!(f, "benchmarkdotnet"),
            Self::CustomBiggerIsBetter => write!(f, "customBiggerIsBetter"),
            Self::CustomSmallerIsBetter => write!(f, "customSmallerIsBetter"),
        }
    }
}

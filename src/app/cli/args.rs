//! Command line arguments for the simulation runner

use clap::Parser;
use std::path::PathBuf;

use crate::core::validation::parse_positive;

/// Arguments controlling one simulation session.
///
/// Worker counts and sizes must be strictly positive; the parsers reject
/// out-of-range values instead of clamping them.
#[derive(Parser, Debug, Clone)]
#[command(name = "prioflow")]
#[command(about = "Priority-ordered bounded-buffer producer/consumer simulator")]
#[command(version)]
pub struct Args {
    /// Number of producer workers
    #[arg(short = 'p', long = "producers", value_name = "N", default_value_t = 2, value_parser = parse_positive_usize)]
    pub producers: usize,

    /// Number of consumer workers
    #[arg(short = 'c', long = "consumers", value_name = "N", default_value_t = 3, value_parser = parse_positive_usize)]
    pub consumers: usize,

    /// Items each producer emits before finishing
    #[arg(short = 'i', long = "items", value_name = "COUNT", default_value_t = 20, value_parser = parse_positive)]
    pub items_per_producer: u64,

    /// Buffer capacity
    #[arg(short = 'b', long = "buffer-size", value_name = "SIZE", default_value_t = 10, value_parser = parse_positive_usize)]
    pub buffer_size: usize,

    /// Interval between statistics reports, in milliseconds
    #[arg(long = "report-interval-ms", value_name = "MS", default_value_t = 500, value_parser = parse_positive)]
    pub report_interval_ms: u64,

    /// Manually inject an item at startup, as PRIORITY:PAYLOAD (repeatable)
    #[arg(long = "inject", value_name = "PRIORITY:PAYLOAD")]
    pub inject: Vec<String>,

    /// Log level
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: String,

    /// Log file path (logs to stderr when omitted)
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

fn parse_positive_usize(value: &str) -> Result<usize, String> {
    parse_positive(value).map(|n| n as usize)
}

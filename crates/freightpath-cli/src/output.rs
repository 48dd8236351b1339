//! Output formatting for command results.
//!
//! Text goes to stdout for people; JSON goes to stdout for scripts. Logs are
//! written to stderr by the tracing subscriber so the two never mix.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use freightpath_lib::{IndexStats, ProviderSummary, RouteReport};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a route report in the requested format.
pub fn print_report(report: &RouteReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_stdout(&report.render_text()),
        OutputFormat::Json => render_json(report),
    }
}

pub fn print_stats(stats: &IndexStats, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_stdout(&format!(
            "Network: {} postcodes, {} providers, {} zones, {} routes\n",
            stats.postcodes, stats.providers, stats.zones, stats.routes
        )),
        OutputFormat::Json => render_json(stats),
    }
}

pub fn print_providers(summaries: &[ProviderSummary], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_stdout(&render_provider_table(summaries)),
        OutputFormat::Json => render_json(summaries),
    }
}

/// Fixed-width provider comparison table.
pub fn render_provider_table(summaries: &[ProviderSummary]) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{:<10} {:>5} {:>6} {:>11} {:>10} {:>9}",
        "PROVIDER", "ZONES", "ROUTES", "RELIABILITY", "MIN CHARGE", "AVG BASE"
    );
    for summary in summaries {
        let _ = writeln!(
            buffer,
            "{:<10} {:>5} {:>6} {:>11.2} {:>10.2} {:>9.2}",
            summary.provider_id,
            summary.zones,
            summary.routes,
            summary.avg_reliability,
            summary.min_charge,
            summary.avg_base_charge
        );
    }
    buffer
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    writeln!(stdout)
}

fn write_stdout(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

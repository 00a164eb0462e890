//! CLI argument definitions for stockdash.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lookup` | Fetch a ticker from the API and render its metrics |
//! | `render` | Render a saved API response file |
//! | `chart` | Print a revenue / net income / free cash flow series |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--lang` | `uk` | Label language (en, uk) |
//! | `--format` | `table` | Output format (table, json) |
//! | `--all` | `false` | Show secondary metrics too |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | env / `5000` | Request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! STOCKDASH_API_TOKEN=... stockdash lookup AAPL --lang en
//! stockdash render saved/aapl.json --all --format json --pretty
//! stockdash chart statements.json --series free-cash-flow --period quarterly
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use stockdash_core::{ChartSeries, Language, ReportPeriod};

/// Stock metric dashboard for the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "stockdash",
    author,
    version,
    about = "Look up a stock ticker and view formatted financial metrics",
    long_about = "stockdash fetches a ticker's metrics from the stocks API and renders them \
as ordered, bilingual sections.\n\
\n\
The API token is read from STOCKDASH_API_TOKEN; the base URL and timeout can be \
overridden with STOCKDASH_API_BASE_URL and STOCKDASH_TIMEOUT_MS. Set RUST_LOG=debug \
for request diagnostics on stderr."
)]
pub struct Cli {
    /// Language for labels and section titles.
    #[arg(long, global = true, value_enum, default_value_t = LangArg::Uk)]
    pub lang: LangArg,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Show secondary metrics in addition to primary ones.
    #[arg(long, global = true, default_value_t = false)]
    pub all: bool,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout in milliseconds; overrides STOCKDASH_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LangArg {
    En,
    Uk,
}

impl From<LangArg> for Language {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Language::En,
            LangArg::Uk => Language::Uk,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a ticker from the API and render its metrics.
    Lookup(LookupArgs),
    /// Render a saved API response (JSON) without touching the network.
    Render(RenderArgs),
    /// Print a chart series from a saved financial statements file.
    Chart(ChartArgs),
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Ticker symbol, e.g. AAPL.
    pub ticker: String,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Path to a saved `/ticker` response.
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Path to a saved financial statements payload.
    pub file: PathBuf,

    /// Series to derive.
    #[arg(long, value_enum, default_value_t = SeriesArg::Revenue)]
    pub series: SeriesArg,

    /// Reporting cadence.
    #[arg(long, value_enum, default_value_t = PeriodArg::Annual)]
    pub period: PeriodArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeriesArg {
    Revenue,
    NetIncome,
    FreeCashFlow,
}

impl From<SeriesArg> for ChartSeries {
    fn from(value: SeriesArg) -> Self {
        match value {
            SeriesArg::Revenue => ChartSeries::Revenue,
            SeriesArg::NetIncome => ChartSeries::NetIncome,
            SeriesArg::FreeCashFlow => ChartSeries::FreeCashFlow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    Annual,
    Quarterly,
}

impl From<PeriodArg> for ReportPeriod {
    fn from(value: PeriodArg) -> Self {
        match value {
            PeriodArg::Annual => ReportPeriod::Annual,
            PeriodArg::Quarterly => ReportPeriod::Quarterly,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["stockdash", "lookup", "aapl", "--lang", "en", "--all"])
            .expect("parse");
        assert_eq!(Language::from(cli.lang), Language::En);
        assert!(cli.all);
        assert!(matches!(cli.command, Command::Lookup(ref args) if args.ticker == "aapl"));
    }

    #[test]
    fn chart_defaults_to_annual_revenue() {
        let cli = Cli::try_parse_from(["stockdash", "chart", "statements.json"]).expect("parse");
        match cli.command {
            Command::Chart(args) => {
                assert_eq!(args.series, SeriesArg::Revenue);
                assert_eq!(args.period, PeriodArg::Annual);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

use stockdash_core::{ChartSeries, FinancialStatements, ReportPeriod};

use crate::cli::ChartArgs;
use crate::error::CliError;

use super::{read_input, ChartView, CommandOutput};

pub fn run(args: &ChartArgs) -> Result<CommandOutput, CliError> {
    let statements: FinancialStatements = serde_json::from_str(&read_input(&args.file)?)?;
    let series = ChartSeries::from(args.series);
    let period = ReportPeriod::from(args.period);

    let symbol = if statements.income_statement.symbol.is_empty() {
        statements.cash_flow.symbol.clone()
    } else {
        statements.income_statement.symbol.clone()
    };
    let points = series.points(&statements, period);
    tracing::debug!(%symbol, ?series, ?period, points = points.len(), "chart series built");

    Ok(CommandOutput::Chart(ChartView {
        symbol,
        series,
        period,
        points,
    }))
}

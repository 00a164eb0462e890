use std::io::Write;

use serde::Serialize;
use stockdash_core::format::format_axis_value;
use stockdash_core::{ChartSeries, ReportPeriod, ValueTone};

use crate::cli::OutputFormat;
use crate::commands::{ChartView, CommandOutput, DashboardView};
use crate::error::CliError;

const BAR_WIDTH: usize = 30;

pub fn render(
    output: &CommandOutput,
    format: OutputFormat,
    pretty: bool,
    writer: &mut impl Write,
) -> Result<(), CliError> {
    match (format, output) {
        (OutputFormat::Json, CommandOutput::Dashboard(view)) => render_json(view, pretty, writer),
        (OutputFormat::Json, CommandOutput::Chart(view)) => render_json(view, pretty, writer),
        (OutputFormat::Table, CommandOutput::Dashboard(view)) => render_dashboard(view, writer),
        (OutputFormat::Table, CommandOutput::Chart(view)) => render_chart(view, writer),
    }
}

fn render_json<T: Serialize>(
    value: &T,
    pretty: bool,
    writer: &mut impl Write,
) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(writer, "{payload}")?;
    Ok(())
}

fn render_dashboard(view: &DashboardView, writer: &mut impl Write) -> Result<(), CliError> {
    writeln!(writer, "{}", view.ticker)?;

    if view.sections.is_empty() {
        writeln!(writer, "  no metrics available")?;
        return Ok(());
    }

    for section in &view.sections {
        writeln!(writer)?;
        writeln!(writer, "{}", section.title)?;

        let width = section
            .metrics
            .iter()
            .map(|metric| metric.label.chars().count())
            .max()
            .unwrap_or(0);

        for metric in &section.metrics {
            let padding = width - metric.label.chars().count();
            write!(
                writer,
                "  {}{}  {}",
                metric.label,
                " ".repeat(padding),
                metric.value
            )?;
            match tone_marker(metric.tone) {
                Some(marker) => writeln!(writer, " {marker}")?,
                None => writeln!(writer)?,
            }
        }

        if section.hidden > 0 {
            writeln!(writer, "  ({} more)", section.hidden)?;
        }
    }

    if view.hidden_total() > 0 {
        writeln!(writer)?;
        writeln!(writer, "pass --all to show every metric")?;
    }

    Ok(())
}

fn render_chart(view: &ChartView, writer: &mut impl Write) -> Result<(), CliError> {
    let title = match view.series {
        ChartSeries::Revenue => "revenue",
        ChartSeries::NetIncome => "net income",
        ChartSeries::FreeCashFlow => "free cash flow",
    };
    let period = match view.period {
        ReportPeriod::Annual => "annual",
        ReportPeriod::Quarterly => "quarterly",
    };
    writeln!(writer, "{} {title} ({period})", view.symbol)?;

    if view.points.is_empty() {
        writeln!(writer, "  no reports available")?;
        return Ok(());
    }

    let max = view
        .points
        .iter()
        .map(|point| point.value.abs())
        .fold(0.0_f64, f64::max);
    let period_width = view
        .points
        .iter()
        .map(|point| point.period.len())
        .max()
        .unwrap_or(0);
    let labels: Vec<String> = view
        .points
        .iter()
        .map(|point| format_axis_value(point.value))
        .collect();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);

    for (point, label) in view.points.iter().zip(&labels) {
        let filled = bar_length(point.value, max);
        let glyph = if point.value < 0.0 { "-" } else { "#" };
        writeln!(
            writer,
            "  {:<period_width$}  {:>label_width$}  {}",
            point.period,
            label,
            glyph.repeat(filled)
        )?;
    }

    Ok(())
}

fn bar_length(value: f64, max: f64) -> usize {
    if max <= 0.0 || !value.is_finite() {
        return 0;
    }
    ((value.abs() / max) * BAR_WIDTH as f64).round() as usize
}

const fn tone_marker(tone: ValueTone) -> Option<&'static str> {
    match tone {
        ValueTone::Positive => Some("▲"),
        ValueTone::Negative => Some("▼"),
        ValueTone::Neutral => None,
    }
}

#[cfg(test)]
mod tests {
    use stockdash_core::{
        Block, ChartPoint, Disclosure, Language, Metric, StockApiResponse, StockData,
    };

    use super::*;

    fn dashboard(disclosure: Disclosure) -> DashboardView {
        let response = StockApiResponse {
            success: true,
            ticker: String::from("AAPL"),
            data: StockData::default().with_block(
                Block::MarketSummary,
                vec![
                    Metric::new("Price", 189.5, Block::MarketSummary)
                        .with_labels("Price", "Ціна")
                        .primary(),
                    Metric::new("ChangePercent", -0.66, Block::MarketSummary)
                        .with_labels("Change %", "Зміна %")
                        .primary(),
                    Metric::new("Volume", 51_234_567.0, Block::MarketSummary)
                        .with_labels("Volume", "Обсяг"),
                ],
            ),
            message: None,
        };
        DashboardView::build(&response, Language::En, disclosure)
    }

    fn render_to_string(output: &CommandOutput, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        render(output, format, false, &mut buffer).expect("render");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn table_aligns_values_and_marks_tone() {
        let text = render_to_string(
            &CommandOutput::Dashboard(dashboard(Disclosure::collapsed())),
            OutputFormat::Table,
        );

        assert!(text.starts_with("AAPL\n"));
        assert!(text.contains("Market Summary\n"));
        assert!(text.contains("  Price     $189.50\n"));
        assert!(text.contains("  Change %  -0.66% ▼\n"));
        assert!(text.contains("  (1 more)\n"));
        assert!(text.contains("pass --all"));
        assert!(!text.contains("Volume"));
    }

    #[test]
    fn expanded_table_shows_secondary_metrics() {
        let mut disclosure = Disclosure::collapsed();
        disclosure.expand();
        let text = render_to_string(
            &CommandOutput::Dashboard(dashboard(disclosure)),
            OutputFormat::Table,
        );

        assert!(text.contains("Volume    51,234,567\n"));
        assert!(!text.contains("more)"));
    }

    #[test]
    fn json_output_carries_formatted_rows() {
        let text = render_to_string(
            &CommandOutput::Dashboard(dashboard(Disclosure::collapsed())),
            OutputFormat::Json,
        );
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");

        assert_eq!(value["ticker"], "AAPL");
        assert_eq!(value["language"], "en");
        assert_eq!(value["sections"][0]["block"], "market_summary");
        assert_eq!(value["sections"][0]["metrics"][0]["value"], "$189.50");
        assert_eq!(value["sections"][0]["metrics"][1]["tone"], "negative");
        assert_eq!(value["sections"][0]["hidden"], 1);
    }

    #[test]
    fn chart_table_scales_bars_to_largest_value() {
        let view = ChartView {
            symbol: String::from("AAPL"),
            series: ChartSeries::Revenue,
            period: ReportPeriod::Annual,
            points: vec![
                ChartPoint {
                    period: String::from("2022"),
                    value: 1.5e9,
                },
                ChartPoint {
                    period: String::from("2023"),
                    value: 3.0e9,
                },
            ],
        };
        let text = render_to_string(&CommandOutput::Chart(view), OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "AAPL revenue (annual)");
        assert_eq!(lines[1], format!("  2022  1.5B  {}", "#".repeat(15)));
        assert_eq!(lines[2], format!("  2023  3.0B  {}", "#".repeat(30)));
    }

    #[test]
    fn bar_length_handles_empty_scale() {
        assert_eq!(bar_length(10.0, 0.0), 0);
        assert_eq!(bar_length(f64::NAN, 10.0), 0);
        assert_eq!(bar_length(-5.0, 10.0), 15);
    }
}

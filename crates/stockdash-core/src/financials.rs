//! Chart series derived from income-statement and cash-flow reports.
//!
//! Reports arrive newest first with every amount as a string (`"None"` for
//! gaps). Series are cut to the most recent window and returned oldest first,
//! ready to plot left to right.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

use crate::domain::{parse_float_prefix, NONE_SENTINEL};
use crate::ValidationError;

/// Reporting cadence of a statement series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    #[default]
    Annual,
    Quarterly,
}

impl ReportPeriod {
    /// Number of most recent reports charted: ten years or twelve quarters.
    pub const fn window(self) -> usize {
        match self {
            Self::Annual => 10,
            Self::Quarterly => 12,
        }
    }

    pub fn label(self, fiscal_date_ending: &str) -> String {
        match self {
            Self::Annual => fiscal_year(fiscal_date_ending),
            Self::Quarterly => fiscal_quarter(fiscal_date_ending),
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" | "yearly" => Ok(Self::Annual),
            "quarterly" => Ok(Self::Quarterly),
            _ => Err(ValidationError::InvalidPeriod {
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeStatementReport {
    pub fiscal_date_ending: String,
    pub reported_currency: String,
    pub total_revenue: String,
    pub net_income: String,
    pub gross_profit: String,
    pub operating_income: String,
    pub ebitda: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashFlowReport {
    pub fiscal_date_ending: String,
    pub reported_currency: String,
    pub operating_cashflow: String,
    pub capital_expenditures: String,
    pub net_income: String,
}

/// A statement with both annual and quarterly reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement<R> {
    #[serde(default)]
    pub symbol: String,
    #[serde(default = "Vec::new")]
    pub annual_reports: Vec<R>,
    #[serde(default = "Vec::new")]
    pub quarterly_reports: Vec<R>,
}

impl<R> Statement<R> {
    pub fn reports(&self, period: ReportPeriod) -> &[R] {
        match period {
            ReportPeriod::Annual => &self.annual_reports,
            ReportPeriod::Quarterly => &self.quarterly_reports,
        }
    }
}

/// Financial statements payload of the extended lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatements {
    pub income_statement: Statement<IncomeStatementReport>,
    pub cash_flow: Statement<CashFlowReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub period: String,
    pub value: f64,
}

/// Which series to derive from a [`FinancialStatements`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSeries {
    Revenue,
    NetIncome,
    FreeCashFlow,
}

impl ChartSeries {
    pub fn points(self, statements: &FinancialStatements, period: ReportPeriod) -> Vec<ChartPoint> {
        match self {
            Self::Revenue => revenue_series(statements.income_statement.reports(period), period),
            Self::NetIncome => {
                net_income_series(statements.income_statement.reports(period), period)
            }
            Self::FreeCashFlow => {
                free_cash_flow_series(statements.cash_flow.reports(period), period)
            }
        }
    }
}

/// Amount as a number; `"None"`, blanks, and garbage read as zero.
pub fn parse_numeric_value(raw: &str) -> f64 {
    if raw == NONE_SENTINEL {
        return 0.0;
    }
    parse_float_prefix(raw)
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub fn parse_fiscal_date(raw: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    let date_part = raw.trim().get(..10)?;
    Date::parse(date_part, &format).ok()
}

/// `"2023"` for `"2023-09-30"`; unparseable input is returned unchanged.
pub fn fiscal_year(raw: &str) -> String {
    parse_fiscal_date(raw).map_or_else(|| raw.to_owned(), |date| date.year().to_string())
}

/// `"Q3 2023"` for `"2023-09-30"`; unparseable input is returned unchanged.
pub fn fiscal_quarter(raw: &str) -> String {
    parse_fiscal_date(raw).map_or_else(
        || raw.to_owned(),
        |date| {
            let quarter = (u8::from(date.month()) - 1) / 3 + 1;
            format!("Q{quarter} {}", date.year())
        },
    )
}

pub fn revenue_series(reports: &[IncomeStatementReport], period: ReportPeriod) -> Vec<ChartPoint> {
    series(reports, period, |report| {
        (
            report.fiscal_date_ending.as_str(),
            parse_numeric_value(&report.total_revenue),
        )
    })
}

pub fn net_income_series(
    reports: &[IncomeStatementReport],
    period: ReportPeriod,
) -> Vec<ChartPoint> {
    series(reports, period, |report| {
        (
            report.fiscal_date_ending.as_str(),
            parse_numeric_value(&report.net_income),
        )
    })
}

/// Operating cash flow minus the magnitude of capital expenditures.
pub fn free_cash_flow_series(reports: &[CashFlowReport], period: ReportPeriod) -> Vec<ChartPoint> {
    series(reports, period, |report| {
        let operating = parse_numeric_value(&report.operating_cashflow);
        let capex = parse_numeric_value(&report.capital_expenditures);
        (report.fiscal_date_ending.as_str(), operating - capex.abs())
    })
}

fn series<R>(
    reports: &[R],
    period: ReportPeriod,
    extract: impl Fn(&R) -> (&str, f64),
) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = reports
        .iter()
        .take(period.window())
        .map(|report| {
            let (date, value) = extract(report);
            ChartPoint {
                period: period.label(date),
                value,
            }
        })
        .collect();
    points.reverse();
    points
}

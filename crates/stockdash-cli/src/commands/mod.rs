mod chart;
mod lookup;
mod render;

use std::fs;
use std::path::Path;

use serde::Serialize;
use stockdash_core::{
    block_sections, format_metric, Block, ChartPoint, ChartSeries, Disclosure, FormattedMetric,
    Language, ReportPeriod, StockApiResponse,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// What a command hands to the output layer.
#[derive(Debug)]
pub enum CommandOutput {
    Dashboard(DashboardView),
    Chart(ChartView),
}

/// A ticker's sections as they appear on screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub ticker: String,
    pub language: Language,
    pub expanded: bool,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub block: Block,
    pub title: String,
    pub metrics: Vec<FormattedMetric>,
    /// Secondary metrics left out of `metrics` while collapsed.
    pub hidden: usize,
}

impl DashboardView {
    pub fn build(response: &StockApiResponse, language: Language, disclosure: Disclosure) -> Self {
        let sections = block_sections(&response.data)
            .iter()
            .map(|section| SectionView {
                block: section.block,
                title: section.title.get(language).to_owned(),
                metrics: disclosure
                    .visible(&section.metrics)
                    .into_iter()
                    .map(|metric| format_metric(metric, language))
                    .collect(),
                hidden: disclosure.hidden_count(&section.metrics),
            })
            .collect();

        Self {
            ticker: response.ticker.clone(),
            language,
            expanded: disclosure.is_expanded(),
            sections,
        }
    }

    pub fn hidden_total(&self) -> usize {
        self.sections.iter().map(|section| section.hidden).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub symbol: String,
    pub series: ChartSeries,
    pub period: ReportPeriod,
    pub points: Vec<ChartPoint>,
}

pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    let language = Language::from(cli.lang);
    let mut disclosure = Disclosure::collapsed();
    if cli.all {
        disclosure.expand();
    }

    match &cli.command {
        Command::Lookup(args) => lookup::run(args, cli.timeout_ms, language, disclosure).await,
        Command::Render(args) => render::run(args, language, disclosure),
        Command::Chart(args) => chart::run(args),
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "read input file");
    Ok(raw)
}

//! Reduce flat metric lists into render-ready groups.
//!
//! Both operations are stable filters over borrowed input: nothing is sorted
//! and nothing is copied.

use serde::Serialize;

use crate::format::{format_metric, FormattedMetric};
use crate::{Block, BlockTitle, Language, Metric, MetricValue, StockData, BLOCK_ORDER};

/// Metrics of one block split by their `is_primary` flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricPartition<'a> {
    pub primary: Vec<&'a Metric>,
    pub secondary: Vec<&'a Metric>,
}

impl<'a> MetricPartition<'a> {
    /// `true` when the block has nothing to render.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    /// Primary metrics followed by secondary ones.
    pub fn ordered(&self) -> impl Iterator<Item = &'a Metric> + '_ {
        self.primary.iter().chain(self.secondary.iter()).copied()
    }
}

pub fn partition_metrics(metrics: &[Metric]) -> MetricPartition<'_> {
    let (primary, secondary): (Vec<&Metric>, Vec<&Metric>) =
        metrics.iter().partition(|metric| metric.is_primary);
    MetricPartition { primary, secondary }
}

/// A non-empty block paired with its title.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSection<'a> {
    pub block: Block,
    pub title: BlockTitle,
    pub metrics: MetricPartition<'a>,
}

impl BlockSection<'_> {
    pub fn render(&self, language: Language) -> RenderedSection {
        RenderedSection {
            block: self.block,
            title: self.title.get(language).to_owned(),
            primary: self
                .metrics
                .primary
                .iter()
                .map(|metric| format_metric(metric, language))
                .collect(),
            secondary: self
                .metrics
                .secondary
                .iter()
                .map(|metric| format_metric(metric, language))
                .collect(),
        }
    }
}

/// Owned, formatted form of a [`BlockSection`] for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    pub block: Block,
    pub title: String,
    pub primary: Vec<FormattedMetric>,
    pub secondary: Vec<FormattedMetric>,
}

/// Sections of a ticker response in [`BLOCK_ORDER`], skipping empty blocks.
pub fn block_sections(data: &StockData) -> Vec<BlockSection<'_>> {
    BLOCK_ORDER
        .into_iter()
        .filter_map(|block| {
            let metrics = partition_metrics(data.block(block));
            (!metrics.is_empty()).then(|| BlockSection {
                block,
                title: block.title(),
                metrics,
            })
        })
        .collect()
}

pub fn render_sections(data: &StockData, language: Language) -> Vec<RenderedSection> {
    block_sections(data)
        .iter()
        .map(|section| section.render(language))
        .collect()
}

pub fn metric_by_key<'a>(metrics: &'a [Metric], key: &str) -> Option<&'a Metric> {
    metrics.iter().find(|metric| metric.key == key)
}

pub fn metric_value<'a>(metrics: &'a [Metric], key: &str) -> Option<&'a MetricValue> {
    metric_by_key(metrics, key).map(|metric| &metric.value)
}

/// "Show more" state of a primary-limited view.
///
/// Only primary metrics are visible until the view is expanded. The state
/// belongs to one metric list: build a fresh one whenever the list changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    pub const fn collapsed() -> Self {
        Self { expanded: false }
    }

    pub const fn is_expanded(self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn reset(&mut self) {
        self.expanded = false;
    }

    /// Metrics currently on screen for `partition`.
    pub fn visible<'a>(self, partition: &MetricPartition<'a>) -> Vec<&'a Metric> {
        if self.expanded {
            partition.ordered().collect()
        } else {
            partition.primary.clone()
        }
    }

    /// Count of metrics still behind the toggle.
    pub fn hidden_count(self, partition: &MetricPartition<'_>) -> usize {
        if self.expanded {
            0
        } else {
            partition.secondary.len()
        }
    }
}

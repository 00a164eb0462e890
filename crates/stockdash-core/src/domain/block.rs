use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Language, ValidationError};

/// Named dashboard section a metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    MarketSummary,
    Valuation,
    Profitability,
    Dividends,
    Forecasts,
    BalanceSheet,
    FinancialHealth,
}

/// Fixed render order of dashboard sections.
pub const BLOCK_ORDER: [Block; 7] = [
    Block::MarketSummary,
    Block::Valuation,
    Block::Profitability,
    Block::Dividends,
    Block::Forecasts,
    Block::BalanceSheet,
    Block::FinancialHealth,
];

/// Bilingual section heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockTitle {
    pub en: &'static str,
    pub uk: &'static str,
}

impl BlockTitle {
    pub const fn get(self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Uk => self.uk,
        }
    }
}

impl Block {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarketSummary => "market_summary",
            Self::Valuation => "valuation",
            Self::Profitability => "profitability",
            Self::Dividends => "dividends",
            Self::Forecasts => "forecasts",
            Self::BalanceSheet => "balance_sheet",
            Self::FinancialHealth => "financial_health",
        }
    }

    pub const fn title(self) -> BlockTitle {
        match self {
            Self::MarketSummary => BlockTitle {
                en: "Market Summary",
                uk: "Огляд ринку",
            },
            Self::Valuation => BlockTitle {
                en: "Valuation",
                uk: "Оцінка",
            },
            Self::Profitability => BlockTitle {
                en: "Profitability",
                uk: "Прибутковість",
            },
            Self::Dividends => BlockTitle {
                en: "Dividends",
                uk: "Дивіденди",
            },
            Self::Forecasts => BlockTitle {
                en: "Forecasts",
                uk: "Прогнози",
            },
            Self::BalanceSheet => BlockTitle {
                en: "Balance Sheet",
                uk: "Баланс",
            },
            Self::FinancialHealth => BlockTitle {
                en: "Financial Health",
                uk: "Фінансове здоров'я",
            },
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_lowercase();
        BLOCK_ORDER
            .into_iter()
            .find(|block| block.as_str() == normalized)
            .ok_or_else(|| ValidationError::InvalidBlock {
                value: input.to_owned(),
            })
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Block {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

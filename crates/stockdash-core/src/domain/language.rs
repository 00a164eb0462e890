use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Display locale for labels and block titles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    En,
    #[default]
    Uk,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Uk];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Uk => "uk",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "uk" | "ua" => Ok(Self::Uk),
            _ => Err(ValidationError::InvalidLanguage {
                value: input.to_owned(),
            }),
        }
    }

    /// The other supported language; drives a two-state language toggle.
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Uk,
            Self::Uk => Self::En,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

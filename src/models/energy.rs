use super::error::AppError;
use serde::{Deserialize, Serialize};

/// Energy types the production/consumption data is partitioned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnergyType {
    #[default]
    Oil,
    Gas,
}

impl EnergyType {
    /// Returns the partition key used for this energy type in API responses.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Oil => "oil",
            Self::Gas => "gas",
        }
    }

    /// Returns the human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Oil => "Oil",
            Self::Gas => "Gas",
        }
    }

    /// All selectable energy types, in display order.
    pub const fn all() -> &'static [Self] {
        &[Self::Oil, Self::Gas]
    }
}

impl std::fmt::Display for EnergyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for EnergyType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "oil" => Ok(Self::Oil),
            "gas" => Ok(Self::Gas),
            _ => Err(AppError::ConfigError(format!("Invalid energy type: {s}"))),
        }
    }
}

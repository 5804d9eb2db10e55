use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaleError};
use crate::scaler::classify::TieBreak;
use crate::scaler::constants::{DOMINANT_SHARE_THRESHOLD, TOLERANCE};

/// Runtime-configurable scaling knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingConfig {
    /// Relative half-width of the tolerance band (0.05 = ±5%).
    pub tolerance: f64,

    /// Caloric share an ingredient's macro must exceed to be its category.
    pub dominant_share_threshold: f64,

    pub tie_break: TieBreak,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            dominant_share_threshold: DOMINANT_SHARE_THRESHOLD,
            tie_break: TieBreak::HighestShare,
        }
    }
}

impl ScalingConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.tolerance) {
            return Err(ScaleError::InvalidInput(format!(
                "tolerance must be in [0, 1), got {}",
                self.tolerance
            )));
        }
        if !(self.dominant_share_threshold > 0.0 && self.dominant_share_threshold < 1.0) {
            return Err(ScaleError::InvalidInput(format!(
                "dominant share threshold must be in (0, 1), got {}",
                self.dominant_share_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_constants() {
        let config = ScalingConfig::default();
        assert_eq!(config.tolerance, TOLERANCE);
        assert_eq!(config.dominant_share_threshold, DOMINANT_SHARE_THRESHOLD);
        assert_eq!(config.tie_break, TieBreak::HighestShare);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = ScalingConfig {
            dominant_share_threshold: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ScalingConfig {
            tolerance: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tie_break_serde_name() {
        let config: ScalingConfig = serde_json::from_str(r#"{"tie_break": "fixed_order"}"#).unwrap();
        assert_eq!(config.tie_break, TieBreak::FixedOrder);
        assert_eq!(config.tolerance, TOLERANCE);
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::smoother::{DEFAULT_HISTORY_LEN, DEFAULT_SMOOTHING_FACTOR, MAX_HISTORY_LEN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Number of recent candidate positions averaged by the smoother.
    pub history_len: usize,
    /// Fraction of the gap to the windowed average closed per update.
    pub smoothing_factor: f32,
    pub initially_visible: bool,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            history_len: DEFAULT_HISTORY_LEN,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            initially_visible: false,
        }
    }
}

impl IndicatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.history_len == 0 {
            return Err(IndicatorError::InvalidConfig(
                "history_len must be at least 1".to_string(),
            ));
        }
        if self.history_len > MAX_HISTORY_LEN {
            return Err(IndicatorError::InvalidConfig(format!(
                "history_len must be at most {}, got {}",
                MAX_HISTORY_LEN, self.history_len
            )));
        }
        if !self.smoothing_factor.is_finite()
            || self.smoothing_factor <= 0.0
            || self.smoothing_factor > 1.0
        {
            return Err(IndicatorError::InvalidConfig(format!(
                "smoothing_factor must be in (0, 1], got {}",
                self.smoothing_factor
            )));
        }
        Ok(())
    }
}

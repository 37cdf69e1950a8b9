//! Constant round configuration, read once when the controller is built.
//!
//! The warm-up window (delay before the very first pop) and the steady-state gap
//! between pops are deliberately separate ranges.

use crate::error::ConfigError;

/// Timing and layout parameters for every round played by one controller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundConfig {
    /// Number of holes (N). Positions are indices 0..N.
    pub positions: usize,
    pub total_duration_ms: u32,
    pub tick_interval_ms: u32,
    pub min_visible_ms: u32,
    pub max_visible_ms: u32,
    pub min_gap_ms: u32,
    pub max_gap_ms: u32,
    pub min_warmup_ms: u32,
    pub max_warmup_ms: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            positions: 9,
            total_duration_ms: 30_000,
            tick_interval_ms: 1_000,
            min_visible_ms: 500,
            max_visible_ms: 1_100,
            min_gap_ms: 250,
            max_gap_ms: 700,
            min_warmup_ms: 200,
            max_warmup_ms: 600,
        }
    }
}

impl RoundConfig {
    /// Same configuration with a different hole count (the browser layout decides N).
    pub fn with_positions(mut self, positions: usize) -> Self {
        self.positions = positions;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.positions == 0 {
            return Err(ConfigError::NoPositions);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.total_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        let ranges = [
            ("visible", self.min_visible_ms, self.max_visible_ms),
            ("gap", self.min_gap_ms, self.max_gap_ms),
            ("warm-up", self.min_warmup_ms, self.max_warmup_ms),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(ConfigError::InvalidRange { name, min, max });
            }
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON object; omitted fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RoundConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = RoundConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.total_duration_ms, 30_000);
        assert_eq!(cfg.tick_interval_ms, 1_000);
        // warm-up and steady-state gap stay distinct
        assert_ne!(
            (cfg.min_warmup_ms, cfg.max_warmup_ms),
            (cfg.min_gap_ms, cfg.max_gap_ms)
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cfg = RoundConfig::default().with_positions(0);
        assert!(matches!(cfg.validate(), Err(ConfigError::NoPositions)));

        let cfg = RoundConfig {
            tick_interval_ms: 0,
            ..RoundConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroTickInterval)));

        let cfg = RoundConfig {
            total_duration_ms: 0,
            ..RoundConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroDuration)));

        let cfg = RoundConfig {
            min_gap_ms: 900,
            ..RoundConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRange { name: "gap", min: 900, max: 700 })
        ));
    }

    #[test]
    fn test_single_position_is_allowed() {
        assert!(RoundConfig::default().with_positions(1).validate().is_ok());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_from_json_partial_keeps_defaults() {
        let cfg = RoundConfig::from_json(r#"{ "positions": 6, "total_duration_ms": 10000 }"#)
            .unwrap();
        assert_eq!(cfg.positions, 6);
        assert_eq!(cfg.total_duration_ms, 10_000);
        assert_eq!(cfg.tick_interval_ms, 1_000);

        assert!(matches!(
            RoundConfig::from_json(r#"{ "min_visible_ms": 5000 }"#),
            Err(ConfigError::InvalidRange { name: "visible", .. })
        ));
        assert!(matches!(
            RoundConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}

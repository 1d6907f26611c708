// config.rs - Construction-time settings for a simulation

use std::time::Duration;

use crate::error::ConfigError;
use crate::grid::{DEFAULT_GRID_SIZE, GridSize};

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 400;
pub const MAX_GRID_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Side length of the square grid.
    pub grid_size: usize,
    /// Delay between generations while running.
    pub tick_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.grid_size));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    pub fn size(&self) -> GridSize {
        GridSize::square(self.grid_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let config = SimulationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.size(), GridSize::square(50));
        assert_eq!(config.tick_interval(), Duration::from_millis(400));
    }

    #[test]
    fn rejects_degenerate_values() {
        let zero = SimulationConfig { grid_size: 0, ..Default::default() };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroGridSize));

        let huge = SimulationConfig { grid_size: MAX_GRID_SIZE + 1, ..Default::default() };
        assert_eq!(huge.validate(), Err(ConfigError::GridTooLarge(MAX_GRID_SIZE + 1)));

        let frozen = SimulationConfig { tick_interval_ms: 0, ..Default::default() };
        assert_eq!(frozen.validate(), Err(ConfigError::ZeroTickInterval));
    }
}

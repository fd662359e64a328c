//! Validation logic for configuration values.

use anyhow::Result;

use super::defaults::DisplayConfig;
use super::Config;

impl DisplayConfig {
    /// Validate display configuration
    pub fn validate(&self) -> Result<()> {
        if self.recent_count == 0 {
            anyhow::bail!("display.recent_count must be greater than 0");
        }
        Ok(())
    }
}

impl Config {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.display.validate()
    }
}

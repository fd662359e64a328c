//! Configuration management.
//!
//! Configuration lives in the YAML frontmatter of markdown files:
//!
//! ```text
//! ---
//! display:
//!   recent_count: 3
//! input:
//!   uppercase: true
//!   verify_rut_check_digit: false
//! seed:
//!   demo_employees: true
//! ---
//!
//! # Notes for whoever edits this file
//! ```
//!
//! Both the global file and the project file are optional. Every key has a
//! default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;
pub mod validation;

pub use defaults::*;

/// Project config location, relative to the working directory
pub const PROJECT_CONFIG: &str = ".salmontt/config.md";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl Config {
    /// Load configuration with full merge semantics.
    ///
    /// With an explicit `path` only that file is read, and it must exist.
    /// Otherwise the global config and `.salmontt/config.md` are merged,
    /// project values overriding global ones.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_merged_from(
                global_config_path().as_deref(),
                Some(Path::new(PROJECT_CONFIG)),
            ),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config = PartialConfig::parse(content)?.merge_over(PartialConfig::default());
        config.validate()?;
        Ok(config)
    }

    /// Load merged configuration from the given global and project paths.
    /// Paths that do not exist are skipped.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: Option<&Path>) -> Result<Self> {
        let global = load_partial(global_path)?;
        let project = load_partial(project_path)?;

        let config = project.merge_over(global);
        config.validate()?;
        Ok(config)
    }

    /// Render as the frontmatter of a config file
    pub fn to_frontmatter(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config")?;
        Ok(format!("---\n{}---\n", yaml))
    }
}

/// Returns the path to the global config file, e.g. `~/.config/salmontt/config.md`
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("salmontt").join("config.md"))
}

/// Split `---` delimited YAML frontmatter from the markdown body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 3..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}

fn load_partial(path: Option<&Path>) -> Result<PartialConfig> {
    path.filter(|p| p.exists())
        .map(PartialConfig::load_from)
        .transpose()
        .map(Option::unwrap_or_default)
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub display: Option<PartialDisplayConfig>,
    pub input: Option<PartialInputConfig>,
    pub seed: Option<PartialSeedConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialDisplayConfig {
    pub recent_count: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialInputConfig {
    pub uppercase: Option<bool>,
    pub verify_rut_check_digit: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialSeedConfig {
    pub demo_employees: Option<bool>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        // An empty frontmatter block deserializes to null
        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this config over `base`. Values set here take precedence, then
    /// values from `base`, then defaults.
    fn merge_over(self, base: PartialConfig) -> Config {
        let display = self.display.unwrap_or_default();
        let base_display = base.display.unwrap_or_default();
        let input = self.input.unwrap_or_default();
        let base_input = base.input.unwrap_or_default();
        let seed = self.seed.unwrap_or_default();
        let base_seed = base.seed.unwrap_or_default();

        Config {
            display: DisplayConfig {
                recent_count: display
                    .recent_count
                    .or(base_display.recent_count)
                    .unwrap_or_else(defaults::default_recent_count),
            },
            input: InputConfig {
                uppercase: input
                    .uppercase
                    .or(base_input.uppercase)
                    .unwrap_or_else(defaults::default_true),
                verify_rut_check_digit: input
                    .verify_rut_check_digit
                    .or(base_input.verify_rut_check_digit)
                    .unwrap_or_else(defaults::default_false),
            },
            seed: SeedConfig {
                demo_employees: seed
                    .demo_employees
                    .or(base_seed.demo_employees)
                    .unwrap_or_else(defaults::default_true),
            },
        }
    }
}

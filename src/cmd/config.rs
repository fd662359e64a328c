//! Config command for showing and validating configuration

use anyhow::Result;
use std::path::Path;

use salmontt::config::{global_config_path, Config, PROJECT_CONFIG};
use salmontt::output::Output;

/// Print the effective configuration as frontmatter
pub fn cmd_config_show(config: &Config) -> Result<()> {
    print!("{}", config.to_frontmatter()?);
    Ok(())
}

/// Load every config source and report which ones were used
pub fn cmd_config_validate(explicit: Option<&Path>, output: &Output) -> Result<()> {
    let sources: Vec<String> = match explicit {
        Some(path) => vec![path.display().to_string()],
        None => global_config_path()
            .into_iter()
            .chain(std::iter::once(Path::new(PROJECT_CONFIG).to_path_buf()))
            .filter(|path| path.exists())
            .map(|path| path.display().to_string())
            .collect(),
    };

    match Config::load(explicit) {
        Ok(_) => {
            if sources.is_empty() {
                output.success("No config files found; using defaults");
            } else {
                output.success("Configuration is valid");
                for source in &sources {
                    output.detail(source);
                }
            }
            Ok(())
        }
        Err(err) => {
            output.error(&format!("{:#}", err));
            std::process::exit(1);
        }
    }
}

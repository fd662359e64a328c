use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Runs the salmontt binary in an isolated directory with its own config file.
///
/// The binary always gets `--config` so the developer's global settings
/// never leak into a test.
pub struct TestHarness {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub binary: PathBuf,
}

impl TestHarness {
    /// Harness with the default configuration.
    pub fn new() -> Self {
        Self::with_config(
            r#"---
display:
  recent_count: 3
---

# Salmontt config
"#,
        )
    }

    pub fn with_config(content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = dir.path().join("config.md");
        fs::write(&config_path, content).expect("Failed to write config");

        TestHarness {
            dir,
            config_path,
            binary: PathBuf::from(env!("CARGO_BIN_EXE_salmontt")),
        }
    }

    /// Run the binary with `args`, feeding `stdin` through a pipe.
    pub fn run(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = Command::new(&self.binary)
            .arg("--config")
            .arg(&self.config_path)
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("SALMONTT_QUIET")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start salmontt");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");

        child.wait_with_output().expect("Failed to wait for salmontt")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

use std::process::Command;

/// Read a build stamp from the environment, falling back to running a command.
fn stamp(var: &str, program: &str, args: &[&str]) -> String {
    std::env::var(var).unwrap_or_else(|_| {
        Command::new(program)
            .args(args)
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    })
}

fn main() {
    let git_sha = stamp("GIT_SHA", "git", &["rev-parse", "--short", "HEAD"]);
    println!("cargo:rustc-env=GIT_SHA={}", git_sha);

    let build_date = stamp("BUILD_DATE", "date", &["+%Y-%m-%d"]);
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
}

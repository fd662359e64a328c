//! CLI entry point for salmontt.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use cmd::check::CheckKind;
use salmontt::config::Config;
use salmontt::output::{Output, OutputMode};

#[derive(Parser)]
#[command(name = "salmontt")]
#[command(version)]
#[command(about = "Client and employee records", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    salmontt                   Open the main menu\n    salmontt check rut 12345678-5\n                               Check a single value without opening the menu"
)]
struct Cli {
    /// Emit one JSON event per line
    #[arg(long, global = true)]
    json: bool,
    /// Only print errors and prompts
    #[arg(long, short, global = true)]
    quiet: bool,
    /// Read configuration from this file only
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive main menu (default)
    Run {
        /// Start without the demo employees
        #[arg(long)]
        no_seed: bool,
    },
    /// Check a single value against the input rules
    Check {
        /// Which rules to apply
        #[arg(value_enum)]
        kind: CheckKind,
        /// The value to check
        value: String,
    },
    /// Show the effective configuration
    Config {
        /// Load every config file and report problems
        #[arg(long)]
        validate: bool,
    },
    /// Show version information
    Version {
        /// Include commit and build date
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputMode::from_flags(cli.json, cli.quiet));
    let explicit = cli.config.as_deref();

    match cli.command.unwrap_or(Commands::Run { no_seed: false }) {
        Commands::Run { no_seed } => {
            let config = Config::load(explicit)?;
            cmd::run::cmd_run(config, output, no_seed)
        }
        Commands::Check { kind, value } => {
            let config = Config::load(explicit)?;
            cmd::check::cmd_check(&config, &output, kind, &value)
        }
        Commands::Config { validate } => {
            if validate {
                cmd::config::cmd_config_validate(explicit, &output)
            } else {
                cmd::config::cmd_config_show(&Config::load(explicit)?)
            }
        }
        Commands::Version { verbose } => cmd_version(verbose),
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "salmontt", &mut io::stdout());
    Ok(())
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("salmontt {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}

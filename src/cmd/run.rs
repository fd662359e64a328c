//! The interactive session

use anyhow::Result;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use salmontt::config::Config;
use salmontt::input::{BufferedSource, Interrupted, LineSource, TerminalSource};
use salmontt::menu::Menu;
use salmontt::output::Output;
use salmontt::seed;

/// Set once the exit message has been printed for Ctrl+C
static EXITING: AtomicBool = AtomicBool::new(false);

/// Start the menu, reading from the terminal when stdin is one and from
/// plain lines otherwise.
pub fn cmd_run(config: Config, output: Output, no_seed: bool) -> Result<()> {
    install_interrupt_handler();

    let result = if atty::is(atty::Stream::Stdin) {
        session(TerminalSource, config, output, no_seed)
    } else {
        let source = BufferedSource::new(io::stdin().lock(), output.clone());
        session(source, config, output, no_seed)
    };

    match result {
        Err(err) if is_interrupt(&err) => exit_interrupted(),
        other => other,
    }
}

fn session<S: LineSource>(source: S, config: Config, output: Output, no_seed: bool) -> Result<()> {
    let seed_employees = config.seed.demo_employees && !no_seed;

    let mut menu = Menu::new(source, output, config);
    if seed_employees {
        menu.seed(seed::demo_employees())?;
    }
    menu.run()
}

fn is_interrupt(err: &anyhow::Error) -> bool {
    err.downcast_ref::<Interrupted>().is_some()
}

/// Print the exit message once and leave with status 130.
///
/// Both the signal handler and an interrupted prompt end up here.
fn exit_interrupted() -> ! {
    let mut stderr = io::stderr().lock();
    if !EXITING.swap(true, Ordering::SeqCst) {
        let _ = writeln!(stderr, "\nExiting the system...");
    }
    std::process::exit(130);
}

fn install_interrupt_handler() {
    let _ = ctrlc::set_handler(|| exit_interrupted());
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_interrupted_prompt_is_recognized_through_context() {
        let err = Err::<(), _>(Interrupted)
            .context("Failed to read first name")
            .unwrap_err();
        assert!(is_interrupt(&err));
    }

    #[test]
    fn test_other_errors_are_not_interrupts() {
        let err = anyhow::anyhow!("Input closed before a value was entered");
        assert!(!is_interrupt(&err));
    }
}

//! CLI module graph and dispatch.

pub mod bench;
pub mod calc;
pub mod command;
pub mod input;
pub mod output;
pub mod strategy;
pub mod validate;

use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::infrastructure::config::Settings;
use command::{Cli, Commands};

/// Run a parsed command line and return the process exit code.
///
/// Success is 0, handled user errors are 2, internal failures are 1.
#[must_use]
pub fn run(cli: Cli) -> i32 {
    let settings = match Settings::load_optional(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            output::error(&e);
            return e.exit_code();
        }
    };

    settings.logging.clone().with_verbosity(cli.verbose).init();
    debug!(config = ?cli.config, compute = ?settings.compute, "settings loaded");

    match dispatch(&cli.command, &settings) {
        Ok(()) => 0,
        Err(e) => report(&e),
    }
}

fn dispatch(command: &Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Calc(args) => calc::execute(args, settings.compute),
        Commands::Validate(args) => validate::execute(args, settings.compute),
        Commands::Bench(args) => bench::execute(args, settings.compute),
        Commands::Strategies => strategy::list(),
    }
}

fn report(e: &Error) -> i32 {
    let code = e.exit_code();
    if code == 1 {
        error!(error = ?e, "unexpected failure");
    } else {
        debug!(error = %e, exit_code = code, "command rejected");
    }
    output::error(e);
    if let Error::Computation(inner) = e {
        if let Some(cause) = std::error::Error::source(inner) {
            output::hint(&format!("{} strategy reported: {cause}", inner.strategy));
        }
    }
    if let Error::Usage(_) = e {
        output::hint("run factorlab --help for usage");
    }
    code
}

//! Handler for the `validate` command.

use tracing::debug;

use crate::adapter::inbound::cli::command::ValidateArgs;
use crate::adapter::inbound::cli::output;
use crate::application::FactorialService;
use crate::domain::config::ComputeConfig;
use crate::domain::validation::parse_input;
use crate::error::Result;

/// Execute the validate command, printing `OK` when the value is accepted.
pub fn execute(args: &ValidateArgs, base: ComputeConfig) -> Result<()> {
    let config = args.compute.apply(base);
    let raw = parse_input(&args.n)?;
    let n = FactorialService::new(config).validate(raw)?;
    debug!(n, algorithm = %config.algorithm, "value accepted");
    output::success("OK");
    Ok(())
}

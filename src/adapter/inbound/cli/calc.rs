//! Handler for the `calc` command.

use std::io::IsTerminal;

use tracing::info;

use crate::adapter::inbound::cli::command::CalcArgs;
use crate::adapter::inbound::cli::{input, output};
use crate::application::{format_as, FactorialService};
use crate::domain::config::ComputeConfig;
use crate::error::Result;

/// Execute the calc command.
///
/// Nothing is written unless the whole batch succeeds.
pub fn execute(args: &CalcArgs, base: ComputeConfig) -> Result<()> {
    let mut config = args.compute.apply(base);
    if let Some(format) = args.format {
        config.output = format;
    }

    let stdin = std::io::stdin();
    let reader = (!stdin.is_terminal()).then(|| stdin.lock());
    let values = input::gather(args.n.as_deref(), args.input.as_deref(), reader)?;

    info!(
        count = values.len(),
        algorithm = %config.algorithm,
        max_input = config.max_input,
        format = %config.output,
        "computing factorials"
    );

    let service = FactorialService::new(config);
    let pairs = service.compute_many(values)?;
    let payload = format_as(&pairs, config.output)?;
    output::write_payload(&payload, args.output.as_deref())
}

//! Handler for the `bench` command.

use tracing::info;

use crate::adapter::inbound::cli::command::BenchArgs;
use crate::adapter::inbound::cli::output;
use crate::application::{bench, BenchRange, FactorialService};
use crate::domain::config::ComputeConfig;
use crate::error::{Error, Result};

/// Execute the bench command, emitting CSV `n,digits,seconds,method`.
pub fn execute(args: &BenchArgs, base: ComputeConfig) -> Result<()> {
    let config = args.compute.apply(base);
    let range = args.range.parse::<BenchRange>().map_err(Error::Usage)?;

    info!(
        start = range.start,
        stop = range.stop,
        step = range.step,
        algorithm = %config.algorithm,
        "starting benchmark"
    );

    let service = FactorialService::new(config);
    let pb = output::progress(range.len(), service.strategy_name());
    let result = service.bench_range_with(range, |_| pb.inc(1));
    pb.finish_and_clear();
    let records = result?;

    if let Some(slowest) = records
        .iter()
        .max_by(|a, b| a.seconds.total_cmp(&b.seconds))
    {
        info!(
            samples = records.len(),
            slowest_n = slowest.n,
            slowest_seconds = slowest.seconds,
            "benchmark complete"
        );
    }

    output::write_payload(&bench::to_csv(&records), args.output.as_deref())
}

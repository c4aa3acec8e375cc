//! Strategy listing.

use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::{Algorithm, RECURSION_LIMIT};
use crate::error::Result;

#[derive(Tabled)]
struct StrategyRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Aliases")]
    aliases: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

fn notes(algorithm: Algorithm) -> String {
    match algorithm {
        Algorithm::Iterative => "running product, one accumulator".to_string(),
        Algorithm::Recursive => format!("one frame per step, n <= {RECURSION_LIMIT}"),
        Algorithm::Product => "product over 2..=n (default)".to_string(),
    }
}

fn rows() -> Vec<StrategyRow> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| StrategyRow {
            name: algorithm.as_str(),
            aliases: algorithm.aliases().join(", "),
            notes: notes(algorithm),
        })
        .collect()
}

/// Render the strategy table.
#[must_use]
pub fn render() -> String {
    Table::new(rows()).to_string()
}

/// List available strategies.
pub fn list() -> Result<()> {
    output::write_payload(&render(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_alias() {
        let table = render();
        for alias in ["iter", "rec", "prod", "math", "mathprod"] {
            assert!(table.contains(alias), "missing {alias} in\n{table}");
        }
        assert!(table.contains("2000"));
    }
}

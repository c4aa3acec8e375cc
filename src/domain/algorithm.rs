//! Algorithm selection.
//!
//! [`Algorithm`] is the closed set of strategies the service can run.
//! Free-form names are parsed once at the boundary with [`str::parse`] (or
//! [`strategy_for`]); everything inside the crate passes the enum around.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::UnknownAlgorithm;
use super::strategy::{IterativeStrategy, ProductStrategy, RecursiveStrategy, Strategy};

/// Selectable factorial algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Algorithm {
    /// Running product with one accumulator.
    Iterative,
    /// Naive recursion, capped by the validation policy.
    Recursive,
    /// Product over the range `2..=n`.
    #[default]
    Product,
}

impl Algorithm {
    /// Every algorithm, in display order.
    pub const ALL: [Algorithm; 3] = [Self::Iterative, Self::Recursive, Self::Product];

    /// Canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iterative => "iterative",
            Self::Recursive => "recursive",
            Self::Product => "product",
        }
    }

    /// Accepted aliases, matched case-insensitively.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Iterative => &["iter", "iterative"],
            Self::Recursive => &["rec", "recursive"],
            Self::Product => &["prod", "math", "mathprod", "product"],
        }
    }

    /// Build a strategy instance for this algorithm.
    #[must_use]
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Self::Iterative => Box::new(IterativeStrategy),
            Self::Recursive => Box::new(RecursiveStrategy),
            Self::Product => Box::new(ProductStrategy),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.aliases().contains(&key.as_str()))
            .ok_or_else(|| UnknownAlgorithm { name: s.to_string() })
    }
}

impl TryFrom<String> for Algorithm {
    type Error = UnknownAlgorithm;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Strategy factory: resolve a name or alias to a strategy instance.
///
/// # Errors
///
/// Returns [`UnknownAlgorithm`] when `name` matches no alias.
pub fn strategy_for(name: &str) -> Result<Box<dyn Strategy>, UnknownAlgorithm> {
    name.parse::<Algorithm>().map(Algorithm::strategy)
}

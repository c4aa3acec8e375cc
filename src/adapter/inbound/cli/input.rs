//! Input gathering for `calc`.
//!
//! Values come from `--n`, then the `--input` file; stdin is read only when
//! neither produced anything.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::domain::validation::parse_input;
use crate::error::{Error, Result};

/// Parse a file body with one integer per line. Blank lines are skipped.
///
/// # Errors
///
/// Returns a validation error for the first line that is not an integer.
pub fn parse_lines(content: &str) -> Result<Vec<i64>> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| parse_input(line).map_err(Error::from))
        .collect()
}

/// Parse whitespace-separated integers.
///
/// # Errors
///
/// Returns a validation error for the first token that is not an integer.
pub fn parse_tokens(content: &str) -> Result<Vec<i64>> {
    content
        .split_whitespace()
        .map(|token| parse_input(token).map_err(Error::from))
        .collect()
}

/// Collect every requested value in order.
///
/// `stdin` is `None` when it is attached to a terminal and must not be read.
///
/// # Errors
///
/// Fails on unreadable files, non-integer values, or when no value was
/// supplied at all.
pub fn gather<R: Read>(
    n: Option<&str>,
    input: Option<&Path>,
    stdin: Option<R>,
) -> Result<Vec<i64>> {
    let mut values = Vec::new();

    if let Some(raw) = n {
        values.push(parse_input(raw)?);
    }

    if let Some(path) = input {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        let from_file = parse_lines(&content)?;
        debug!(path = %path.display(), count = from_file.len(), "read input file");
        values.extend(from_file);
    }

    if values.is_empty() {
        if let Some(mut reader) = stdin {
            let mut content = String::new();
            reader.read_to_string(&mut content)?;
            values = parse_tokens(&content)?;
            debug!(count = values.len(), "read values from stdin");
        }
    }

    if values.is_empty() {
        return Err(Error::Usage(
            "no input: pass --n, --input, or pipe values on stdin".to_string(),
        ));
    }

    Ok(values)
}

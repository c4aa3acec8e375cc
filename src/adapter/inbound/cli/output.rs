//! CLI output helpers.
//!
//! Command payloads go to stdout or a file; diagnostics and progress go to
//! stderr. Colors are applied only when the target stream supports them.

use std::fmt::Display;
use std::io::{IsTerminal, Write};
use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::error::{Error, Result};

/// Write a rendered payload to `path`, or to stdout followed by a newline.
///
/// Files receive the payload exactly as rendered.
///
/// # Errors
///
/// Returns [`Error::WriteOutput`] when the file cannot be written, or
/// [`Error::Io`] when stdout is closed.
pub fn write_payload(payload: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, payload).map_err(|source| Error::WriteOutput {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(payload.as_bytes())?;
            if !payload.is_empty() {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Print a success line to stdout.
pub fn success(message: &str) {
    println!(
        "{}",
        message.if_supports_color(Stream::Stdout, |text| text.green())
    );
}

/// Print an error line to stderr.
pub fn error(message: impl Display) {
    eprintln!(
        "{} {}",
        "error:".if_supports_color(Stream::Stderr, |text| text.red()),
        message
    );
}

/// Print a hint line to stderr.
pub fn hint(message: &str) {
    eprintln!(
        "  {} {}",
        "hint:".if_supports_color(Stream::Stderr, |text| text.dimmed()),
        message
    );
}

/// Progress bar for `len` steps, drawn on stderr only when it is a terminal.
#[must_use]
pub fn progress(len: u64, message: &str) -> indicatif::ProgressBar {
    if !std::io::stderr().is_terminal() {
        return indicatif::ProgressBar::hidden();
    }

    let pb = indicatif::ProgressBar::new(len);
    if let Ok(style) = indicatif::ProgressStyle::with_template(
        "  {spinner:.cyan} {msg} [{bar:30.cyan/dim}] {pos}/{len}",
    ) {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

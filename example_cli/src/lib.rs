//! # Example CLI
//!
//! A greeting command plus a small arithmetic dispatcher.
//!
//! The binary `example-cli` prints a fixed greeting, preceded by a notice when
//! `--verbose` is given. The library side exposes [`calc`], which maps an
//! operator symbol onto an integer primitive from the `arithm` crate.
//!
//! ```rust
//! let mut out = Vec::new();
//! example_cli::run(true, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Running in verbose mode\nHello from example-cli!\n"
//! );
//! ```

pub mod calc;
pub mod error;

pub use calc::{Operator, calc};
pub use error::{CalcError, Result};

use std::io::{self, Write};

pub const GREETING: &str = "Hello from example-cli!";
pub const VERBOSE_NOTICE: &str = "Running in verbose mode";

/// Writes the command output to `out`.
///
/// # Errors
///
/// Returns any error raised while writing to `out`.
pub fn run<W: Write>(verbose: bool, out: &mut W) -> io::Result<()> {
    if verbose {
        writeln!(out, "{VERBOSE_NOTICE}")?;
    }
    writeln!(out, "{GREETING}")?;
    out.flush()
}

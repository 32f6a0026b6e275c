//! Runtime error type.
//!
//! Only initialization (replay parsing) and finalization (artifact I/O)
//! are fallible. Evaluation itself never errors: missing bindings and
//! unsupported opcodes degrade with a diagnostic instead, because the
//! runtime must never alter the concrete execution it shadows.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// A replay line that does not parse as `X<id>,<value>`. Fatal:
    /// continuing with partial inputs would silently desynchronize the
    /// run from the recorded one.
    #[error("malformed replay line {line}: {text:?}")]
    MalformedReplay { line: usize, text: String },
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types shared by all value types in this crate.

use thiserror::Error;

/// Errors produced when parsing or operating on IPv4 values.
///
/// The boolean predicates (`matches`, `contains*`) never return these;
/// they swallow construction failures and answer `false` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be interpreted as the target representation.
    #[error("failed to parse {input:?} as {target}")]
    Parse {
        /// The rejected input, verbatim.
        input: String,
        /// Human-readable name of the representation that was expected.
        target: &'static str,
    },

    /// Increment/decrement would leave the unsigned 32-bit range.
    #[error("{op} would overflow the 32-bit range")]
    Overflow {
        /// Either `"increment"` or `"decrement"`.
        op: &'static str,
    },

    /// A host or broadcast query is undefined for this prefix length.
    #[error("no {what} exists for a /{prefix_len} subnet")]
    HostRange {
        /// What was asked for, e.g. `"broadcast address"`.
        what: &'static str,
        /// The offending prefix length.
        prefix_len: u8,
    },

    /// Star notation was requested for a non-byte-aligned prefix length.
    #[error("star notation requires a prefix length of 0, 8, 16, 24 or 32, got /{prefix_len}")]
    Range {
        /// The offending prefix length.
        prefix_len: u8,
    },
}

impl Error {
    /// Shorthand for a [`Error::Parse`] with an owned copy of the input.
    pub(crate) fn parse(input: &str, target: &'static str) -> Self {
        Error::Parse {
            input: input.to_string(),
            target,
        }
    }
}

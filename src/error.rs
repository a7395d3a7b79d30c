//! Typed errors for the query-time path.
//!
//! Failures that must abort a query surface as one of four variants. I/O
//! errors are folded into [`Error::Storage`] with the offending path for
//! context; metadata decode failures become [`Error::Metadata`]; a posting
//! segment whose byte length disagrees with the metadata becomes
//! [`Error::Format`]; a location whose spans cannot satisfy the requested
//! byte length becomes [`Error::ShortRead`].
//!
//! `UnknownTerm` / `EmptyQuery` are deliberately not variants: an absent term
//! or an empty query is an ordinary empty result, not an error.

use std::fmt;
use std::io;

/// An error raised while loading indexes or reading posting bytes.
#[derive(Debug)]
pub enum Error {
    /// An I/O operation against `path` failed.
    Storage {
        /// The path whose access failed.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Metadata at `path` could not be decoded.
    Metadata {
        /// The path whose metadata failed to decode.
        path: String,
        /// A human-readable detail from the decoder.
        detail: String,
    },
    /// A posting byte slice did not match its claimed entry count.
    Format {
        /// The byte length implied by the claimed count.
        expected: usize,
        /// The byte length actually supplied.
        actual: usize,
    },
    /// A location's spans could not satisfy the requested byte length.
    ShortRead {
        /// The number of bytes requested.
        requested: usize,
        /// The number of bytes actually reachable.
        read: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Storage { path, source } => {
                write!(f, "storage error at {}: {}", path, source)
            }
            Error::Metadata { path, detail } => {
                write!(f, "metadata error at {}: {}", path, detail)
            }
            Error::Format { expected, actual } => {
                write!(
                    f,
                    "posting format error: expected {} bytes, got {}",
                    expected, actual
                )
            }
            Error::ShortRead { requested, read } => {
                write!(
                    f,
                    "short read: requested {} bytes, reached {}",
                    requested, read
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Storage { source, .. } => Some(source),
            _ => None,
        }
    }
}

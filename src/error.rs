//! Error taxonomy for configuration and credentials loading.
//!
//! All variants are fatal at startup; the search never starts with a bad
//! configuration, and no transient/retryable errors exist.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read credentials file '{path}': {source}")]
    CredentialsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed entry on line {line}: expected 'name:{{tag}}base64digest'")]
    MalformedEntry { line: usize },

    #[error("invalid digest encoding on line {line}: {source}")]
    DigestEncoding {
        line: usize,
        #[source]
        source: base64::DecodeError,
    },

    #[error("digest on line {line} is {got} bytes, expected {expected}")]
    DigestLength {
        line: usize,
        got: usize,
        expected: usize,
    },

    #[error("unknown charset selector '{0}': use any combination of 'n', 'a', 'A'")]
    UnknownCharsetSelector(String),

    #[error("charset is empty")]
    EmptyCharset,

    #[error("no target digests loaded")]
    EmptyDigestSet,

    #[error("password length must be at least 1")]
    ZeroPasswordLength,

    #[error("at least one worker is required")]
    NoWorkers,
}

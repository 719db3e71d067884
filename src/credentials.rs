//! Loading of htpasswd-style credentials files.
//!
//! Each line has the form `name:{SHA}base64digest`. The tag between the
//! braces is skipped; the base64 payload must decode to exactly 20 bytes
//! (a SHA-1 digest).

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::Error;

/// Length in bytes of a SHA-1 digest.
pub const DIGEST_LEN: usize = 20;

/// One target entry: a username and the digest concealing its password.
/// Created once at load time and read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestEntry {
    pub name: String,
    pub digest: [u8; DIGEST_LEN],
}

/// Load all entries from a credentials file. Blank lines are skipped;
/// any malformed line is a fatal error.
pub fn load(path: &Path) -> Result<Vec<DigestEntry>, Error> {
    let contents = fs::read_to_string(path).map_err(|source| Error::CredentialsIo {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        entries.push(parse_line(line, idx + 1)?);
    }
    Ok(entries)
}

/// Parse a single `name:{tag}base64digest` line. `line_no` is 1-based and
/// only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<DigestEntry, Error> {
    let (name, rest) = line
        .split_once(':')
        .ok_or(Error::MalformedEntry { line: line_no })?;

    // Skip the '{SHA}' style encoding tag.
    let encoded = match rest.split_once('}') {
        Some((_, encoded)) => encoded,
        None => return Err(Error::MalformedEntry { line: line_no }),
    };

    let decoded = BASE64
        .decode(encoded.trim_end())
        .map_err(|source| Error::DigestEncoding {
            line: line_no,
            source,
        })?;

    let digest: [u8; DIGEST_LEN] =
        decoded
            .as_slice()
            .try_into()
            .map_err(|_| Error::DigestLength {
                line: line_no,
                got: decoded.len(),
                expected: DIGEST_LEN,
            })?;

    Ok(DigestEntry {
        name: name.to_string(),
        digest,
    })
}

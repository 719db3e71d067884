//! Search configuration and startup validation.

use crate::charset::Charset;
use crate::credentials::DigestEntry;
use crate::error::Error;

/// Configuration for a distributed search run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Fixed candidate length.
    pub password_len: usize,
    /// Number of worker threads to spawn.
    pub num_workers: usize,
    /// Emit per-worker progress at DEBUG level. No effect on correctness.
    pub verbose: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            password_len: 4,
            num_workers: num_cpus::get(),
            verbose: false,
        }
    }
}

impl SearchConfig {
    /// Set the candidate length.
    pub fn with_length(mut self, password_len: usize) -> Self {
        self.password_len = password_len;
        self
    }

    /// Set the number of workers.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    /// Enable or disable verbose progress output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Reject configurations under which the search cannot proceed. All
    /// failures here are fatal; no worker starts.
    pub fn validate(&self, charset: &Charset, targets: &[DigestEntry]) -> Result<(), Error> {
        if self.password_len == 0 {
            return Err(Error::ZeroPasswordLength);
        }
        if self.num_workers == 0 {
            return Err(Error::NoWorkers);
        }
        if charset.is_empty() {
            return Err(Error::EmptyCharset);
        }
        if targets.is_empty() {
            return Err(Error::EmptyDigestSet);
        }
        Ok(())
    }

    /// Size of the full keyspace, `C^L`, as a float for display purposes.
    pub fn keyspace(&self, charset: &Charset) -> f64 {
        (charset.len() as f64).powi(self.password_len as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha1::{Digest, Sha1};

    fn one_target() -> Vec<DigestEntry> {
        vec![DigestEntry {
            name: "alice".to_string(),
            digest: Sha1::digest(b"42").into(),
        }]
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::default()
            .with_length(6)
            .with_workers(3)
            .with_verbose(true);
        assert_eq!(config.password_len, 6);
        assert_eq!(config.num_workers, 3);
        assert!(config.verbose);
    }

    #[test]
    fn test_default_uses_available_cores() {
        assert!(SearchConfig::default().num_workers >= 1);
    }

    #[test]
    fn test_validate_accepts_sane_config() {
        let charset = Charset::from_selector("n").unwrap();
        let config = SearchConfig::default().with_length(2).with_workers(2);
        assert!(config.validate(&charset, &one_target()).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let charset = Charset::from_selector("n").unwrap();
        let config = SearchConfig::default().with_length(0);
        assert!(matches!(
            config.validate(&charset, &one_target()),
            Err(Error::ZeroPasswordLength)
        ));
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let charset = Charset::from_selector("n").unwrap();
        let config = SearchConfig::default().with_workers(0);
        assert!(matches!(
            config.validate(&charset, &one_target()),
            Err(Error::NoWorkers)
        ));
    }

    #[test]
    fn test_validate_rejects_empty_digest_set() {
        let charset = Charset::from_selector("n").unwrap();
        let config = SearchConfig::default();
        assert!(matches!(
            config.validate(&charset, &[]),
            Err(Error::EmptyDigestSet)
        ));
    }

    #[test]
    fn test_keyspace() {
        let charset = Charset::from_selector("n").unwrap();
        let config = SearchConfig::default().with_length(4);
        assert_eq!(config.keyspace(&charset), 10_000.0);
    }
}

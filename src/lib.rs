//! Distributed brute-force search over SHA-1 htpasswd digests.
//!
//! Targets are loaded once from an htpasswd-style credentials file
//! (`name:{SHA}base64digest`). Worker threads partition the first-symbol
//! index space deterministically, enumerate their partitions depth-first,
//! and report match and completion signals to a coordinator that decides
//! when the whole search may stop — broadcasting an early abort once every
//! target has been cracked.

pub mod charset;
pub mod credentials;
pub mod error;
pub mod search;

pub use charset::Charset;
pub use credentials::{DigestEntry, DIGEST_LEN};
pub use error::Error;
pub use search::{run_distributed_search, SearchConfig, SearchOutcome, SearchSummary};

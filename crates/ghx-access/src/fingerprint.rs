//! Entitlement fingerprinting for cache invalidation.

use crate::entitlement::EntitlementSet;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content-addressed fingerprint of an organization's entitlement set.
///
/// Callers caching decisions key them by fingerprint; any change to the
/// grants produces a new hash and invalidates the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntitlementFingerprint {
    /// SHA-256 over the canonically ordered grant tokens.
    pub hash: String,
    /// Fingerprint scheme version.
    pub version: u64,
}

impl EntitlementFingerprint {
    /// Compute the fingerprint for a set of grants.
    pub fn compute(entitlements: &EntitlementSet) -> Self {
        let mut hasher = Sha256::new();

        for token in entitlements.canonical_tokens() {
            hasher.update(token.as_bytes());
            hasher.update(b"\n");
        }

        let hash = hex::encode(hasher.finalize());

        Self { hash, version: 1 }
    }

    /// Get a short version of the hash (first 16 chars).
    pub fn short(&self) -> &str {
        &self.hash[..16.min(self.hash.len())]
    }
}

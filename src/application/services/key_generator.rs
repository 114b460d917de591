//! Collision-free short key generation.

use std::sync::Arc;

use serde_json::json;
use sha2::{Digest, Sha256};

use crate::domain::entities::Route;
use crate::domain::repositories::KeyStore;
use crate::error::AppError;

/// Random bytes drawn per attempt before hashing.
const SEED_BYTES: usize = 10;

/// Length of the derived key, in hex characters.
pub const KEY_LENGTH: usize = 10;

/// Collision bound before the create request fails outright.
const MAX_ATTEMPTS: u32 = 100;

/// Generates short keys and commits the initial `key -> target` mapping.
///
/// Each attempt draws fresh randomness, derives a candidate, and tries to
/// reserve it. Reservation is atomic ([`KeyStore::set_if_absent`]), so two
/// concurrent creates that derive the same candidate cannot both win: the
/// loser sees `false` and redraws. The `exists` probe ahead of the
/// reservation only saves a write on an already-taken candidate;
/// correctness does not depend on it.
pub struct KeyGenerator {
    store: Arc<dyn KeyStore>,
}

impl KeyGenerator {
    pub fn new(store: Arc<dyn KeyStore>) -> Self {
        Self { store }
    }

    /// Generates a unique key for `target` and commits the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Exhausted`] after [`MAX_ATTEMPTS`] collisions;
    /// the caller must surface this as a failed create, never retry it
    /// silently. Returns [`AppError::Unavailable`] if the key store cannot
    /// be reached.
    pub async fn generate(&self, target: &str) -> Result<Route, AppError> {
        for _ in 0..MAX_ATTEMPTS {
            // Fresh draw on every attempt; a constant candidate would make
            // the retry loop unable to resolve a collision at all.
            let candidate = candidate_key();

            if self.store.exists(&candidate).await? {
                continue;
            }

            if self.store.set_if_absent(&candidate, target).await? {
                return Ok(Route::new(candidate, target));
            }
            // Lost the reservation race; treat as a collision and redraw.
        }

        Err(AppError::exhausted(
            "Key space exhausted",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}

/// Derives one candidate key: SHA-256 over fresh random bytes, truncated to
/// [`KEY_LENGTH`] lowercase hex characters.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
fn candidate_key() -> String {
    let mut seed = [0u8; SEED_BYTES];
    getrandom::fill(&mut seed).expect("Failed to generate random bytes");

    let digest = Sha256::digest(seed);
    hex::encode(digest)[..KEY_LENGTH].to_string()
}

//! Share access key - the unguessable public handle of a share

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Fixed-length alphanumeric key that addresses a share publicly
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessKey(String);

impl AccessKey {
    /// Default key length (62^16 possible keys)
    pub const DEFAULT_LENGTH: usize = 16;

    /// Shortest key length accepted by configuration
    pub const MIN_LENGTH: usize = 12;

    /// Generate a random key from the thread-local CSPRNG
    pub fn generate(length: usize) -> Self {
        let length = length.max(Self::MIN_LENGTH);
        let mut rng = rand::thread_rng();
        let key = (0..length)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect();
        Self(key)
    }

    /// Wrap a key read back from storage or a request path
    pub fn from_string(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

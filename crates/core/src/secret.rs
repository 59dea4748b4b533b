use std::fmt;

use subtle::ConstantTimeEq;

/// The shared secret that authorizes create, update and delete requests.
///
/// Loaded once at startup and never mutated. `Debug` never prints the value.
#[derive(Clone)]
pub struct WriteSecret(String);

impl WriteSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Compare a client-supplied `auth` value against the secret.
    ///
    /// A missing value never matches, even when the configured secret is empty.
    pub fn verify(&self, candidate: Option<&str>) -> bool {
        match candidate {
            Some(candidate) => bool::from(self.0.as_bytes().ct_eq(candidate.as_bytes())),
            None => false,
        }
    }
}

impl fmt::Debug for WriteSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WriteSecret(<redacted>)")
    }
}

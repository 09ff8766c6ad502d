//! HTTP Basic credential verification.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Checks Basic auth credentials against the configured pair.
///
/// Both the supplied and the expected values are hashed with SHA-256 before
/// comparison so that the constant-time comparison always runs over 32 bytes,
/// whatever the input lengths.
pub struct AuthService {
    username_hash: [u8; 32],
    password_hash: [u8; 32],
}

impl AuthService {
    /// Creates a service for the given credentials.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username_hash: digest(username),
            password_hash: digest(password),
        }
    }

    /// Returns `true` when both username and password match.
    ///
    /// Both comparisons always run, so a wrong username takes as long to
    /// reject as a wrong password.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let username_match = digest(username)[..].ct_eq(&self.username_hash[..]);
        let password_match = digest(password)[..].ct_eq(&self.password_hash[..]);

        (username_match & password_match).into()
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

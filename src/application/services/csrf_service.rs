//! CSRF token issuing and verification.

use hmac::{Hmac, Mac, digest::InvalidLength};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// A freshly issued CSRF pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfPair {
    /// Random value stored in the browser cookie.
    pub nonce: String,
    /// Value the browser must echo in the form field or `X-CSRF-Token` header.
    pub token: String,
}

/// Signed double-submit CSRF protection.
///
/// The cookie carries a random nonce; the form token is
/// `hex(HMAC-SHA256(secret, nonce))`. A cross-site attacker can neither read
/// the cookie nor forge a token for it without the server secret.
#[derive(Clone)]
pub struct CsrfService {
    mac: HmacSha256,
}

impl CsrfService {
    /// Creates a service keyed with `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLength`] if the HMAC implementation rejects the key.
    pub fn new(secret: &[u8]) -> Result<Self, InvalidLength> {
        Ok(Self {
            mac: HmacSha256::new_from_slice(secret)?,
        })
    }

    /// Generates a new random nonce and its token.
    pub fn issue(&self) -> CsrfPair {
        let nonce = hex::encode(rand::random::<[u8; 32]>());
        let token = self.token_for(&nonce);
        CsrfPair { nonce, token }
    }

    /// Returns the token matching `nonce`.
    pub fn token_for(&self, nonce: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(nonce.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Checks `token` against `nonce` in constant time.
    pub fn verify(&self, nonce: &str, token: &str) -> bool {
        let Ok(expected) = hex::decode(token) else {
            return false;
        };

        let mut mac = self.mac.clone();
        mac.update(nonce.as_bytes());
        mac.verify_slice(&expected).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CsrfService {
        CsrfService::new(b"0123456789abcdef0123456789abcdef").unwrap()
    }

    #[test]
    fn test_issue_pair_verifies() {
        let service = service();
        let pair = service.issue();

        assert_eq!(pair.nonce.len(), 64);
        assert_eq!(pair.token.len(), 64);
        assert!(service.verify(&pair.nonce, &pair.token));
    }

    #[test]
    fn test_issue_is_random() {
        let service = service();
        assert_ne!(service.issue().nonce, service.issue().nonce);
    }

    #[test]
    fn test_token_for_is_deterministic() {
        let service = service();
        assert_eq!(service.token_for("nonce"), service.token_for("nonce"));
    }

    #[test]
    fn test_verify_rejects_other_nonce() {
        let service = service();
        let pair = service.issue();
        let other = service.issue();

        assert!(!service.verify(&other.nonce, &pair.token));
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let pair = service().issue();
        let other = CsrfService::new(b"another-secret-another-secret-xx").unwrap();

        assert!(!other.verify(&pair.nonce, &pair.token));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let service = service();
        let pair = service.issue();

        assert!(!service.verify(&pair.nonce, "not-hex"));
        assert!(!service.verify(&pair.nonce, ""));
    }
}

//! Access gate for the admin view.
//!
//! A single shared secret guards the wish list. After a successful
//! password check the caller gets a session token of the form
//! `<nonce>.<hex hmac-sha256(secret, nonce)>`, which can be checked later
//! without any server-side state. Tokens never expire; rotating the secret
//! invalidates all of them.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

use crate::config::AdminConfig;
use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Length of the random part of a session token.
const NONCE_LENGTH: usize = 26;

/// Password check and session tokens for the admin view.
#[derive(Clone)]
pub struct AccessGate {
    secret: Option<String>,
}

impl AccessGate {
    /// Create a gate from the admin config.
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            secret: config.password.clone().filter(|s| !s.is_empty()),
        }
    }

    /// Whether an admin password is configured at all.
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Compare a submitted password against the configured secret.
    pub fn verify(&self, password: &str) -> Result<()> {
        let secret = self.secret()?;

        if constant_time_eq(password.as_bytes(), secret.as_bytes()) {
            Ok(())
        } else {
            warn!("Admin password rejected");
            Err(Error::InvalidPassword)
        }
    }

    /// Mint a session token for a caller that passed [`verify`](Self::verify).
    pub fn issue_session_token(&self) -> Result<String> {
        let secret = self.secret()?;
        let nonce = nanoid::nanoid!(NONCE_LENGTH);
        let signature = sign(secret, &nonce)?;
        Ok(format!("{}.{}", nonce, signature))
    }

    /// Check a token previously produced by [`issue_session_token`](Self::issue_session_token).
    pub fn validate_session_token(&self, token: &str) -> bool {
        let Some(secret) = self.secret.as_deref() else {
            return false;
        };
        let Some((nonce, signature)) = token.split_once('.') else {
            return false;
        };
        if nonce.is_empty() {
            return false;
        }

        match sign(secret, nonce) {
            Ok(expected) => constant_time_eq(expected.as_bytes(), signature.as_bytes()),
            Err(_) => false,
        }
    }

    fn secret(&self) -> Result<&str> {
        self.secret.as_deref().ok_or_else(|| {
            warn!("Admin password requested but none is configured");
            Error::MissingSecret
        })
    }
}

fn sign(secret: &str, nonce: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| Error::Internal(format!("HMAC key rejected: {}", e)))?;
    mac.update(nonce.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

//! Credential value type
//!
//! A username paired with a secret. The secret is held in a [`SecretString`]
//! so it is zeroized on drop and never shows up in `Debug` output.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// A (username, secret) pair handed to downstream authentication
///
/// Immutable once constructed; fields are only reachable through accessors.
#[derive(Clone)]
pub struct Credential {
    username: String,
    secret: SecretString,
}

impl Credential {
    /// Build a credential from a username and a secret
    pub fn new(username: impl Into<String>, secret: impl Into<SecretString>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// The username part of the credential
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The protected secret
    ///
    /// Call `expose_secret()` on the result only at the point of hand-off.
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// Compare username and secret with another credential
    pub fn same_as(&self, other: &Credential) -> bool {
        self.username == other.username
            && self.secret.expose_secret() == other.secret.expose_secret()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_secret() {
        let cred = Credential::new("alice", SecretString::from("hunter2"));
        let rendered = format!("{cred:?}");
        assert!(rendered.contains("alice"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn accessors_return_constructed_values() {
        let cred = Credential::new("bob", SecretString::from("s3cret"));
        assert_eq!(cred.username(), "bob");
        assert_eq!(cred.secret().expose_secret(), "s3cret");
    }

    #[test]
    fn same_as_compares_both_parts() {
        let a = Credential::new("alice", SecretString::from("one"));
        let b = Credential::new("alice", SecretString::from("one"));
        let c = Credential::new("alice", SecretString::from("two"));
        let d = Credential::new("carol", SecretString::from("one"));
        assert!(a.same_as(&b));
        assert!(!a.same_as(&c));
        assert!(!a.same_as(&d));
    }
}

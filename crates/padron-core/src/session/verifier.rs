//! Credential verification capability.

/// An abstract credential verifier.
///
/// The login flow only depends on this single synchronous check, so real
/// authentication backends can be plugged in without touching
/// `SessionManager`'s state machine.
pub trait CredentialVerifier: Send + Sync {
    /// Returns true when the pair is accepted.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Verifier accepting exactly one configured credential pair.
///
/// Placeholder implementation with no security value; it preserves the call
/// contract of the original hardcoded check and is meant to be replaced by a
/// real backend.
#[derive(Debug, Clone)]
pub struct StaticCredentialVerifier {
    username: String,
    password: String,
}

impl StaticCredentialVerifier {
    /// Creates a verifier for the given accepted pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_configured_pair() {
        let verifier = StaticCredentialVerifier::new("user", "password");
        assert!(verifier.verify("user", "password"));
    }

    #[test]
    fn test_rejects_everything_else() {
        let verifier = StaticCredentialVerifier::new("user", "password");
        assert!(!verifier.verify("user", "wrong"));
        assert!(!verifier.verify("admin", "password"));
        assert!(!verifier.verify("", ""));
    }
}

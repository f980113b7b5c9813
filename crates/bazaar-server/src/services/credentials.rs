//! Credential verification for the Basic auth gate

use async_trait::async_trait;

/// Verifies a username/password pair for the protected routes.
///
/// The default implementation holds the single configured entry; a real
/// identity backend can be swapped in behind this trait.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> bool;
}

/// Single-entry credential map held in process memory for the process
/// lifetime.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_verify() {
        let creds = StaticCredentials::new("admin".to_string(), "letmein".to_string());

        assert!(creds.verify("admin", "letmein").await);
        assert!(!creds.verify("admin", "wrong").await);
        assert!(!creds.verify("other", "letmein").await);
        assert!(!creds.verify("", "").await);
    }
}

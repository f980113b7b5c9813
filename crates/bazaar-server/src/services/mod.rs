//! Business logic services

pub mod credentials;

pub use credentials::{CredentialProvider, StaticCredentials};

//! Password hashing and verification.

pub mod hasher;
pub mod verifier;

pub use hasher::PasswordHasher;
pub use verifier::{StoredFormat, verify_password};

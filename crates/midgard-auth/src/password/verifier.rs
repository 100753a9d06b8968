//! Password verification across every encoding found in the `login` table.
//!
//! Accounts created by the game server or older web sites carry MD5
//! digests or even plaintext; accounts created here carry bcrypt or
//! Argon2id hashes. The encoding is never stored, so it is inferred from
//! the material itself, in a fixed order where the first match decides.

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordVerifier};

/// Length of a hex-encoded MD5 digest.
const MD5_HEX_LENGTH: usize = 32;

const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];
const ARGON2_PREFIX: &str = "$argon2";

/// Encoding inferred from stored password material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredFormat {
    /// Exactly 32 characters: treated as an MD5 hex digest.
    Md5Digest,
    /// bcrypt modular crypt string.
    Bcrypt,
    /// Argon2 PHC string.
    Argon2,
    /// Anything else, normally legacy plaintext.
    Unrecognized,
}

impl StoredFormat {
    /// Classify stored password material.
    ///
    /// Length is checked first, so a 32-character plaintext password is
    /// classified as a digest and can never match.
    pub fn detect(stored: &str) -> Self {
        if stored.chars().count() == MD5_HEX_LENGTH {
            Self::Md5Digest
        } else if BCRYPT_PREFIXES.iter().any(|p| stored.starts_with(p)) {
            Self::Bcrypt
        } else if stored.starts_with(ARGON2_PREFIX) {
            Self::Argon2
        } else {
            Self::Unrecognized
        }
    }

    /// Short name for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5Digest => "md5",
            Self::Bcrypt => "bcrypt",
            Self::Argon2 => "argon2",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Check `candidate` against stored password material.
///
/// Malformed adaptive hashes verify as `false`. No constant-time guarantee
/// is made for the legacy encodings.
pub fn verify_password(candidate: &str, stored: &str) -> bool {
    match StoredFormat::detect(stored) {
        StoredFormat::Md5Digest => md5_hex(candidate) == stored,
        StoredFormat::Bcrypt => bcrypt::verify(candidate, stored).unwrap_or(false),
        StoredFormat::Argon2 => verify_argon2(candidate, stored),
        StoredFormat::Unrecognized => {
            if stored == candidate {
                return true;
            }
            // Last resort: retry every legacy encoding before failing.
            md5_hex(candidate) == stored || stored == candidate
        }
    }
}

/// Lowercase hex MD5 digest of `input`.
pub fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

fn verify_argon2(candidate: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

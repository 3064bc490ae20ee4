//! Stored-credential verification.
//!
//! Stored values come in two schemes:
//!
//! - bcrypt hashes, recognized by the `$2` identifier prefix
//! - legacy plaintext, present only in seed data
//!
//! The plaintext path is insecure and exists solely so development seed users
//! can sign in; every use is logged at warn level. Removing it requires
//! hashing the seed passwords first.

/// Identifier prefix shared by the bcrypt variants (`$2a$`, `$2b$`, `$2y$`).
const BCRYPT_PREFIX: &str = "$2";

/// Compare a supplied plaintext password against a stored credential.
///
/// A bcrypt comparison failure (for example a truncated hash) is treated as a
/// mismatch, never surfaced as an error.
pub fn verify_password(supplied: &str, stored: &str) -> bool {
    if stored.starts_with(BCRYPT_PREFIX) {
        match bcrypt::verify(supplied, stored) {
            Ok(matched) => matched,
            Err(err) => {
                tracing::warn!(error = %err, "bcrypt verification failed, treating as mismatch");
                false
            }
        }
    } else {
        tracing::warn!("comparing against a non-hashed stored credential (legacy seed path)");
        supplied == stored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bcrypt_hash_matches_correct_password() {
        let hash = bcrypt::hash("123456", 4).unwrap();
        assert!(verify_password("123456", &hash));
    }

    #[test]
    fn bcrypt_hash_rejects_wrong_password() {
        let hash = bcrypt::hash("123456", 4).unwrap();
        assert!(!verify_password("654321", &hash));
    }

    #[test]
    fn malformed_bcrypt_hash_is_a_mismatch_not_an_error() {
        assert!(!verify_password("123456", "$2a$truncated"));
    }

    #[test]
    fn plaintext_stored_value_uses_exact_equality() {
        assert!(verify_password("123456", "123456"));
        assert!(!verify_password("123456", "1234567"));
    }

    #[test]
    fn plaintext_comparison_is_case_sensitive() {
        assert!(!verify_password("Secret", "secret"));
    }
}

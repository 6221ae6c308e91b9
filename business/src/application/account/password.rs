use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

/// Hashes a plain-text password with Argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verifies a plain-text password against a stored Argon2 hash.
/// An undecodable stored hash counts as a mismatch.
pub fn verify_password(stored_hash: &str, password: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_verify_password_against_own_hash() {
        let hash = hash_password("abcdefg1").unwrap();

        assert!(verify_password(&hash, "abcdefg1"));
        assert!(!verify_password(&hash, "abcdefg2"));
    }

    #[test]
    fn should_treat_garbage_hash_as_mismatch() {
        assert!(!verify_password("not-a-hash", "abcdefg1"));
    }

    #[test]
    fn should_salt_hashes_uniquely() {
        let first = hash_password("abcdefg1").unwrap();
        let second = hash_password("abcdefg1").unwrap();

        assert_ne!(first, second);
    }
}

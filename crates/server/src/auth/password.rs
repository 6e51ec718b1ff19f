use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a staff password with Argon2 and a fresh random salt.
/// The PHC string this returns is what goes in `users.password_hash`.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a login attempt against a stored PHC hash. A malformed stored
/// hash is an error; a mismatched password is `Ok(false)`.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(stored)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_staff_password() {
        let hash = hash_password("crestview-admin-2025").unwrap();
        assert!(verify_password("crestview-admin-2025", &hash).unwrap());
        assert!(!verify_password("crestview-admin-2024", &hash).unwrap());
    }

    #[test]
    fn salts_make_repeat_hashes_distinct() {
        let first = hash_password("changeme123").unwrap();
        let second = hash_password("changeme123").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("changeme123", &first).unwrap());
        assert!(verify_password("changeme123", &second).unwrap());
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}

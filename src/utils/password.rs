use bcrypt::{hash, verify, DEFAULT_COST};

pub fn hash_password(password: &str) -> String {
    hash(password, DEFAULT_COST).expect("Failed to hash password")
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_succeeds() {
        let hashed = hash_password("password123");
        assert!(verify_password("password123", &hashed));
        assert!(!verify_password("wrong-password", &hashed));
    }

    #[test]
    fn garbage_hash_verifies_false_instead_of_panicking() {
        assert!(!verify_password("password123", "not-a-bcrypt-hash"));
    }
}

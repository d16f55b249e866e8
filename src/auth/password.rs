use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest, matching the hash layout stored in
/// `users.password_hash`.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    to_hex(&digest)
}

pub fn verify_password(input: &str, stored_hash: &str) -> bool {
    hash_password(input) == stored_hash
}

pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_hex_sha256() {
        let hash = hash_password("secret12");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_verify_roundtrip() {
        let hash = hash_password("secret12");
        assert!(verify_password("secret12", &hash));
        assert!(!verify_password("secret13", &hash));
    }

    #[test]
    fn test_known_digest() {
        // sha256("abc")
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}

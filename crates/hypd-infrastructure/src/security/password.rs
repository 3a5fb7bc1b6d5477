use argon2::Argon2;
use base64::{engine::general_purpose, Engine as _};
use rand::RngCore;

const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;

/// Argon2id password hashing.
///
/// Stored form is `base64(salt)$base64(hash)`.
#[derive(Default, Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);

        let hash = self.derive(password, &salt)?;

        Ok(format!(
            "{}${}",
            general_purpose::STANDARD.encode(salt),
            general_purpose::STANDARD.encode(hash)
        ))
    }

    pub fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError> {
        let (salt_b64, hash_b64) = stored
            .split_once('$')
            .ok_or_else(|| PasswordError::InvalidFormat("missing separator".to_string()))?;

        let salt = general_purpose::STANDARD
            .decode(salt_b64)
            .map_err(|e| PasswordError::InvalidFormat(format!("salt: {}", e)))?;
        let expected = general_purpose::STANDARD
            .decode(hash_b64)
            .map_err(|e| PasswordError::InvalidFormat(format!("hash: {}", e)))?;

        let actual = self.derive(password, &salt)?;

        Ok(constant_time_eq(&actual, &expected))
    }

    fn derive(&self, password: &str, salt: &[u8]) -> Result<[u8; HASH_LEN], PasswordError> {
        let mut out = [0u8; HASH_LEN];
        self.argon2
            .hash_password_into(password.as_bytes(), salt, &mut out)
            .map_err(|e| PasswordError::KeyDerivation(e.to_string()))?;
        Ok(out)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("Invalid stored hash: {0}")]
    InvalidFormat(String),
}

//! A single credential entry. The cleartext halves live in secret buffers;
//! the only persistent representation is the auth pair, the AEAD ciphertext
//! of `username:password` with its nonce prefix.

use {
    crate::{crypto, error::GhostpassError, secret_buffer::SecretBuffer},
    zeroize::Zeroizing,
};

/// Byte separating the username from the password inside the encrypted pair.
/// Usernames must not contain it; the split happens on the first occurrence
/// so passwords may.
const PAIR_SEPARATOR: u8 = b':';

// TODO: deniable secret variant, gated behind a protocol version bump.
pub struct Field {
    username: SecretBuffer,
    password: SecretBuffer,
    auth_pair: Vec<u8>,
}

impl Field {
    /// Build a fully-materialized field: joins `username` and the password
    /// cleartext, encrypts the pair under `key` and keeps both halves sealed
    /// in their buffers.
    pub fn new(
        key: &[u8],
        username: &str,
        password: SecretBuffer,
    ) -> Result<Self, GhostpassError> {
        let auth_pair = {
            let cleartext = password.open()?;
            let mut pair =
                Zeroizing::new(Vec::with_capacity(username.len() + 1 + cleartext.len()));
            pair.extend_from_slice(username.as_bytes());
            pair.push(PAIR_SEPARATOR);
            pair.extend_from_slice(&cleartext);

            crypto::encrypt(key, &pair)?
        };

        Ok(Self {
            username: SecretBuffer::from(username),
            password,
            auth_pair,
        })
    }

    /// Partial field carrying only the persistent blob, as parsed from a
    /// serialized store. The cleartext buffers stay unavailable until
    /// [`Field::rederive_auth_pair`] runs with the store key.
    pub fn from_auth_pair(auth_pair: Vec<u8>) -> Self {
        Self {
            username: SecretBuffer::unavailable(),
            password: SecretBuffer::unavailable(),
            auth_pair,
        }
    }

    /// Decrypt the auth pair and refill the username and password buffers.
    ///
    /// Fails with [`GhostpassError::AuthenticationFailed`] under a wrong key
    /// or a tampered blob, and with [`GhostpassError::MalformedField`] when
    /// the decrypted pair has no separator.
    pub fn rederive_auth_pair(&mut self, key: &[u8]) -> Result<(), GhostpassError> {
        let pair = Zeroizing::new(crypto::decrypt(key, &self.auth_pair)?);

        let split = pair
            .iter()
            .position(|&b| b == PAIR_SEPARATOR)
            .ok_or(GhostpassError::MalformedField)?;

        self.username = SecretBuffer::from_bytes(pair[..split].to_vec());
        self.password = SecretBuffer::from_bytes(pair[split + 1..].to_vec());
        Ok(())
    }

    pub fn auth_pair(&self) -> &[u8] {
        &self.auth_pair
    }

    pub fn username(&self) -> &SecretBuffer {
        &self.username
    }

    pub fn password(&self) -> &SecretBuffer {
        &self.password
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field([Redacted])")
    }
}

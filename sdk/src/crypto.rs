//! Symmetric primitives behind the secret store: passphrase key derivation
//! and the secretbox AEAD with its prepended-nonce ciphertext layout.
//!
//! # Ciphertext format
//! `encrypt` emits `nonce(24) || secretbox(pt)` where `secretbox` is
//! XSalsa20-Poly1305 and the nonce is sampled fresh from the OS CSPRNG for
//! every call. `decrypt` expects the same layout. Nonce reuse under one key
//! breaks the scheme, hence no caller-supplied nonces.

use {
    crate::{error::GhostpassError, secret_buffer::SecretBuffer},
    crypto_secretbox::{
        aead::{Aead, KeyInit},
        Nonce,
        XSalsa20Poly1305,
    },
    rand::{rngs::OsRng, RngCore},
    sha2::{Digest, Sha256},
    zeroize::Zeroizing,
};

/// Symmetric key length in bytes.
pub const KEY_LEN: usize = 32;
/// Secretbox nonce length in bytes.
pub const NONCE_LEN: usize = 24;

/// Key derived from the master passphrase. Zeroed on drop; never serialized.
pub type SymmetricKey = Zeroizing<[u8; KEY_LEN]>;

/// Derive the store's symmetric key as the SHA-256 checksum of the master
/// passphrase. Consumes the buffer: the cleartext is hashed and scrubbed
/// before this returns.
///
/// No salt and no iteration count; the same passphrase always derives the
/// same key so that a store can be reopened and imports interoperate.
pub fn derive_key(mut passphrase: SecretBuffer) -> Result<SymmetricKey, GhostpassError> {
    let digest = {
        let cleartext = passphrase.open()?;
        Sha256::digest(&*cleartext)
    };
    passphrase.destroy();

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    key.copy_from_slice(&digest);
    Ok(key)
}

/// Encrypt `plaintext` under `key`, prepending the freshly sampled nonce.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, GhostpassError> {
    let cipher = cipher_for(key)?;

    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|e| GhostpassError::Crypto(e.to_string()))?;

    let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypt a `nonce || ciphertext` blob produced by [`encrypt`].
///
/// Fails with [`GhostpassError::AuthenticationFailed`] when the Poly1305 tag
/// rejects, which covers both a wrong key and a tampered blob.
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, GhostpassError> {
    let cipher = cipher_for(key)?;

    if ciphertext.len() < NONCE_LEN {
        return Err(GhostpassError::CiphertextTooShort {
            min: NONCE_LEN,
            got: ciphertext.len(),
        });
    }

    let (nonce, body) = ciphertext.split_at(NONCE_LEN);
    cipher
        .decrypt(Nonce::from_slice(nonce), body)
        .map_err(|_| GhostpassError::AuthenticationFailed)
}

fn cipher_for(key: &[u8]) -> Result<XSalsa20Poly1305, GhostpassError> {
    if key.len() != KEY_LEN {
        return Err(GhostpassError::InvalidKeyLength {
            expected: KEY_LEN,
            got: key.len(),
        });
    }

    XSalsa20Poly1305::new_from_slice(key).map_err(|e| GhostpassError::Crypto(e.to_string()))
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches};

    fn key() -> [u8; KEY_LEN] {
        [7u8; KEY_LEN]
    }

    #[test]
    fn derived_key_is_32_bytes_for_any_passphrase() {
        for passphrase in ["", "hunter2", "a much longer passphrase with spaces"] {
            let key = derive_key(SecretBuffer::from(passphrase)).unwrap();
            assert_eq!(key.len(), KEY_LEN);
        }
    }

    #[test]
    fn derive_key_is_deterministic_and_scrubs_the_buffer() {
        let a = derive_key(SecretBuffer::from("hunter2")).unwrap();
        let b = derive_key(SecretBuffer::from("hunter2")).unwrap();
        let c = derive_key(SecretBuffer::from("hunter3")).unwrap();

        assert_eq!(*a, *b);
        assert_ne!(*a, *c);
    }

    #[test]
    fn encrypt_decrypt_roundtrip() {
        for message in [&b""[..], b"x", b"alice:s3cret", &[0u8; 1024]] {
            let ct = encrypt(&key(), message).unwrap();
            assert_eq!(decrypt(&key(), &ct).unwrap(), message);
        }
    }

    #[test]
    fn encrypt_rejects_bad_key_length() {
        assert_matches!(
            encrypt(&[0u8; 16], b"msg"),
            Err(GhostpassError::InvalidKeyLength {
                expected: KEY_LEN,
                got: 16
            })
        );
        assert_matches!(
            decrypt(&[0u8; 31], b"ct"),
            Err(GhostpassError::InvalidKeyLength { .. })
        );
    }

    #[test]
    fn decrypt_rejects_truncated_ciphertext() {
        assert_matches!(
            decrypt(&key(), &[0u8; NONCE_LEN - 1]),
            Err(GhostpassError::CiphertextTooShort {
                min: NONCE_LEN,
                got: 23
            })
        );
    }

    #[test]
    fn tampering_any_bit_fails_authentication() {
        let ct = encrypt(&key(), b"alice:s3cret").unwrap();

        for byte in 0..ct.len() {
            let mut tampered = ct.clone();
            tampered[byte] ^= 0x01;
            assert_matches!(
                decrypt(&key(), &tampered),
                Err(GhostpassError::AuthenticationFailed),
                "flipping a bit in byte {byte} must be detected"
            );
        }
    }

    #[test]
    fn wrong_key_fails_authentication() {
        let ct = encrypt(&key(), b"msg").unwrap();
        assert_matches!(
            decrypt(&[8u8; KEY_LEN], &ct),
            Err(GhostpassError::AuthenticationFailed)
        );
    }

    #[test]
    fn nonces_are_fresh_per_call() {
        let a = encrypt(&key(), b"same message").unwrap();
        let b = encrypt(&key(), b"same message").unwrap();

        assert_ne!(a, b, "identical inputs must not repeat ciphertexts");
        assert_ne!(a[..NONCE_LEN], b[..NONCE_LEN]);
    }
}

use thiserror::Error;

/// Unified error kinds surfaced by every fallible store operation.
///
/// [`GhostpassError::AuthenticationFailed`] deserves a note: it is how a
/// wrong master passphrase shows up when opening or importing a store, so
/// callers can catch it and prompt again.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GhostpassError {
    /// Symmetric key material did not have the expected length.
    #[error("invalid symmetric key length (expected {expected} bytes, got {got})")]
    InvalidKeyLength { expected: usize, got: usize },

    /// Wrong passphrase or tampered ciphertext.
    #[error("authentication failed: wrong passphrase or tampered ciphertext")]
    AuthenticationFailed,

    /// Ciphertext shorter than its mandatory nonce prefix.
    #[error("ciphertext too short (expected at least {min} bytes, got {got})")]
    CiphertextTooShort { min: usize, got: usize },

    /// A decrypted credential pair could not be split back into its halves.
    #[error("malformed field: credential pair could not be reconstructed")]
    MalformedField,

    /// The persistent store data failed to parse.
    #[error("malformed store JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("secret store `{0}` already exists")]
    StoreAlreadyExists(String),

    #[error("secret store `{0}` does not exist; create it before opening")]
    StoreNotFound(String),

    #[error("no entry found for service `{0}`")]
    FieldNotFound(String),

    /// Import was handed a corpus without any zero-width payload.
    #[error("no hidden payload detected in corpus")]
    NoHiddenPayload,

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Attempt to read a secret buffer whose contents were already scrubbed.
    #[error("secret unavailable: buffer contents already scrubbed")]
    SecretUnavailable,

    /// Cryptographic failure (unexpected in normal operation).
    #[error("cryptography failure: {0}")]
    Crypto(String),
}

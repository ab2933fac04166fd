//! Owning container for secret bytes. Every cryptographic input (master
//! passphrase, usernames, passwords) flows through [`SecretBuffer`] so that
//! the window in which cleartext sits in process memory stays narrow. Also
//! implements a redacted display that avoids leaking the secret in logs.
//!
//! The buffer zeroes its contents when dropped on any control path. Reading
//! requires an explicit [`SecretBuffer::open`], which hands out a short-lived
//! [`SecretView`]; the view itself never copies the bytes.

use {
    crate::error::GhostpassError,
    std::ops::Deref,
    zeroize::Zeroizing,
};

pub struct SecretBuffer {
    bytes: Option<Zeroizing<Vec<u8>>>,
}

impl SecretBuffer {
    /// Take ownership of `bytes`. The caller must not retain aliasing copies.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Some(Zeroizing::new(bytes)),
        }
    }

    /// Placeholder for a buffer whose contents have yet to be rederived.
    /// Opening it fails with [`GhostpassError::SecretUnavailable`].
    pub(crate) fn unavailable() -> Self {
        Self { bytes: None }
    }

    /// Transition the buffer into its sealed state.
    ///
    /// Access already goes through [`SecretBuffer::open`] and the contents
    /// are scrubbed on drop, so sealing does not change representation; it
    /// exists so call sites read as `buffer.seal()` at the hand-off points
    /// where cleartext stops being touched directly.
    pub fn seal(self) -> Self {
        self
    }

    /// Expose the cleartext through a read-only scoped view.
    pub fn open(&self) -> Result<SecretView<'_>, GhostpassError> {
        match &self.bytes {
            Some(bytes) => Ok(SecretView(bytes)),
            None => Err(GhostpassError::SecretUnavailable),
        }
    }

    /// Zero the bytes and release them. Idempotent; any later
    /// [`SecretBuffer::open`] fails with [`GhostpassError::SecretUnavailable`].
    pub fn destroy(&mut self) {
        // Zeroizing scrubs the allocation as it drops.
        self.bytes = None;
    }

    pub fn is_destroyed(&self) -> bool {
        self.bytes.is_none()
    }
}

impl From<String> for SecretBuffer {
    /// Moves the string's allocation into the buffer; no cleartext copy is
    /// left behind.
    fn from(s: String) -> Self {
        Self::from_bytes(s.into_bytes())
    }
}

impl From<&str> for SecretBuffer {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes().to_vec())
    }
}

impl std::fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBuffer([Redacted])")
    }
}

impl std::fmt::Display for SecretBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBuffer([Redacted])")
    }
}

/// Read-only view into an open [`SecretBuffer`]. Dropping the view does not
/// zero the underlying buffer; the buffer itself owns the scrubbing.
pub struct SecretView<'a>(&'a [u8]);

impl SecretView<'_> {
    /// Interpret the secret as UTF-8.
    pub fn as_str(&self) -> Result<&str, GhostpassError> {
        std::str::from_utf8(self.0).map_err(|_| GhostpassError::MalformedField)
    }
}

impl Deref for SecretView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.0
    }
}

impl std::fmt::Debug for SecretView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretView([Redacted])")
    }
}

impl std::fmt::Display for SecretView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretView([Redacted])")
    }
}

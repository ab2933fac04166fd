//! Core cryptosystem behind Ghostpass: a single-user secret store that
//! persists on disk in its stationary form and exports in plainsight form,
//! hidden inside an arbitrary carrier text as zero-width code points.
//!
//! The store maps service names to credential fields. Each field persists
//! only as an auth pair, the XSalsa20-Poly1305 ciphertext of
//! `username:password` with a random 24-byte nonce prefix; the symmetric key
//! is the SHA-256 checksum of the master passphrase and never touches any
//! serialization. Cleartext lives in [`SecretBuffer`]s that zero themselves
//! on drop.
//!
//! # Example
//! ```rust,no_run
//! # use ghostpass_sdk::{GhostpassError, SecretBuffer, SecretStore, Workspace};
//! #
//! fn main() -> Result<(), GhostpassError> {
//!     let workspace = Workspace::open_default()?;
//!
//!     let mut store = SecretStore::init(&workspace, "personal", "hunter2".into())?;
//!     store.add_field("github", "alice", SecretBuffer::from("s3cret"))?;
//!     store.commit()?;
//!
//!     // hide the whole store inside an innocuous text...
//!     let artifact = store.export("The quick brown fox.\n")?;
//!
//!     // ...and reconstruct it elsewhere with the same passphrase
//!     let imported = SecretStore::import(&workspace, "hunter2".into(), &artifact)?;
//!     let (_, username, password) = imported.get_field("github")?;
//!     # let _ = (username, password);
//!     Ok(())
//! }
//! ```

pub mod crypto;
pub mod error;
pub mod field;
pub mod secret_buffer;
pub mod ser;
pub mod stego;
pub mod store;
pub mod workspace;

pub use {
    error::GhostpassError,
    secret_buffer::{SecretBuffer, SecretView},
    store::{SecretStore, StoreState, VERSION},
    workspace::Workspace,
};

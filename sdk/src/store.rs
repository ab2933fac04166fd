//! The top-level secret store entity: lifecycle against the workspace,
//! field CRUD, and plainsight import/export.

use {
    crate::{
        crypto::{self, SymmetricKey},
        error::GhostpassError,
        field::Field,
        secret_buffer::SecretBuffer,
        ser,
        stego,
        workspace::Workspace,
    },
    serde::{Deserialize, Serialize},
    std::{collections::HashMap, fs, path::PathBuf},
};

/// Current protocol version stamped into marshalled stores.
pub const VERSION: u32 = 2;

/// Which serialized form a store came from or is headed to. In-memory stores
/// are always stationary; the plainsight state only ever appears inside an
/// exported payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreState {
    Stationary,
    Plainsight,
}

impl std::fmt::Display for StoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreState::Stationary => write!(f, "Stationary"),
            StoreState::Plainsight => write!(f, "Plainsight"),
        }
    }
}

/// A named collection of encrypted credential fields bound to one symmetric
/// key. The key is derived from the master passphrase on construction and
/// never serialized; buffers and key zero themselves when the store drops.
pub struct SecretStore {
    workspace: Workspace,
    version: u32,
    state: StoreState,
    name: String,
    key: SymmetricKey,
    fields: HashMap<String, Field>,
}

impl SecretStore {
    /// Create a fresh, empty store and its backing file
    /// `<workspace>/<name>.gp`.
    pub fn init(
        workspace: &Workspace,
        name: &str,
        passphrase: SecretBuffer,
    ) -> Result<Self, GhostpassError> {
        let dbpath = workspace.dbpath(name);
        if dbpath.exists() {
            return Err(GhostpassError::StoreAlreadyExists(name.to_owned()));
        }

        let key = crypto::derive_key(passphrase)?;
        fs::File::create(&dbpath)?;

        Ok(Self {
            workspace: workspace.clone(),
            version: VERSION,
            state: StoreState::Stationary,
            name: name.to_owned(),
            key,
            fields: HashMap::new(),
        })
    }

    /// Load an existing store from its stationary on-disk form.
    ///
    /// A wrong passphrase surfaces as
    /// [`GhostpassError::AuthenticationFailed`] from the field rederivation.
    pub fn open(
        workspace: &Workspace,
        name: &str,
        passphrase: SecretBuffer,
    ) -> Result<Self, GhostpassError> {
        let dbpath = workspace.dbpath(name);
        if !dbpath.exists() {
            return Err(GhostpassError::StoreNotFound(name.to_owned()));
        }

        let data = fs::read(&dbpath)?;
        let key = crypto::derive_key(passphrase)?;

        ser::stationary_unmarshal(workspace, key, &data)
    }

    /// Reconstruct a store from a plainsight carrier text. The returned
    /// store is stationary, so a following [`SecretStore::commit`] writes
    /// the regular on-disk form.
    pub fn import(
        workspace: &Workspace,
        passphrase: SecretBuffer,
        corpus: &str,
    ) -> Result<Self, GhostpassError> {
        if !stego::contains_hidden(corpus) {
            return Err(GhostpassError::NoHiddenPayload);
        }

        let decoded = stego::decode_hidden(corpus);
        let key = crypto::derive_key(passphrase)?;

        ser::plainsight_unmarshal(workspace, key, &decoded)
    }

    pub fn field_exists(&self, service: &str) -> bool {
        self.fields.contains_key(service)
    }

    /// Insert a credential field for `service`, overwriting any present one.
    pub fn add_field(
        &mut self,
        service: &str,
        username: &str,
        password: SecretBuffer,
    ) -> Result<(), GhostpassError> {
        let field = Field::new(&*self.key, username, password)?;
        self.fields.insert(service.to_owned(), field);
        Ok(())
    }

    pub fn remove_field(&mut self, service: &str) -> Result<(), GhostpassError> {
        // the removed field's buffers zero as it drops
        self.fields
            .remove(service)
            .map(drop)
            .ok_or_else(|| GhostpassError::FieldNotFound(service.to_owned()))
    }

    /// Reveal one entry as `(service, username, password)` cleartext.
    /// The caller owns the returned strings and must treat them as secret.
    pub fn get_field(
        &self,
        service: &str,
    ) -> Result<(String, String, String), GhostpassError> {
        let field = self
            .fields
            .get(service)
            .ok_or_else(|| GhostpassError::FieldNotFound(service.to_owned()))?;

        let username = field.username().open()?;
        let password = field.password().open()?;

        Ok((
            service.to_owned(),
            username.as_str()?.to_owned(),
            password.as_str()?.to_owned(),
        ))
    }

    /// Unordered list of all service names.
    pub fn services(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Serialize the stationary form and overwrite the backing file
    /// (mode 0644). This is the only durability barrier; on error the
    /// in-memory state is ahead of disk and the caller may retry.
    pub fn commit(&self) -> Result<(), GhostpassError> {
        let data = ser::stationary_marshal(self)?;
        let dbpath = self.dbpath();

        fs::write(&dbpath, data)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&dbpath, fs::Permissions::from_mode(0o644))?;
        }

        Ok(())
    }

    /// Delete the backing file and consume the store. The in-memory scrub
    /// happens on drop either way: every field buffer and the symmetric key
    /// zero themselves.
    pub fn destroy(self) -> Result<(), GhostpassError> {
        fs::remove_file(self.dbpath())?;
        Ok(())
    }

    /// Produce the plainsight artifact: the untouched corpus followed by the
    /// marshalled store as zero-width code points.
    pub fn export(&self, corpus: &str) -> Result<String, GhostpassError> {
        let data = ser::plainsight_marshal(self)?;
        Ok(stego::encode_hidden(corpus, &data))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    fn dbpath(&self) -> PathBuf {
        self.workspace.dbpath(&self.name)
    }

    pub(crate) fn key(&self) -> &[u8] {
        &*self.key
    }

    pub(crate) fn fields(&self) -> &HashMap<String, Field> {
        &self.fields
    }

    pub(crate) fn from_parts(
        workspace: Workspace,
        version: u32,
        state: StoreState,
        name: String,
        key: SymmetricKey,
        fields: HashMap<String, Field>,
    ) -> Self {
        Self {
            workspace,
            version,
            state,
            name,
            key,
            fields,
        }
    }
}

impl std::fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretStore")
            .field("version", &self.version)
            .field("state", &self.state)
            .field("name", &self.name)
            .field("fields", &self.fields.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches, tempfile::TempDir};

    fn workspace() -> (TempDir, Workspace) {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::at(dir.path().join("ghostpass")).unwrap();
        (dir, workspace)
    }

    #[test]
    fn init_creates_empty_file_and_store() {
        let (_dir, workspace) = workspace();

        let store =
            SecretStore::init(&workspace, "test", SecretBuffer::from("hunter2")).unwrap();

        assert_eq!(store.name(), "test");
        assert_eq!(store.version(), VERSION);
        assert_eq!(store.state(), StoreState::Stationary);
        assert!(store.services().is_empty());
        assert!(workspace.dbpath("test").exists());
    }

    #[test]
    fn init_twice_fails() {
        let (_dir, workspace) = workspace();

        SecretStore::init(&workspace, "test", SecretBuffer::from("hunter2")).unwrap();
        assert_matches!(
            SecretStore::init(&workspace, "test", SecretBuffer::from("hunter2")),
            Err(GhostpassError::StoreAlreadyExists(name)) if name == "test"
        );
    }

    #[test]
    fn open_missing_store_fails() {
        let (_dir, workspace) = workspace();

        assert_matches!(
            SecretStore::open(&workspace, "nope", SecretBuffer::from("hunter2")),
            Err(GhostpassError::StoreNotFound(name)) if name == "nope"
        );
    }

    #[test]
    fn add_get_remove_field() {
        let (_dir, workspace) = workspace();
        let mut store =
            SecretStore::init(&workspace, "test", SecretBuffer::from("hunter2")).unwrap();

        store
            .add_field("github", "alice", SecretBuffer::from("s3cret"))
            .unwrap();

        assert!(store.field_exists("github"));
        assert_eq!(
            store.get_field("github").unwrap(),
            (
                "github".to_owned(),
                "alice".to_owned(),
                "s3cret".to_owned()
            )
        );

        store.remove_field("github").unwrap();
        assert!(!store.field_exists("github"));
        assert_matches!(
            store.remove_field("github"),
            Err(GhostpassError::FieldNotFound(_))
        );
        assert_matches!(
            store.get_field("github"),
            Err(GhostpassError::FieldNotFound(_))
        );
    }

    #[test]
    fn add_field_overwrites_existing_entry() {
        let (_dir, workspace) = workspace();
        let mut store =
            SecretStore::init(&workspace, "test", SecretBuffer::from("hunter2")).unwrap();

        store
            .add_field("github", "alice", SecretBuffer::from("old"))
            .unwrap();
        store
            .add_field("github", "bob", SecretBuffer::from("new"))
            .unwrap();

        let (_, username, password) = store.get_field("github").unwrap();
        assert_eq!((username.as_str(), password.as_str()), ("bob", "new"));
        assert_eq!(store.services().len(), 1);
    }

    #[test]
    fn destroy_removes_backing_file() {
        let (_dir, workspace) = workspace();
        let store =
            SecretStore::init(&workspace, "test", SecretBuffer::from("hunter2")).unwrap();
        let dbpath = workspace.dbpath("test");

        assert!(dbpath.exists());
        store.destroy().unwrap();
        assert!(!dbpath.exists());
    }
}

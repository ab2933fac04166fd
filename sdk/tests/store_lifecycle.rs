//! End-to-end lifecycle tests against a real (temporary) workspace:
//! persistence, wrong-passphrase detection, on-disk tampering, and the
//! plainsight export/import loop.

use {
    assert_matches::assert_matches,
    ghostpass_sdk::{GhostpassError, SecretBuffer, SecretStore, StoreState, Workspace},
    tempfile::TempDir,
};

const CORPUS: &str = "The quick brown fox.\n";

fn workspace() -> (TempDir, Workspace) {
    let dir = TempDir::new().unwrap();
    let workspace = Workspace::at(dir.path().join("ghostpass")).unwrap();
    (dir, workspace)
}

fn seeded_store(workspace: &Workspace) -> SecretStore {
    let mut store =
        SecretStore::init(workspace, "test", SecretBuffer::from("hunter2")).unwrap();
    store
        .add_field("github", "alice", SecretBuffer::from("s3cret"))
        .unwrap();
    store
}

#[test]
fn init_add_get() {
    let (_dir, workspace) = workspace();
    let store = seeded_store(&workspace);

    assert_eq!(
        store.get_field("github").unwrap(),
        (
            "github".to_owned(),
            "alice".to_owned(),
            "s3cret".to_owned()
        )
    );
}

#[test]
fn fields_survive_commit_and_reopen() {
    let (_dir, workspace) = workspace();

    let store = seeded_store(&workspace);
    store.commit().unwrap();
    drop(store);

    let reopened =
        SecretStore::open(&workspace, "test", SecretBuffer::from("hunter2")).unwrap();

    assert_eq!(reopened.state(), StoreState::Stationary);
    assert_eq!(
        reopened.get_field("github").unwrap(),
        (
            "github".to_owned(),
            "alice".to_owned(),
            "s3cret".to_owned()
        )
    );
}

#[test]
fn open_with_wrong_passphrase_fails_authentication() {
    let (_dir, workspace) = workspace();

    seeded_store(&workspace).commit().unwrap();

    assert_matches!(
        SecretStore::open(&workspace, "test", SecretBuffer::from("wrong")),
        Err(GhostpassError::AuthenticationFailed)
    );
}

#[test]
fn tampered_database_fails_authentication() {
    let (_dir, workspace) = workspace();

    seeded_store(&workspace).commit().unwrap();

    // corrupt one character inside the base64 auth pair payload on disk
    let dbpath = workspace.dbpath("test");
    let mut data = std::fs::read(&dbpath).unwrap();
    let marker = b"\"authpair\":\"";
    let start = data
        .windows(marker.len())
        .position(|window| window == marker)
        .unwrap()
        + marker.len();
    data[start + 4] = if data[start + 4] == b'A' { b'B' } else { b'A' };
    std::fs::write(&dbpath, data).unwrap();

    assert_matches!(
        SecretStore::open(&workspace, "test", SecretBuffer::from("hunter2")),
        Err(GhostpassError::AuthenticationFailed)
    );
}

#[test]
fn export_keeps_carrier_and_import_restores_fields() {
    let (_dir, workspace) = workspace();
    let store = seeded_store(&workspace);

    let artifact = store.export(CORPUS).unwrap();

    // the carrier text leads verbatim, followed only by zero-width runes
    assert!(artifact.starts_with(CORPUS));
    assert!(artifact[CORPUS.len()..]
        .chars()
        .all(|c| c == '\u{200D}' || c == '\u{200C}'));

    let imported =
        SecretStore::import(&workspace, SecretBuffer::from("hunter2"), &artifact).unwrap();

    assert_eq!(imported.state(), StoreState::Stationary);
    assert_eq!(imported.name(), "test");
    assert_eq!(
        imported.get_field("github").unwrap(),
        store.get_field("github").unwrap()
    );
}

#[test]
fn imported_store_commits_the_stationary_form() {
    let (_dir, workspace) = workspace();

    let artifact = {
        let store = seeded_store(&workspace);
        let artifact = store.export(CORPUS).unwrap();
        // drop the original database so import owns the name again
        store.destroy().unwrap();
        artifact
    };

    let imported =
        SecretStore::import(&workspace, SecretBuffer::from("hunter2"), &artifact).unwrap();
    imported.commit().unwrap();

    let reopened =
        SecretStore::open(&workspace, "test", SecretBuffer::from("hunter2")).unwrap();
    assert_eq!(
        reopened.get_field("github").unwrap(),
        (
            "github".to_owned(),
            "alice".to_owned(),
            "s3cret".to_owned()
        )
    );
}

#[test]
fn import_with_wrong_passphrase_fails_authentication() {
    let (_dir, workspace) = workspace();

    let artifact = seeded_store(&workspace).export(CORPUS).unwrap();

    assert_matches!(
        SecretStore::import(&workspace, SecretBuffer::from("wrong"), &artifact),
        Err(GhostpassError::AuthenticationFailed)
    );
}

#[test]
fn import_without_payload_is_rejected() {
    let (_dir, workspace) = workspace();

    assert_matches!(
        SecretStore::import(
            &workspace,
            SecretBuffer::from("hunter2"),
            "plain text with no zero-widths"
        ),
        Err(GhostpassError::NoHiddenPayload)
    );
}

#[test]
fn export_import_many_fields() {
    let (_dir, workspace) = workspace();

    let mut store =
        SecretStore::init(&workspace, "test", SecretBuffer::from("hunter2")).unwrap();
    for i in 0..16 {
        store
            .add_field(
                &format!("service-{i}"),
                &format!("user-{i}"),
                SecretBuffer::from(format!("password-{i}")),
            )
            .unwrap();
    }

    let artifact = store.export(CORPUS).unwrap();
    let imported =
        SecretStore::import(&workspace, SecretBuffer::from("hunter2"), &artifact).unwrap();

    assert_eq!(imported.services().len(), 16);
    for i in 0..16 {
        let (_, username, password) = imported.get_field(&format!("service-{i}")).unwrap();
        assert_eq!(username, format!("user-{i}"));
        assert_eq!(password, format!("password-{i}"));
    }
}

//! De/serialization of the two store shapes.
//!
//! Both shapes share the `version`/`state`/`name` header but differ in how
//! `fields` travels:
//!
//! - **Stationary** (at rest on this host): service names in the clear, one
//!   nested object per entry holding only the base64 auth pair.
//! - **Plainsight** (exported for distribution): no nested objects, and the
//!   service names are themselves encrypted so the artifact leaks neither
//!   credentials nor which services it covers.
//!
//! Modelling these as two distinct wire structs keeps the asymmetry
//! structural: the symmetric key has no field to land in, and a stationary
//! file can never accidentally carry cleartext service names in the
//! plainsight shape or vice versa.

use {
    crate::{
        crypto::{self, SymmetricKey},
        error::GhostpassError,
        field::Field,
        store::{SecretStore, StoreState, VERSION},
        workspace::Workspace,
    },
    base64::{engine::general_purpose, Engine as _},
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

/// Wire form of one stationary field entry.
#[derive(Serialize, Deserialize)]
struct StationaryField {
    #[serde(with = "base64_bytes")]
    authpair: Vec<u8>,
}

/// Wire form of a store at rest: `{ service: { "authpair": .. } }`.
#[derive(Serialize, Deserialize)]
struct StationaryStore {
    version: u32,
    state: StoreState,
    name: String,
    fields: HashMap<String, StationaryField>,
}

/// Wire form of an exported store: `{ base64(enc(service)): base64(authpair) }`.
#[derive(Serialize, Deserialize)]
struct PlainsightStore {
    version: u32,
    state: StoreState,
    name: String,
    fields: HashMap<String, String>,
}

/// Serialize the stationary JSON. The symmetric key, usernames and passwords
/// never appear; each entry persists only its auth pair.
pub fn stationary_marshal(store: &SecretStore) -> Result<Vec<u8>, GhostpassError> {
    let fields = store
        .fields()
        .iter()
        .map(|(service, field)| {
            (
                service.clone(),
                StationaryField {
                    authpair: field.auth_pair().to_vec(),
                },
            )
        })
        .collect();

    let wire = StationaryStore {
        version: store.version(),
        state: StoreState::Stationary,
        name: store.name().to_owned(),
        fields,
    };

    Ok(serde_json::to_vec(&wire)?)
}

/// Parse a stationary JSON blob and rederive every field under `key`.
///
/// A wrong passphrase shows up here: the first field whose auth pair fails
/// to authenticate aborts the whole unmarshal with
/// [`GhostpassError::AuthenticationFailed`].
pub fn stationary_unmarshal(
    workspace: &Workspace,
    key: SymmetricKey,
    serialized: &[u8],
) -> Result<SecretStore, GhostpassError> {
    let wire: StationaryStore = serde_json::from_slice(serialized)?;

    let mut fields = HashMap::with_capacity(wire.fields.len());
    for (service, entry) in wire.fields {
        let mut field = Field::from_auth_pair(entry.authpair);
        field.rederive_auth_pair(&*key)?;
        fields.insert(service, field);
    }

    Ok(SecretStore::from_parts(
        workspace.clone(),
        wire.version,
        StoreState::Stationary,
        wire.name,
        key,
        fields,
    ))
}

/// Serialize the plainsight JSON: every service name is encrypted under the
/// store key for indistinguishability, and entries flatten to
/// `base64(enc(service)) -> base64(authpair)`.
pub fn plainsight_marshal(store: &SecretStore) -> Result<Vec<u8>, GhostpassError> {
    let mut encfields = HashMap::with_capacity(store.fields().len());
    for (service, field) in store.fields() {
        let encservice = crypto::encrypt(store.key(), service.as_bytes())?;

        encfields.insert(
            general_purpose::STANDARD.encode(encservice),
            general_purpose::STANDARD.encode(field.auth_pair()),
        );
    }

    let wire = PlainsightStore {
        version: VERSION,
        state: StoreState::Plainsight,
        name: store.name().to_owned(),
        fields: encfields,
    };

    Ok(serde_json::to_vec(&wire)?)
}

/// Parse a plainsight JSON blob: decrypt each service name, rebuild its
/// field from the auth pair, and hand back a stationary store ready to
/// commit. Any decrypt failure aborts with
/// [`GhostpassError::AuthenticationFailed`].
pub fn plainsight_unmarshal(
    workspace: &Workspace,
    key: SymmetricKey,
    serialized: &[u8],
) -> Result<SecretStore, GhostpassError> {
    let wire: PlainsightStore = serde_json::from_slice(serialized)?;

    let mut fields = HashMap::with_capacity(wire.fields.len());
    for (encservice, authpair) in wire.fields {
        let encservice = general_purpose::STANDARD
            .decode(encservice)
            .map_err(|_| GhostpassError::MalformedField)?;
        let authpair = general_purpose::STANDARD
            .decode(authpair)
            .map_err(|_| GhostpassError::MalformedField)?;

        let service = String::from_utf8(crypto::decrypt(&*key, &encservice)?)
            .map_err(|_| GhostpassError::MalformedField)?;

        let mut field = Field::from_auth_pair(authpair);
        field.rederive_auth_pair(&*key)?;
        fields.insert(service, field);
    }

    Ok(SecretStore::from_parts(
        workspace.clone(),
        wire.version,
        StoreState::Stationary,
        wire.name,
        key,
        fields,
    ))
}

mod base64_bytes {
    use {
        base64::{engine::general_purpose, Engine as _},
        serde::{Deserialize, Deserializer, Serializer},
    };

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        general_purpose::STANDARD
            .decode(encoded)
            .map_err(serde::de::Error::custom)
    }
}

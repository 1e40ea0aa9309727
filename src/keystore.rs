//! An in-memory store of the current key of every identity.
//!
//! Each entry sits behind its own read-write lock: updates of one identity
//! are serialized, while decrypts (of one identity or of many) share the
//! lock and run in parallel. Updates are compare-and-advance: the caller
//! names the version it read, and loses with `VersionMismatch` if another
//! writer advanced the key first.

use crate::ciphertext::Ciphertext;
use crate::engine::{PairingEngine, ScalarField};
use crate::ibe_err::IbeError;
use crate::identity::Identity;
use crate::oracle::Oracles;
use crate::param::{check_ciphersuite, SystemParameters};
use crate::user_key::UserKey;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

type Entry<E> = Arc<RwLock<UserKey<E>>>;

type Entries<E> = HashMap<Vec<u8>, Entry<E>>;

/// Identity -> current `UserKey`. Prior versions are not retained.
pub struct KeyStore<E: PairingEngine> {
    keys: RwLock<Entries<E>>,
}

impl<E: PairingEngine> Default for KeyStore<E> {
    fn default() -> Self {
        KeyStore {
            keys: RwLock::new(HashMap::new()),
        }
    }
}

impl<E: PairingEngine> KeyStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the key of an identity.
    /// Returns an error if
    /// * the key was issued under another ciphersuite
    /// * the key was issued for another identity
    /// * the identity already holds a key
    pub fn insert(&self, id: &Identity, key: UserKey<E>) -> Result<(), IbeError> {
        check_ciphersuite(E::CIPHERSUITE, key.ciphersuite())?;
        let expected: E::Scalar = id.to_scalar();
        if *key.id() != expected {
            tracing::debug!("refusing to file a key under another identity");
            return Err(IbeError::IdentityMismatch);
        }
        if expected.is_zero() {
            return Err(IbeError::DegenerateParameter("identity"));
        }

        let mut keys = self.keys.write();
        let slot = id.to_bytes();
        if keys.contains_key(&slot) {
            tracing::debug!("identity already registered");
            return Err(IbeError::IdentityExists);
        }
        keys.insert(slot, Arc::new(RwLock::new(key)));
        Ok(())
    }

    /// Removes the key of an identity and returns it.
    pub fn remove(&self, id: &Identity) -> Option<UserKey<E>> {
        let entry = self.keys.write().remove(&id.to_bytes())?;
        let key = entry.read().clone();
        Some(key)
    }

    fn entry(&self, id: &Identity) -> Result<Entry<E>, IbeError> {
        self.keys
            .read()
            .get(&id.to_bytes())
            .cloned()
            .ok_or(IbeError::UnknownIdentity)
    }

    /// Returns the current version of an identity's key.
    pub fn version(&self, id: &Identity) -> Result<u64, IbeError> {
        Ok(self.entry(id)?.read().version())
    }

    /// Returns a copy of the current key, e.g. for a caller that
    /// wants to roll back.
    pub fn snapshot(&self, id: &Identity) -> Result<UserKey<E>, IbeError> {
        Ok(self.entry(id)?.read().clone())
    }

    /// Advances the key of `id` by one version, provided that it is still
    /// at `expected_version`. Returns the new version.
    pub fn update(
        &self,
        id: &Identity,
        expected_version: u64,
        pp: &SystemParameters<E>,
        seed: &[u8],
    ) -> Result<u64, IbeError> {
        let entry = self.entry(id)?;
        let mut key = entry.write();
        if key.version() != expected_version {
            tracing::debug!(
                "lost an update race: expected version {}, found {}",
                expected_version,
                key.version()
            );
            return Err(IbeError::VersionMismatch {
                current: key.version(),
                target: expected_version + 1,
            });
        }
        key.update(pp, expected_version + 1, seed)?;
        Ok(key.version())
    }

    /// Decrypts with the current key of the ciphertext's recipient.
    /// Concurrent decrypts share the entry's read lock.
    pub fn decrypt<O: Oracles<E>>(
        &self,
        id: &Identity,
        ct: &Ciphertext<E>,
        pp: &SystemParameters<E>,
    ) -> Result<E::Gt, IbeError> {
        let entry = self.entry(id)?;
        let key = entry.read();
        ct.decrypt::<O>(&key, pp)
    }

    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }
}

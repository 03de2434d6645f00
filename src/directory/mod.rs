//! User directory
//!
//! Maps usernames to user records. Loaded from the store (or seeded) once,
//! mutated only by registration, and written back whole after every change.

pub mod seeds;

use log::{debug, info};
use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::storage::KeyValueStore;
use crate::user::UserRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    users: BTreeMap<String, UserRecord>,
}

impl Directory {
    /// Directory holding only the seed records.
    pub fn seeded() -> Self {
        let users = seeds::seed_records()
            .into_iter()
            .map(|u| (u.username.clone(), u))
            .collect();
        Self { users }
    }

    /// Reads the directory stored under `key`, seeding it if absent.
    ///
    /// A missing key is the normal first-run state. A value that does not
    /// parse is reported rather than silently replaced by the seeds.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Result<Self, StoreError> {
        let blob = match store.get(key)? {
            Some(blob) => blob,
            None => {
                info!("No stored directory under {:?}; using seed records", key);
                return Ok(Self::seeded());
            }
        };

        let mut users: BTreeMap<String, UserRecord> =
            serde_json::from_str(&blob).map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })?;

        for (username, record) in users.iter_mut() {
            record.username = username.clone();
        }

        info!("Loaded {} users from {:?}", users.len(), key);
        Ok(Self { users })
    }

    /// Overwrites the value under `key` with the full directory.
    pub fn save(&self, store: &mut dyn KeyValueStore, key: &str) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.users).map_err(StoreError::Encode)?;
        store.set(key, &blob)?;
        debug!("Saved {} users to {:?}", self.users.len(), key);
        Ok(())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn get(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    /// First record whose employee id equals `id`.
    pub fn find_by_employee_id(&self, id: &str) -> Option<&UserRecord> {
        self.users.values().find(|u| u.employee_id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.values()
    }

    pub(crate) fn insert(&mut self, record: UserRecord) {
        self.users.insert(record.username.clone(), record);
    }

    pub(crate) fn remove(&mut self, username: &str) -> Option<UserRecord> {
        self.users.remove(username)
    }
}

//! Persistence gateway for the profile and the measurement history.
//!
//! Exactly one profile and one bounded history list are kept under two
//! well-known keys. Reads never fail: a missing key, an unreadable store
//! or an undecodable payload all come back as "absent". Writes report
//! store failures to the caller.

use crate::store::KeyValueStore;
use crate::{Gender, HistoryRecord, Result, UnitSystem, UserProfile};
use serde::de::DeserializeOwned;

/// Key of the JSON-encoded [`UserProfile`]
pub const PROFILE_KEY: &str = "vitals_profile";

/// Key of the JSON-encoded history array, newest first
pub const HISTORY_KEY: &str = "vitals_history";

/// Maximum number of history records retained
pub const HISTORY_CAPACITY: usize = 50;

/// The profile used when none has been saved
pub fn default_profile() -> UserProfile {
    UserProfile {
        name: String::new(),
        age: 30,
        gender: Gender::Male,
        height: 170.0,
        weight: 70.0,
        unit_system: UnitSystem::Metric,
    }
}

/// Gateway over an injected key-value store
pub struct VitalsGateway<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> VitalsGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Load the saved profile, or `None` if absent or undecodable
    pub fn get_profile(&self) -> Option<UserProfile> {
        self.read_json(PROFILE_KEY)
    }

    /// Load the saved profile, falling back to [`default_profile`]
    pub fn profile_or_default(&self) -> UserProfile {
        self.get_profile().unwrap_or_else(default_profile)
    }

    /// Overwrite the stored profile entirely
    pub fn save_profile(&mut self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string(profile)?;
        self.store.set(PROFILE_KEY, &json)?;
        tracing::info!("Saved profile");
        Ok(())
    }

    /// Load the history, newest first. Empty if absent or undecodable.
    pub fn get_history(&self) -> Vec<HistoryRecord> {
        self.read_json(HISTORY_KEY).unwrap_or_default()
    }

    /// Prepend a record and keep only the newest [`HISTORY_CAPACITY`]
    pub fn save_history_record(&mut self, record: &HistoryRecord) -> Result<()> {
        self.store.update(HISTORY_KEY, |current| {
            let mut history: Vec<HistoryRecord> = current
                .as_deref()
                .and_then(|raw| decode(HISTORY_KEY, raw))
                .unwrap_or_default();

            history.insert(0, record.clone());
            if history.len() > HISTORY_CAPACITY {
                tracing::debug!(
                    "Evicting {} oldest history records",
                    history.len() - HISTORY_CAPACITY
                );
                history.truncate(HISTORY_CAPACITY);
            }

            Ok(serde_json::to_string(&history)?)
        })?;

        tracing::info!("Logged history record {}", record.id);
        Ok(())
    }

    /// Remove the profile and the history
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.store.remove(PROFILE_KEY)?;
        self.store.remove(HISTORY_KEY)?;
        tracing::info!("Cleared profile and history");
        Ok(())
    }

    pub(crate) fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key) {
            Ok(Some(raw)) => decode(key, &raw),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Unable to read {}: {}. Treating as absent.", key, e);
                None
            }
        }
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}. Treating as absent.", key, e);
            None
        }
    }
}

//! Step state store port.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Port for session-scoped per-step storage.
///
/// The contract is deliberately lossy-proof rather than fail-fast: `save`
/// and `load` never surface errors to the wizard. An adapter whose backing
/// storage becomes unavailable degrades to in-memory for the rest of the
/// session and reports it through `degraded()`, which the shell renders as
/// a non-blocking warning.
pub trait StepStore: Send + Sync {
    /// Overwrites the stored blob for a key. Called on every field
    /// mutation so accidental navigation or reload loses nothing.
    fn save(&self, key: &str, blob: Value);

    /// Returns the last-saved blob, or None if nothing was stored.
    fn load(&self, key: &str) -> Option<Value>;

    /// Removes one key's blob.
    fn clear(&self, key: &str);

    /// Removes every stored blob. Invoked on terminal success so a fresh
    /// session starts clean.
    fn clear_all(&self);

    /// True once the adapter has fallen back to in-memory-only storage.
    fn degraded(&self) -> bool;
}

/// Typed convenience layer over the JSON blob contract.
pub trait StepStoreExt: StepStore {
    /// Serialises and saves a typed value.
    fn save_typed<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(blob) => self.save(key, blob),
            Err(e) => tracing::warn!(key, error = %e, "Failed to serialize step blob"),
        }
    }

    /// Loads and deserialises a typed value. A stale or incompatible blob
    /// behaves like an absent one.
    fn load_typed<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let blob = self.load(key)?;
        match serde_json::from_value(blob) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding undecodable step blob");
                None
            }
        }
    }
}

impl<S: StepStore + ?Sized> StepStoreExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MapStore(Mutex<HashMap<String, Value>>);

    impl StepStore for MapStore {
        fn save(&self, key: &str, blob: Value) {
            self.0.lock().unwrap().insert(key.to_string(), blob);
        }
        fn load(&self, key: &str) -> Option<Value> {
            self.0.lock().unwrap().get(key).cloned()
        }
        fn clear(&self, key: &str) {
            self.0.lock().unwrap().remove(key);
        }
        fn clear_all(&self) {
            self.0.lock().unwrap().clear();
        }
        fn degraded(&self) -> bool {
            false
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blob {
        city: String,
    }

    #[test]
    fn typed_round_trip() {
        let store = MapStore(Mutex::new(HashMap::new()));
        store.save_typed(
            "step1_personal",
            &Blob {
                city: "Pune".to_string(),
            },
        );
        let loaded: Blob = store.load_typed("step1_personal").unwrap();
        assert_eq!(loaded.city, "Pune");
    }

    #[test]
    fn incompatible_blob_reads_as_absent() {
        let store = MapStore(Mutex::new(HashMap::new()));
        store.save("step1_personal", Value::String("not an object".to_string()));
        let loaded: Option<Blob> = store.load_typed("step1_personal");
        assert!(loaded.is_none());
    }
}

//! In-memory step store.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::StepStore;

/// Step store that lives only for the process lifetime. Used directly in
/// tests, and as the degradation target of [`super::SessionFileStore`].
#[derive(Debug, Default)]
pub struct InMemoryStepStore {
    blobs: Mutex<HashMap<String, Value>>,
}

impl InMemoryStepStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepStore for InMemoryStepStore {
    fn save(&self, key: &str, blob: Value) {
        self.blobs.lock().unwrap().insert(key.to_string(), blob);
    }

    fn load(&self, key: &str) -> Option<Value> {
        self.blobs.lock().unwrap().get(key).cloned()
    }

    fn clear(&self, key: &str) {
        self.blobs.lock().unwrap().remove(key);
    }

    fn clear_all(&self) {
        self.blobs.lock().unwrap().clear();
    }

    fn degraded(&self) -> bool {
        false
    }
}

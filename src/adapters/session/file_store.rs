//! File-backed session step store.
//!
//! Persists each step blob as `<key>.json` under a session directory so the
//! wizard survives a reload. If the directory becomes unwritable mid-session
//! (quota, permissions), the store degrades to in-memory for the remainder
//! of the session: saves keep working, reloads lose state, and `degraded()`
//! lets the shell show a non-blocking warning. Storage trouble never fails
//! the wizard.

use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::ports::StepStore;

pub struct SessionFileStore {
    dir: PathBuf,
    fallback: Mutex<HashMap<String, Value>>,
    degraded: AtomicBool,
}

impl SessionFileStore {
    /// Opens a store rooted at `dir`, creating it if needed. Creation
    /// failure immediately degrades to in-memory rather than erroring.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let degraded = match std::fs::create_dir_all(&dir) {
            Ok(()) => false,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Session storage unavailable, falling back to memory");
                true
            }
        };
        Self {
            dir,
            fallback: Mutex::new(HashMap::new()),
            degraded: AtomicBool::new(degraded),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are internal storage keys, never user input.
        self.dir.join(format!("{}.json", key))
    }

    fn mark_degraded(&self, context: &str, path: &Path, error: &std::io::Error) {
        if !self.degraded.swap(true, Ordering::Relaxed) {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "Session storage {} failed, continuing in-memory only",
                context
            );
        }
    }
}

impl StepStore for SessionFileStore {
    fn save(&self, key: &str, blob: Value) {
        if !self.degraded.load(Ordering::Relaxed) {
            let path = self.path_for(key);
            let bytes = blob.to_string();
            match std::fs::write(&path, bytes) {
                Ok(()) => return,
                Err(e) => self.mark_degraded("write", &path, &e),
            }
        }
        self.fallback.lock().unwrap().insert(key.to_string(), blob);
    }

    fn load(&self, key: &str) -> Option<Value> {
        if let Some(blob) = self.fallback.lock().unwrap().get(key) {
            return Some(blob.clone());
        }
        let path = self.path_for(key);
        let bytes = std::fs::read(&path).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(blob) => Some(blob),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Discarding corrupt step blob");
                None
            }
        }
    }

    fn clear(&self, key: &str) {
        self.fallback.lock().unwrap().remove(key);
        let path = self.path_for(key);
        if let Err(e) = std::fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "Failed to clear step blob");
            }
        }
    }

    fn clear_all(&self) {
        self.fallback.lock().unwrap().clear();
        if let Ok(entries) = std::fs::read_dir(&self.dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    let _ = std::fs::remove_file(path);
                }
            }
        }
    }

    fn degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }
}

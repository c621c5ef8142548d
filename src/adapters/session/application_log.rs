//! Completed-application log adapters.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::ports::{ApplicationLog, ApplicationLogError, CompletedApplication};

/// JSON-file-backed log: a single array of submission records, appended on
/// every verified success. Mirrors the longer-lived local store the web
/// shell keeps as a backup.
pub struct JsonFileApplicationLog {
    path: PathBuf,
    // Serialises read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileApplicationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn read_records(&self) -> Result<Vec<CompletedApplication>, ApplicationLogError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ApplicationLogError::Encode(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(ApplicationLogError::Io(e.to_string())),
        }
    }
}

impl ApplicationLog for JsonFileApplicationLog {
    fn append(&self, record: CompletedApplication) -> Result<(), ApplicationLogError> {
        let _guard = self.write_lock.lock().unwrap();
        let mut records = self.read_records()?;
        records.push(record);
        let bytes = serde_json::to_vec_pretty(&records)
            .map_err(|e| ApplicationLogError::Encode(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ApplicationLogError::Io(e.to_string()))?;
        }
        std::fs::write(&self.path, bytes).map_err(|e| ApplicationLogError::Io(e.to_string()))
    }

    fn all(&self) -> Result<Vec<CompletedApplication>, ApplicationLogError> {
        self.read_records()
    }
}

/// In-memory log for tests and headless runs.
#[derive(Debug, Default)]
pub struct InMemoryApplicationLog {
    records: Mutex<Vec<CompletedApplication>>,
}

impl InMemoryApplicationLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApplicationLog for InMemoryApplicationLog {
    fn append(&self, record: CompletedApplication) -> Result<(), ApplicationLogError> {
        self.records.lock().unwrap().push(record);
        Ok(())
    }

    fn all(&self) -> Result<Vec<CompletedApplication>, ApplicationLogError> {
        Ok(self.records.lock().unwrap().clone())
    }
}

//! Session storage adapters.

mod application_log;
mod file_store;
mod memory_store;

pub use application_log::{InMemoryApplicationLog, JsonFileApplicationLog};
pub use file_store::SessionFileStore;
pub use memory_store::InMemoryStepStore;

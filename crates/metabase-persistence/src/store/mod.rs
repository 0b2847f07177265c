pub mod atomic_writer;
pub mod json_file_store;
pub mod state_store;

pub use atomic_writer::AtomicWriter;
pub use json_file_store::{JsonEnvelope, JsonFileStore};
pub use state_store::StateStore;

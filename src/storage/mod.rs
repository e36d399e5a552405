pub mod json_store;

pub use json_store::{next_record_id, DataFile, JsonFileStore};

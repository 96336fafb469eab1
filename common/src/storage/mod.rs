mod key_value_store;
mod record_manager;
mod serializer;
mod validate;

pub use key_value_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use record_manager::{Record, RecordManager};
pub use serializer::{RecordSerializer, YamlSerializer};
pub use validate::Validate;

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{KeyValueStore, RecordSerializer, Validate, YamlSerializer};

/// A typed value persisted under a fixed storage key.
pub trait Record: Clone + Default + Validate + Serialize + for<'de> Deserialize<'de> {
    const KEY: &'static str;
}

pub struct RecordManager<TStore, TRecord, TSerializer = YamlSerializer>
where
    TStore: KeyValueStore,
    TRecord: Record,
    TSerializer: RecordSerializer<TRecord>,
{
    serializer: TSerializer,
    store: TStore,
    record: Arc<Mutex<Option<TRecord>>>,
}

impl<TStore, TRecord> RecordManager<TStore, TRecord, YamlSerializer>
where
    TStore: KeyValueStore,
    TRecord: Record,
{
    pub fn yaml(store: TStore) -> Self {
        Self::new(store, YamlSerializer::new())
    }
}

impl<TStore, TRecord, TSerializer> RecordManager<TStore, TRecord, TSerializer>
where
    TStore: KeyValueStore,
    TRecord: Record,
    TSerializer: RecordSerializer<TRecord>,
{
    pub fn new(store: TStore, serializer: TSerializer) -> Self {
        Self {
            serializer,
            store,
            record: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns the cached record, reading it from the store on first use.
    /// An absent key yields `TRecord::default()`.
    pub fn load(&self) -> Result<TRecord, String> {
        let mut current = self.lock()?;

        if let Some(record) = current.as_ref() {
            return Ok(record.clone());
        }

        let content = self.store.get(TRecord::KEY)?;
        if let Some(content) = content {
            let record = self.serializer.deserialize(&content)?;

            record
                .validate()
                .map_err(|e| format!("Record '{}' validation error: {}", TRecord::KEY, e))?;

            *current = Some(record.clone());
            return Ok(record);
        }

        Ok(TRecord::default())
    }

    /// Like [`load`](Self::load), but an absent key is also written out so
    /// the defaults show up in the store. Stored content that fails to parse
    /// or validate is left untouched and reported.
    pub fn load_or_create(&self) -> Result<TRecord, String> {
        if self.store.get(TRecord::KEY)?.is_some() {
            return self.load();
        }

        let record = TRecord::default();
        self.save(&record)?;
        Ok(record)
    }

    pub fn save(&self, record: &TRecord) -> Result<(), String> {
        record
            .validate()
            .map_err(|e| format!("Record '{}' validation error: {}", TRecord::KEY, e))?;

        let serialized = self.serializer.serialize(record)?;

        self.store.set(TRecord::KEY, &serialized)?;

        let mut current = self.lock()?;
        *current = Some(record.clone());
        Ok(())
    }

    /// Loads, applies `change`, saves, and returns the new value.
    pub fn update<F>(&self, change: F) -> Result<TRecord, String>
    where
        F: FnOnce(&mut TRecord),
    {
        let mut record = self.load()?;
        change(&mut record);
        self.save(&record)?;
        Ok(record)
    }

    pub fn reset(&self) -> Result<TRecord, String> {
        let record = TRecord::default();
        self.save(&record)?;
        Ok(record)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<TRecord>>, String> {
        self.record
            .lock()
            .map_err(|_| format!("Record '{}' cache lock poisoned", TRecord::KEY))
    }
}

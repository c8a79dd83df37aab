// src/session/cache.rs
use crate::data::Records;
use crate::error::Result;

/// Record cache of one session: Empty until the first successful scan,
/// then Populated for good. A failed scan leaves it Empty.
#[derive(Debug, Default)]
pub struct RecordCache {
    records: Option<Records>,
}

impl RecordCache {
    pub fn is_populated(&self) -> bool {
        self.records.is_some()
    }

    pub fn get(&self) -> Option<&Records> {
        self.records.as_ref()
    }

    /// Return the cached records, running `scan` only when Empty.
    pub fn get_or_try_populate<F>(&mut self, scan: F) -> Result<&Records>
    where
        F: FnOnce() -> Result<Records>,
    {
        match self.records {
            Some(ref records) => Ok(records),
            None => {
                let scanned = scan()?;
                let records: &Records = self.records.insert(scanned);
                Ok(records)
            }
        }
    }
}

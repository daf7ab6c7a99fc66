//! Contracts a reader consumes from its host pipeline.

use std::collections::{BTreeMap, HashMap};

/// Resolves named options to strings, with a caller-supplied default.
pub trait ConfigLookup {
    /// Returns the raw option value, if the host has one.
    fn get(&self, key: &str) -> Option<String>;

    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

impl ConfigLookup for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl ConfigLookup for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<T: ConfigLookup + ?Sized> ConfigLookup for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Receives the number of records produced so far.
pub trait ProgressJournal {
    fn on_progress(&mut self, produced: u64);
}

impl<F: FnMut(u64)> ProgressJournal for F {
    fn on_progress(&mut self, produced: u64) {
        self(produced)
    }
}

impl ProgressJournal for Vec<u64> {
    fn on_progress(&mut self, produced: u64) {
        self.push(produced);
    }
}

/// Journal that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopJournal;

impl ProgressJournal for NoopJournal {
    fn on_progress(&mut self, _produced: u64) {}
}

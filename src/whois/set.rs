//! A collection of decoded records.

use crate::base::record::Record;
use std::collections::HashMap;
use std::{slice, vec};
use tracing::warn;

//------------ RecordSet -----------------------------------------------------

/// Records keyed by their primary key in insertion order.
///
/// Inserting a record under a key already present replaces the earlier
/// record but keeps its position.
#[derive(Clone, Debug, Default)]
pub struct RecordSet {
    records: Vec<(String, Record)>,
    index: HashMap<String, usize>,
}

impl RecordSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under the given key.
    ///
    /// Returns the record previously stored under the key.
    pub fn insert(&mut self, key: String, record: Record) -> Option<Record> {
        match self.index.get(&key) {
            Some(&idx) => {
                warn!("duplicate {} record '{}' replaced", record.type_name(), key);
                Some(std::mem::replace(&mut self.records[idx].1, record))
            }
            None => {
                self.index.insert(key.clone(), self.records.len());
                self.records.push((key, record));
                None
            }
        }
    }

    /// Inserts a record under its primary key.
    ///
    /// A record without a primary key is stored under the empty string.
    pub fn push(&mut self, record: Record) -> Option<Record> {
        let key = record.primary_key().unwrap_or_default();
        self.insert(key, record)
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.index.get(key).map(|&idx| &self.records[idx].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Record> {
        match self.index.get(key) {
            Some(&idx) => Some(&mut self.records[idx].1),
            None => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|(key, _)| key.as_str())
    }

    /// Returns the records in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter().map(|(_, record)| record)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.records.iter())
    }
}

//--- IntoIterator

impl IntoIterator for RecordSet {
    type Item = (String, Record);
    type IntoIter = vec::IntoIter<(String, Record)>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//------------ Iter ----------------------------------------------------------

/// An iterator over the keys and records of a [`RecordSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a>(slice::Iter<'a, (String, Record)>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, record)| (key.as_str(), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

//! The registry of record types.
//!
//! A [`Registry`] maps type names to the [`Schema`] of the type. Types are
//! looked up by their registry key, derived from the type name by
//! [`type_key`], so `aut-num` and `AutNum` name the same type.
//!
//! A registry is built once and then only read. It can be shared between
//! threads.

use super::error::{Error, Result};
use super::record::Record;
use super::schema::Schema;
use super::value::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

//------------ type_key ------------------------------------------------------

/// Returns the registry key for a type name.
///
/// The key is the type name converted from kebab-case to camel-case, i.e.,
/// `aut-num` becomes `AutNum` and `route6` becomes `Route6`.
pub fn type_key(type_name: &str) -> String {
    let mut res = String::with_capacity(type_name.len());
    for part in type_name.split('-') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            res.extend(first.to_uppercase());
            res.push_str(chars.as_str());
        }
    }
    res
}

//------------ Registry ------------------------------------------------------

/// A collection of record types.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    types: BTreeMap<String, Arc<Schema>>,
}

impl Registry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record type.
    ///
    /// Returns the schema previously registered under the same key.
    pub fn register(&mut self, schema: Arc<Schema>) -> Option<Arc<Schema>> {
        let key = type_key(schema.type_name());
        let res = self.types.insert(key, schema);
        if let Some(ref old) = res {
            debug!("replaced schema for type '{}'", old.type_name());
        }
        res
    }

    /// Returns the schema for a type name.
    pub fn schema(&self, type_name: &str) -> Option<&Arc<Schema>> {
        self.types.get(&type_key(type_name))
    }

    /// Returns whether a type is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.schema(type_name).is_some()
    }

    /// Creates an empty record of the given type.
    ///
    /// Fails with [`Error::UnknownType`] if no schema is registered for
    /// the type.
    pub fn create(&self, type_name: &str) -> Result<Record> {
        match self.schema(type_name) {
            Some(schema) => Record::new(schema.clone(), Value::Null),
            None => Err(Error::UnknownType(type_name.into())),
        }
    }

    /// Returns the type names of all registered types.
    pub fn type_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.types.values().map(|schema| schema.type_name())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Extend<Arc<Schema>> for Registry {
    fn extend<T: IntoIterator<Item = Arc<Schema>>>(&mut self, iter: T) {
        for schema in iter {
            self.register(schema);
        }
    }
}

impl FromIterator<Arc<Schema>> for Registry {
    fn from_iter<T: IntoIterator<Item = Arc<Schema>>>(iter: T) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::field::FieldDef;

    fn schema(name: &str) -> Arc<Schema> {
        Schema::builder(name)
            .field(FieldDef::single(name))
            .primary_key([name])
            .build()
            .unwrap()
    }

    #[test]
    fn keys() {
        assert_eq!(type_key("aut-num"), "AutNum");
        assert_eq!(type_key("route6"), "Route6");
        assert_eq!(type_key("key-cert"), "KeyCert");
        assert_eq!(type_key("inet-rtr"), "InetRtr");
        assert_eq!(type_key("AutNum"), "AutNum");
    }

    #[test]
    fn lookup() {
        let registry: Registry =
            [schema("aut-num"), schema("as-set")].into_iter().collect();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("aut-num"));
        assert!(registry.contains("AutNum"));
        assert!(!registry.contains("route"));
        assert_eq!(
            registry.type_names().collect::<Vec<_>>(),
            ["as-set", "aut-num"]
        );

        let rec = registry.create("aut-num").unwrap();
        assert_eq!(rec.type_name(), "aut-num");
        assert_eq!(rec.defined_count(), 0);
        assert_eq!(
            registry.create("route").unwrap_err(),
            Error::UnknownType("route".into())
        );
    }

    #[test]
    fn replace() {
        let mut registry = Registry::new();
        assert!(registry.register(schema("poem")).is_none());
        assert!(registry.register(schema("poem")).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn share() {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<Registry>();
    }
}

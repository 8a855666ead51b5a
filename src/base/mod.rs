//! The generic record model.
//!
//! This module contains the types that all record types share. Record types
//! themselves are plain data: a [`Schema`] lists the attributes of a type
//! with their cardinality and validators. Records are created from a schema
//! and store their values in one [`Field`] per attribute.
//!
//! The [`Registry`] collects the schemas of all known types so that records
//! can be created from a type name alone, which is what the
//! [decoder][crate::whois::Decoder] needs.

pub use self::error::{Error, InvalidValue, Result, SchemaError};
pub use self::field::{Field, FieldDef, FieldValue, Validator};
pub use self::record::{Attribute, Record};
pub use self::registry::{type_key, Registry};
pub use self::schema::{Check, KeyParser, Schema, SchemaBuilder};
pub use self::value::{Keyed, Value};

pub mod error;
pub mod field;
pub mod record;
pub mod registry;
pub mod schema;
pub mod value;

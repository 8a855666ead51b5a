//! Record type definitions.
//!
//! A [`Schema`] is the immutable description of one record type. It is
//! created once, usually while building a [`Registry`], and shared by all
//! records of the type.
//!
//! [`Registry`]: super::registry::Registry

use super::error::{InvalidValue, Result, SchemaError};
use super::field::FieldDef;
use super::record::Record;
use super::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

//------------ KeyParser and Check -------------------------------------------

/// A function splitting a combined primary key into its parts.
///
/// The function returns one value per primary key field, in the order of
/// the primary key.
pub type KeyParser = fn(&str) -> std::result::Result<Vec<String>, InvalidValue>;

/// An additional validity rule for records of a type.
pub type Check = fn(&Record) -> bool;

//------------ Schema --------------------------------------------------------

/// The definition of a record type.
#[derive(Clone)]
pub struct Schema {
    /// The type name, e.g., `aut-num`.
    type_name: String,

    /// The field definitions in declaration order.
    fields: Vec<Arc<FieldDef>>,

    /// The position of each field by name.
    index: HashMap<String, usize>,

    /// The names of the fields forming the primary key.
    primary_key: Vec<String>,

    key_parser: Option<KeyParser>,
    checks: Vec<Check>,
}

impl Schema {
    /// Starts building a schema for the given type name.
    pub fn builder(type_name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(type_name)
    }

    /// Creates a schema from its parts.
    pub fn register<I, K, S>(
        type_name: impl Into<String>,
        fields: I,
        primary_key: K,
        key_parser: Option<KeyParser>,
    ) -> std::result::Result<Arc<Self>, SchemaError>
    where
        I: IntoIterator<Item = FieldDef>,
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder =
            Self::builder(type_name).fields(fields).primary_key(primary_key);
        builder.key_parser = key_parser;
        builder.build()
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the field definitions in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> + '_ {
        self.fields.iter().map(AsRef::as_ref)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.position(name).map(|idx| self.fields[idx].as_ref())
    }

    /// Returns the declaration index of the field with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    pub fn key_parser(&self) -> Option<KeyParser> {
        self.key_parser
    }

    /// Returns whether a record passes all additional validity rules.
    pub fn check(&self, record: &Record) -> bool {
        self.checks.iter().all(|check| check(record))
    }

    /// Returns the column at which values start in the text form.
    pub fn value_column(&self) -> usize {
        3 + self
            .fields
            .iter()
            .map(|def| def.name().len())
            .max()
            .unwrap_or(0)
    }

    /// Creates a new record of this type.
    ///
    /// See [`Record::new`] for how the primary key is processed.
    pub fn new_record(self: &Arc<Self>, key: impl Into<Value>) -> Result<Record> {
        Record::new(self.clone(), key)
    }

    pub(crate) fn field_defs(&self) -> &[Arc<FieldDef>] {
        &self.fields
    }
}

//--- Debug

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Schema")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .field("primary_key", &self.primary_key)
            .field("key_parser", &self.key_parser.is_some())
            .field("checks", &self.checks.len())
            .finish()
    }
}

//------------ SchemaBuilder -------------------------------------------------

/// A builder for a [`Schema`].
#[derive(Clone)]
pub struct SchemaBuilder {
    type_name: String,
    fields: Vec<FieldDef>,
    primary_key: Vec<String>,
    key_parser: Option<KeyParser>,
    checks: Vec<Check>,
}

impl SchemaBuilder {
    fn new(type_name: impl Into<String>) -> Self {
        SchemaBuilder {
            type_name: type_name.into(),
            fields: Vec::new(),
            primary_key: Vec::new(),
            key_parser: None,
            checks: Vec::new(),
        }
    }

    /// Appends a field definition.
    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    /// Appends a sequence of field definitions.
    pub fn fields(mut self, defs: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(defs);
        self
    }

    /// Sets the names of the fields forming the primary key.
    pub fn primary_key<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the function splitting a combined primary key.
    pub fn key_parser(mut self, parser: KeyParser) -> Self {
        self.key_parser = Some(parser);
        self
    }

    /// Adds an additional validity rule.
    pub fn check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Finishes the schema.
    pub fn build(self) -> std::result::Result<Arc<Schema>, SchemaError> {
        if self.type_name.is_empty() {
            return Err(SchemaError::EmptyTypeName);
        }
        let mut index = HashMap::with_capacity(self.fields.len());
        for (idx, def) in self.fields.iter().enumerate() {
            if def.name().is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if index.insert(def.name().to_string(), idx).is_some() {
                return Err(SchemaError::DuplicateField(def.name().into()));
            }
        }
        if self.primary_key.is_empty() {
            return Err(SchemaError::EmptyPrimaryKey);
        }
        if let Some(name) =
            self.primary_key.iter().find(|name| !index.contains_key(*name))
        {
            return Err(SchemaError::UndeclaredKey(name.clone()));
        }
        Ok(Arc::new(Schema {
            type_name: self.type_name,
            fields: self.fields.into_iter().map(Arc::new).collect(),
            index,
            primary_key: self.primary_key,
            key_parser: self.key_parser,
            checks: self.checks,
        }))
    }
}

//============ Testing =======================================================

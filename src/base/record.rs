//! Records.
//!
//! A [`Record`] is one instance of a [`Schema`]. It owns one [`Field`] for
//! every field definition of its schema, all of them created empty when the
//! record is created. Values are only ever stored through the fields so they
//! are validated the same way no matter where they come from.
//!
//! The canonical representation of a record is the sequence of its
//! [`Attribute`]s: one name and value pair for each value of every defined,
//! non-generated field in declaration order. The text form produced by the
//! `Display` impl and the serde form both derive from it.

use super::error::{Error, Result};
use super::field::{Field, FieldValue};
use super::schema::Schema;
use super::value::{Keyed, Value};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::ser::SerializeSeq;

//------------ Record --------------------------------------------------------

/// A typed record.
#[derive(Clone, Debug)]
pub struct Record {
    schema: Arc<Schema>,
    fields: Vec<Field>,
}

impl Record {
    /// Creates a new record and sets its primary key.
    ///
    /// If `key` is [`Value::Null`], the primary key is left undefined.
    ///
    /// If the schema has a key parser, the textual form of the key is
    /// split by it and each part is set into its primary key field. A list
    /// with one item per primary key field is set directly.
    ///
    /// Otherwise, a single-field primary key is set from the key and a
    /// multi-field key needs a list with one item per field.
    pub fn new(schema: Arc<Schema>, key: impl Into<Value>) -> Result<Self> {
        let fields = schema.field_defs().iter().cloned().map(Field::new).collect();
        let mut res = Record { schema, fields };
        res.set_key(key.into())?;
        Ok(res)
    }

    fn set_key(&mut self, key: Value) -> Result<()> {
        if key.is_null() {
            return Ok(());
        }
        let names = self.schema.primary_key().to_vec();
        match key {
            Value::List(items) if names.len() > 1 => {
                if items.len() != names.len() {
                    return Err(Error::data_type(&names[0], "list"));
                }
                for (name, item) in names.iter().zip(items) {
                    self.set(name, item)?;
                }
                Ok(())
            }
            key => {
                if let Some(parser) = self.schema.key_parser() {
                    let text =
                        key.to_text().map_err(|kind| Error::data_type(&names[0], kind))?;
                    let parts =
                        parser(&text).map_err(|err| Error::value(&names[0], err))?;
                    if parts.len() != names.len() {
                        return Err(Error::data_type(&names[0], "list"));
                    }
                    for (name, part) in names.iter().zip(parts) {
                        self.set(name, part)?;
                    }
                    Ok(())
                } else if names.len() == 1 {
                    self.set(&names[0], key)
                } else {
                    Err(Error::data_type(&names[0], key.kind()))
                }
            }
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn type_name(&self) -> &str {
        self.schema.type_name()
    }

    /// Returns the names of the primary key fields.
    pub fn primary_key_names(&self) -> &[String] {
        self.schema.primary_key()
    }

    /// Returns whether the record type has a field of the given name.
    pub fn has(&self, name: &str) -> bool {
        self.schema.position(name).is_some()
    }

    /// Returns the names of all fields in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(Field::name)
    }

    pub fn field(&self, name: &str) -> Result<&Field> {
        match self.schema.position(name) {
            Some(idx) => Ok(&self.fields[idx]),
            None => Err(Error::undefined(name, self.type_name())),
        }
    }

    pub fn field_mut(&mut self, name: &str) -> Result<&mut Field> {
        match self.schema.position(name) {
            Some(idx) => Ok(&mut self.fields[idx]),
            None => Err(Error::undefined(name, self.schema.type_name())),
        }
    }

    /// Returns the value of a field.
    pub fn get(&self, name: &str) -> Result<Option<FieldValue<'_>>> {
        self.field(name).map(Field::get)
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.field_mut(name)?.set(value)
    }

    /// Adds to the value of a field.
    pub fn add(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.field_mut(name)?.add(value)
    }

    /// Clears a field, even if it is locked.
    pub fn reset(&mut self, name: &str) -> Result<()> {
        self.field_mut(name).map(Field::reset)
    }

    /// Returns whether all required fields are defined.
    ///
    /// Additional validity rules of the record type are applied, too.
    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|field| !field.is_required() || field.is_defined())
            && self.schema.check(self)
    }

    /// Returns the primary key.
    ///
    /// The primary key is the concatenation of the values of the primary
    /// key fields. It is `None` if any of them is undefined.
    pub fn primary_key(&self) -> Option<String> {
        let mut res = String::new();
        for name in self.schema.primary_key() {
            res.push_str(self.field(name).ok()?.values().first()?);
        }
        Some(res)
    }

    /// Returns the defined, non-generated fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields
            .iter()
            .filter(|field| field.is_defined() && !field.is_generated())
    }

    /// Returns all fields in declaration order.
    pub fn all_fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the number of defined fields, generated ones included.
    pub fn defined_count(&self) -> usize {
        self.fields.iter().filter(|field| field.is_defined()).count()
    }

    /// Returns the canonical sequence of name and value pairs.
    pub fn attributes(&self) -> Vec<Attribute> {
        self.iter()
            .flat_map(Field::attributes)
            .map(|(name, value)| Attribute::new(name, value))
            .collect()
    }
}

//--- Keyed

impl Keyed for Record {
    fn primary_key(&self) -> Option<String> {
        Record::primary_key(self)
    }
}

//--- From

impl From<&Record> for Value {
    fn from(record: &Record) -> Self {
        Value::handle(record)
    }
}

impl From<&Field> for Value {
    fn from(field: &Field) -> Self {
        Value::List(field.values().iter().map(Value::from).collect())
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.schema.value_column();
        for field in self.iter() {
            for (name, value) in field.attributes() {
                writeln!(f, "{:<width$} {}", format!("{}:", name), value)?;
            }
        }
        Ok(())
    }
}

//--- Serialize

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let attrs = self.attributes();
        let mut seq = serializer.serialize_seq(Some(attrs.len()))?;
        for attr in &attrs {
            seq.serialize_element(attr)?;
        }
        seq.end()
    }
}

//------------ Attribute -----------------------------------------------------

/// A single name and value pair of a record.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

//--- Display

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::error::InvalidValue;
    use crate::base::field::FieldDef;

    fn upper(s: &str) -> std::result::Result<String, InvalidValue> {
        Ok(s.to_uppercase())
    }

    fn split(s: &str) -> std::result::Result<Vec<String>, InvalidValue> {
        match s.split_once('|') {
            Some((a, b)) => Ok(vec![a.into(), b.into()]),
            None => Err(InvalidValue::new("no separator")),
        }
    }

    fn mntner() -> Arc<Schema> {
        Schema::builder("mntner")
            .field(FieldDef::single("mntner").required().validate(upper))
            .field(FieldDef::multiple("descr").required())
            .field(FieldDef::multiple("remarks"))
            .field(FieldDef::multiple("mnt-by").required())
            .field(FieldDef::single("last-modified").generated())
            .field(FieldDef::single("source").required())
            .primary_key(["mntner"])
            .build()
            .unwrap()
    }

    fn pair() -> Arc<Schema> {
        Schema::builder("pair")
            .field(FieldDef::single("left"))
            .field(FieldDef::single("right"))
            .primary_key(["left", "right"])
            .build()
            .unwrap()
    }

    #[test]
    fn new_sets_key() {
        let rec = Record::new(mntner(), "maint-example").unwrap();
        assert_eq!(rec.type_name(), "mntner");
        assert_eq!(rec.get("mntner").unwrap().unwrap(), "MAINT-EXAMPLE");
        assert_eq!(rec.primary_key().as_deref(), Some("MAINT-EXAMPLE"));
        assert_eq!(rec.defined_count(), 1);

        let rec = Record::new(mntner(), Value::Null).unwrap();
        assert_eq!(rec.primary_key(), None);
        assert_eq!(rec.defined_count(), 0);
    }

    #[test]
    fn new_composite_key() {
        let rec = Record::new(pair(), ["a", "b"]).unwrap();
        assert_eq!(rec.primary_key().as_deref(), Some("ab"));
        assert!(Record::new(pair(), "ab").is_err());
        assert!(Record::new(pair(), ["a"]).is_err());

        let parsed = Schema::builder("pair")
            .field(FieldDef::single("left"))
            .field(FieldDef::single("right"))
            .primary_key(["left", "right"])
            .key_parser(split)
            .build()
            .unwrap();
        let rec = Record::new(parsed.clone(), "x|y").unwrap();
        assert_eq!(rec.get("right").unwrap().unwrap(), "y");
        assert_eq!(rec.primary_key().as_deref(), Some("xy"));
        assert_eq!(
            Record::new(parsed, "xy").unwrap_err(),
            Error::value("left", InvalidValue::new("no separator"))
        );
    }

    #[test]
    fn undefined_attribute() {
        let mut rec = Record::new(mntner(), "maint-example").unwrap();
        let err = Error::undefined("foo", "mntner");
        assert_eq!(rec.get("foo").unwrap_err(), err);
        assert_eq!(rec.set("foo", "bar").unwrap_err(), err);
        assert_eq!(rec.add("foo", "bar").unwrap_err(), err);
        assert!(!rec.has("foo"));
        assert!(rec.has("last-modified"));
    }

    #[test]
    fn validity() {
        let mut rec = Record::new(mntner(), "maint-example").unwrap();
        assert!(!rec.is_valid());
        rec.add("descr", "Example maintainer").unwrap();
        rec.add("mnt-by", "MAINT-EXAMPLE").unwrap();
        rec.add("source", "APNIC").unwrap();
        assert!(rec.is_valid());
        rec.set("descr", Value::Null).unwrap();
        assert!(!rec.is_valid());
    }

    #[test]
    fn additional_checks() {
        fn either(rec: &Record) -> bool {
            rec.field("left").map(Field::is_defined).unwrap_or(false)
                || rec.field("right").map(Field::is_defined).unwrap_or(false)
        }
        let schema = Schema::builder("either")
            .field(FieldDef::single("either"))
            .field(FieldDef::single("left"))
            .field(FieldDef::single("right"))
            .primary_key(["either"])
            .check(either)
            .build()
            .unwrap();
        let mut rec = Record::new(schema, "x").unwrap();
        assert!(!rec.is_valid());
        rec.set("right", "y").unwrap();
        assert!(rec.is_valid());
    }

    #[test]
    fn attributes_and_text() {
        let mut rec = Record::new(mntner(), "maint-example").unwrap();
        rec.add("descr", "first\nsecond").unwrap();
        rec.add("mnt-by", "MAINT-EXAMPLE").unwrap();
        rec.add("last-modified", "2017-01-01T00:00:00Z").unwrap();
        rec.add("source", "APNIC").unwrap();

        assert_eq!(
            rec.attributes(),
            vec![
                Attribute::new("mntner", "MAINT-EXAMPLE"),
                Attribute::new("descr", "first"),
                Attribute::new("descr", "second"),
                Attribute::new("mnt-by", "MAINT-EXAMPLE"),
                Attribute::new("source", "APNIC"),
            ]
        );
        assert_eq!(
            rec.iter().map(Field::name).collect::<Vec<_>>(),
            ["mntner", "descr", "mnt-by", "source"]
        );
        assert_eq!(rec.all_fields().len(), 6);
        assert_eq!(
            rec.to_string(),
            "mntner:          MAINT-EXAMPLE\n\
             descr:           first\n\
             descr:           second\n\
             mnt-by:          MAINT-EXAMPLE\n\
             source:          APNIC\n"
        );
    }

    #[test]
    fn record_as_value() {
        let maint = Record::new(mntner(), "maint-example").unwrap();
        let mut rec = Record::new(mntner(), "maint-other").unwrap();
        rec.add("mnt-by", &maint).unwrap();
        assert_eq!(rec.get("mnt-by").unwrap().unwrap(), ["MAINT-EXAMPLE"]);

        let empty = Record::new(mntner(), Value::Null).unwrap();
        assert_eq!(
            rec.add("mnt-by", &empty).unwrap_err(),
            Error::data_type("mnt-by", "object")
        );

        let mut other = Record::new(mntner(), "maint-third").unwrap();
        other.set("mnt-by", rec.field("mnt-by").unwrap()).unwrap();
        assert_eq!(other.get("mnt-by").unwrap().unwrap(), ["MAINT-EXAMPLE"]);
    }

    #[test]
    fn reset_locked() {
        let schema = Schema::builder("person")
            .field(FieldDef::single("person"))
            .field(FieldDef::single("nic-hdl").locked())
            .primary_key(["nic-hdl"])
            .build()
            .unwrap();
        let mut rec = Record::new(schema, "XL1-AP").unwrap();
        rec.set("nic-hdl", "XL2-AP").unwrap();
        assert_eq!(rec.primary_key().as_deref(), Some("XL1-AP"));
        rec.reset("nic-hdl").unwrap();
        assert_eq!(rec.primary_key(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Attribute::new("source", "APNIC"),
            &[
                Token::Struct {
                    name: "Attribute",
                    len: 2,
                },
                Token::Str("name"),
                Token::Str("source"),
                Token::Str("value"),
                Token::Str("APNIC"),
                Token::StructEnd,
            ],
        );

        let mut rec = Record::new(mntner(), "maint-example").unwrap();
        rec.add("source", "APNIC").unwrap();
        assert_eq!(
            serde_json::to_string(&rec).unwrap(),
            r#"[{"name":"mntner","value":"MAINT-EXAMPLE"},{"name":"source","value":"APNIC"}]"#
        );
    }
}

//! Attribute definitions and attribute slots.
//!
//! A [`FieldDef`] describes one attribute of a record type: its name, its
//! cardinality, whether it is required, generated, or locked, and the
//! validator its values pass through. A [`Field`] is the mutable slot a
//! record keeps for each definition.

use super::error::{Error, InvalidValue, Result};
use super::value::Value;
use std::fmt;
use std::sync::Arc;

//------------ Validator -----------------------------------------------------

/// A function checking and normalising a single attribute value.
///
/// The function receives the textual form of the value and returns the
/// text to be stored.
pub type Validator = fn(&str) -> std::result::Result<String, InvalidValue>;

//------------ FieldDef ------------------------------------------------------

/// The definition of an attribute.
#[derive(Clone)]
pub struct FieldDef {
    name: String,
    required: bool,
    multiple: bool,
    generated: bool,
    locked: bool,
    validator: Option<Validator>,
}

impl FieldDef {
    fn new(name: impl Into<String>, multiple: bool) -> Self {
        FieldDef {
            name: name.into(),
            required: false,
            multiple,
            generated: false,
            locked: false,
            validator: None,
        }
    }

    /// Creates the definition of an optional, single-valued attribute.
    pub fn single(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Creates the definition of an optional, multi-valued attribute.
    pub fn multiple(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Marks the attribute as required.
    ///
    /// This has no effect on generated attributes.
    pub fn required(mut self) -> Self {
        self.required = !self.generated;
        self
    }

    /// Marks the attribute as generated by the registry.
    ///
    /// Generated attributes are always optional.
    pub fn generated(mut self) -> Self {
        self.generated = true;
        self.required = false;
        self
    }

    /// Marks the attribute as locked.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Sets the validator for the attribute’s values.
    pub fn validate(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn validator(&self) -> Option<Validator> {
        self.validator
    }
}

//--- Debug

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("multiple", &self.multiple)
            .field("generated", &self.generated)
            .field("locked", &self.locked)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

//------------ FieldValue ----------------------------------------------------

/// The value of a defined attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldValue<'a> {
    /// The only value of a single-valued attribute.
    Single(&'a str),

    /// All values of a multi-valued attribute in insertion order.
    Multiple(&'a [String]),
}

impl<'a> FieldValue<'a> {
    /// Returns the single value.
    ///
    /// For a multi-valued attribute holding exactly one value, returns that
    /// value.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Single(s) => Some(s),
            FieldValue::Multiple(values) if values.len() == 1 => {
                Some(values[0].as_str())
            }
            FieldValue::Multiple(_) => None,
        }
    }

    /// Returns all values.
    pub fn to_vec(&self) -> Vec<&'a str> {
        match *self {
            FieldValue::Single(s) => vec![s],
            FieldValue::Multiple(values) => {
                values.iter().map(String::as_str).collect()
            }
        }
    }
}

impl<'a> PartialEq<&str> for FieldValue<'a> {
    fn eq(&self, other: &&str) -> bool {
        matches!(*self, FieldValue::Single(s) if s == *other)
    }
}

impl<'a, const N: usize> PartialEq<[&str; N]> for FieldValue<'a> {
    fn eq(&self, other: &[&str; N]) -> bool {
        match *self {
            FieldValue::Multiple(values) => {
                values.len() == N
                    && values.iter().zip(other.iter()).all(|(a, b)| a == b)
            }
            FieldValue::Single(_) => false,
        }
    }
}

//------------ Field ---------------------------------------------------------

/// The slot holding the values of one attribute.
///
/// Values are kept as text in insertion order. A single-valued field never
/// holds more than one value and no stored value contains a line break.
#[derive(Clone, Debug)]
pub struct Field {
    def: Arc<FieldDef>,
    values: Vec<String>,
}

impl Field {
    /// Creates a new, empty field for the given definition.
    pub fn new(def: impl Into<Arc<FieldDef>>) -> Self {
        Field {
            def: def.into(),
            values: Vec::new(),
        }
    }

    pub fn def(&self) -> &FieldDef {
        &self.def
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn is_required(&self) -> bool {
        self.def.required
    }

    pub fn is_multiple(&self) -> bool {
        self.def.multiple
    }

    pub fn is_generated(&self) -> bool {
        self.def.generated
    }

    pub fn is_locked(&self) -> bool {
        self.def.locked
    }

    /// Returns whether the field holds at least one value.
    pub fn is_defined(&self) -> bool {
        !self.values.is_empty()
    }

    /// Returns the number of values.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Returns the stored values in insertion order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the value of the field.
    ///
    /// Returns `None` if the field is empty. A single-valued field returns
    /// its only value, a multi-valued field the full list.
    pub fn get(&self) -> Option<FieldValue<'_>> {
        if self.values.is_empty() {
            None
        } else if self.def.multiple {
            Some(FieldValue::Multiple(&self.values))
        } else {
            Some(FieldValue::Single(&self.values[0]))
        }
    }

    /// Replaces the value of the field.
    ///
    /// Setting [`Value::Null`] clears the field. A locked field that
    /// already holds a value is left unchanged.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<()> {
        if self.is_locked() && self.is_defined() {
            return Ok(());
        }
        let value = value.into();
        if value.is_null() {
            self.values.clear();
            return Ok(());
        }
        self.values = self.convert(value)?;
        Ok(())
    }

    /// Adds to the value of the field.
    ///
    /// For a single-valued field, this replaces the value. Adding
    /// [`Value::Null`] does nothing, as does adding to a locked field that
    /// already holds a value.
    ///
    /// If any of the values is rejected, the field is left unchanged.
    pub fn add(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if value.is_null() || (self.is_locked() && self.is_defined()) {
            return Ok(());
        }
        let values = self.convert(value)?;
        if self.def.multiple {
            self.values.extend(values);
        } else {
            self.values = values;
        }
        Ok(())
    }

    /// Clears the field, even if it is locked.
    pub fn reset(&mut self) {
        self.values.clear()
    }

    /// Returns the name and value pairs of the field.
    ///
    /// Empty values are skipped.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.values
            .iter()
            .filter(|value| !value.is_empty())
            .map(move |value| (self.name(), value.as_str()))
    }

    /// Runs a value through the conversion pipeline.
    fn convert(&self, value: Value) -> Result<Vec<String>> {
        if !self.def.multiple {
            if let Value::List(_) = value {
                return Err(Error::data_type(self.name(), value.kind()));
            }
        }
        let texts = value
            .into_texts()
            .map_err(|kind| Error::data_type(self.name(), kind))?;
        if !self.def.multiple && texts.len() > 1 {
            return Err(Error::data_type(self.name(), "multi-line string"));
        }
        texts
            .into_iter()
            .map(|text| -> Result<String> {
                let text = match self.def.validator {
                    Some(validator) => validator(&text)
                        .map_err(|err| Error::value(self.name(), err))?,
                    None => text,
                };
                Ok(text.trim_end().to_string())
            })
            .collect()
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn upper(s: &str) -> std::result::Result<String, InvalidValue> {
        if s.is_empty() {
            Err(InvalidValue::new("empty"))
        } else {
            Ok(s.to_uppercase())
        }
    }

    #[test]
    fn definition_flags() {
        let def = FieldDef::single("source").required();
        assert!(def.is_required());
        assert!(!def.is_multiple());
        let def = FieldDef::multiple("last-modified").required().generated();
        assert!(def.is_generated());
        assert!(!def.is_required());
        let def = FieldDef::single("changed").generated().required();
        assert!(!def.is_required());
    }

    #[test]
    fn single_replaces() {
        let mut field = Field::new(FieldDef::single("descr"));
        assert_eq!(field.get(), None);
        field.set("foo").unwrap();
        field.set("bar").unwrap();
        assert_eq!(field.get(), Some(FieldValue::Single("bar")));
        assert_eq!(field.count(), 1);
        field.add("baz").unwrap();
        assert_eq!(field.get().unwrap(), "baz");
        assert_eq!(field.count(), 1);
    }

    #[test]
    fn multiple_appends() {
        let mut field = Field::new(FieldDef::multiple("remarks"));
        field.add("a").unwrap();
        field.add("b").unwrap();
        assert_eq!(field.get().unwrap(), ["a", "b"]);
        field.set("c").unwrap();
        assert_eq!(field.get().unwrap(), ["c"]);
        field.add(["d", "e"]).unwrap();
        assert_eq!(field.get().unwrap(), ["c", "d", "e"]);
    }

    #[test]
    fn null_clears_or_skips() {
        let mut field = Field::new(FieldDef::multiple("remarks"));
        field.set("a").unwrap();
        field.add(Value::Null).unwrap();
        assert!(field.is_defined());
        field.set(Value::Null).unwrap();
        assert!(!field.is_defined());
    }

    #[test]
    fn locked() {
        let mut field = Field::new(FieldDef::single("nic-hdl").locked());
        field.set(Value::Null).unwrap();
        field.set("XL1-AP").unwrap();
        field.set("XL2-AP").unwrap();
        field.add("XL3-AP").unwrap();
        field.set(Value::Null).unwrap();
        assert_eq!(field.get().unwrap(), "XL1-AP");
        field.reset();
        assert!(!field.is_defined());
        field.set("XL2-AP").unwrap();
        assert_eq!(field.get().unwrap(), "XL2-AP");
    }

    #[test]
    fn multi_line() {
        let mut field = Field::new(FieldDef::multiple("address"));
        field.add("line one  \nline two\r\nline three").unwrap();
        assert_eq!(
            field.get().unwrap(),
            ["line one", "line two", "line three"]
        );
        field.add("line four\rline five").unwrap();
        assert_eq!(field.count(), 5);
        assert!(field.values().iter().all(|value| !value.contains('\r')));

        let mut field = Field::new(FieldDef::single("descr"));
        field.set("keep").unwrap();
        assert_eq!(
            field.set("one\ntwo"),
            Err(Error::data_type("descr", "multi-line string"))
        );
        assert_eq!(
            field.set("one\rtwo"),
            Err(Error::data_type("descr", "multi-line string"))
        );
        assert_eq!(field.get().unwrap(), "keep");
    }

    #[test]
    fn stringify() {
        let mut field = Field::new(FieldDef::multiple("remarks"));
        field.add(true).unwrap();
        field.add(false).unwrap();
        field.add(42).unwrap();
        field.add(Value::Handle(Some("MAINT-EXAMPLE".into()))).unwrap();
        assert_eq!(
            field.get().unwrap(),
            ["true", "false", "42", "MAINT-EXAMPLE"]
        );
        assert_eq!(
            field.add(Value::Handle(None)),
            Err(Error::data_type("remarks", "object"))
        );
        assert_eq!(field.count(), 4);
    }

    #[test]
    fn list_into_single() {
        let mut field = Field::new(FieldDef::single("descr"));
        assert_eq!(
            field.set(["a"]),
            Err(Error::data_type("descr", "list"))
        );
        assert!(!field.is_defined());
    }

    #[test]
    fn validator() {
        let mut field =
            Field::new(FieldDef::multiple("mnt-by").validate(upper));
        field.add(["maint-a", "maint-b "]).unwrap();
        assert_eq!(field.get().unwrap(), ["MAINT-A", "MAINT-B"]);
        assert_eq!(
            field.add(["maint-c", ""]),
            Err(Error::value("mnt-by", InvalidValue::new("empty")))
        );
        assert_eq!(field.count(), 2);
    }

    #[test]
    fn attributes_skip_empty() {
        let mut field = Field::new(FieldDef::multiple("remarks"));
        field.add("a\n\nb").unwrap();
        assert_eq!(field.count(), 3);
        assert_eq!(
            field.attributes().collect::<Vec<_>>(),
            vec![("remarks", "a"), ("remarks", "b")]
        );
    }
}

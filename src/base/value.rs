//! Values accepted by record attributes.
//!
//! Attributes store text. On the way in, they accept a small, closed set of
//! inputs represented by [`Value`]: text, numbers, booleans, references to
//! other records, and lists of those.

use std::fmt;

//------------ Value ---------------------------------------------------------

/// An input value for an attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The absence of a value.
    ///
    /// Setting an attribute to this value clears it, adding it does
    /// nothing.
    Null,

    /// A text value.
    Str(String),

    /// An integer.
    Int(i64),

    /// A floating point number.
    Float(f64),

    /// A boolean, stored as `true` or `false`.
    Bool(bool),

    /// A reference to another record, resolved to its primary key.
    ///
    /// The primary key is `None` if it wasn’t defined when the reference
    /// was taken.
    Handle(Option<String>),

    /// A list of values.
    List(Vec<Value>),
}

impl Value {
    /// Creates a reference to a keyed object.
    pub fn handle<K: Keyed + ?Sized>(target: &K) -> Self {
        Value::Handle(target.primary_key())
    }

    /// Returns whether the value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(*self, Value::Null)
    }

    /// Returns a description of the kind of value.
    pub fn kind(&self) -> &'static str {
        match *self {
            Value::Null => "null",
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Handle(_) => "object",
            Value::List(_) => "list",
        }
    }

    /// Returns the textual form of a scalar value.
    ///
    /// Returns the kind of the value as the error if it has no textual
    /// form.
    pub(crate) fn to_text(&self) -> Result<String, &'static str> {
        match *self {
            Value::Str(ref s) => Ok(s.clone()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(x) => Ok(x.to_string()),
            Value::Bool(true) => Ok("true".into()),
            Value::Bool(false) => Ok("false".into()),
            Value::Handle(Some(ref key)) => Ok(key.clone()),
            Value::Handle(None) | Value::Null | Value::List(_) => {
                Err(self.kind())
            }
        }
    }

    /// Converts the value into the sequence of texts it stands for.
    ///
    /// A list is flattened into its items. Text containing line breaks is
    /// exploded into one item per line. Nested lists and nulls inside a list
    /// have no textual form.
    pub(crate) fn into_texts(self) -> Result<Vec<String>, &'static str> {
        let mut res = Vec::new();
        match self {
            Value::List(items) => {
                for item in items {
                    if let Value::List(_) = item {
                        return Err(item.kind());
                    }
                    push_lines(item.to_text()?, &mut res);
                }
            }
            value => push_lines(value.to_text()?, &mut res),
        }
        Ok(res)
    }
}

fn push_lines(text: String, target: &mut Vec<String>) {
    if text.contains(['\n', '\r']) {
        target.extend(
            text.split("\r\n")
                .flat_map(|line| line.split(['\n', '\r']))
                .map(String::from),
        );
    } else {
        target.push(text)
    }
}

//--- From

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

macro_rules! from_int {
    ( $( $ty:ty ),* ) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Int(i.into())
                }
            }
        )*
    }
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(items: [&str; N]) -> Self {
        Value::List(items.iter().map(|&s| s.into()).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(items: &[&str]) -> Self {
        Value::List(items.iter().map(|&s| s.into()).collect())
    }
}

//--- Display

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Null => f.write_str("null"),
            Value::Str(ref s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Handle(Some(ref key)) => f.write_str(key),
            Value::Handle(None) => f.write_str("<undefined>"),
            Value::List(ref items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

//------------ Keyed ---------------------------------------------------------

/// An object identified by a primary key.
///
/// Values of types implementing this trait can be stored in an attribute
/// via [`Value::handle`]. The attribute then holds the object’s primary key.
pub trait Keyed {
    /// Returns the primary key or `None` if it is not defined.
    fn primary_key(&self) -> Option<String>;
}

//============ Testing =======================================================

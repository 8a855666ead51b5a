//! Error types.
//!
//! All failures of the record model are deterministic functions of their
//! input. They are reported through the single [`Error`] type. Validators
//! and key parsers report their own, narrower [`InvalidValue`] which the
//! record model lifts into an [`Error`] once it knows which attribute the
//! rejected value was meant for.

use std::fmt;

//------------ Result --------------------------------------------------------

/// The result type of all fallible operations of the record model.
pub type Result<T> = std::result::Result<T, Error>;

//------------ Error ---------------------------------------------------------

/// An error happened while building, populating, or decoding a record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The record type does not define an attribute of this name.
    UndefinedAttribute {
        /// The name of the attribute that was asked for.
        attribute: String,

        /// The type name of the record.
        type_name: String,
    },

    /// The value cannot be stored in the attribute.
    ///
    /// This covers values that have no textual form as well as a list of
    /// values given to a single-valued attribute.
    InvalidDataType {
        /// The name of the attribute.
        attribute: String,

        /// A description of the offending kind of value.
        kind: &'static str,
    },

    /// The validator of the attribute rejected the value.
    InvalidValue {
        /// The name of the attribute.
        attribute: String,

        /// The error reported by the validator.
        error: InvalidValue,
    },

    /// No schema is registered for the record type.
    UnknownType(String),

    /// The text contained an error reported by the remote registry.
    RemoteError {
        /// The numeric error code.
        code: u32,

        /// The error message with surrounding whitespace removed.
        message: String,
    },

    /// A schema definition was inconsistent.
    Schema(SchemaError),
}

impl Error {
    pub(crate) fn undefined(attribute: &str, type_name: &str) -> Self {
        Error::UndefinedAttribute {
            attribute: attribute.into(),
            type_name: type_name.into(),
        }
    }

    pub(crate) fn data_type(attribute: &str, kind: &'static str) -> Self {
        Error::InvalidDataType {
            attribute: attribute.into(),
            kind,
        }
    }

    pub(crate) fn value(attribute: &str, error: InvalidValue) -> Self {
        Error::InvalidValue {
            attribute: attribute.into(),
            error,
        }
    }

    /// Returns the name of the attribute the error relates to, if any.
    pub fn attribute(&self) -> Option<&str> {
        match *self {
            Error::UndefinedAttribute { ref attribute, .. }
            | Error::InvalidDataType { ref attribute, .. }
            | Error::InvalidValue { ref attribute, .. } => Some(attribute),
            _ => None,
        }
    }
}

//--- From

impl From<SchemaError> for Error {
    fn from(err: SchemaError) -> Self {
        Error::Schema(err)
    }
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UndefinedAttribute {
                ref attribute,
                ref type_name,
            } => write!(
                f,
                "Attribute \"{}\" is not defined for the {} object.",
                attribute,
                type_name.to_ascii_uppercase()
            ),
            Error::InvalidDataType {
                ref attribute,
                kind,
            } => write!(
                f,
                "The [{}] attribute does not allow the {} data type.",
                attribute, kind
            ),
            Error::InvalidValue {
                ref attribute,
                ref error,
            } => write!(f, "[{}] {}", attribute, error),
            Error::UnknownType(ref name) => {
                write!(f, "Object type \"{}\" is not supported.", name)
            }
            Error::RemoteError { code, ref message } => {
                write!(f, "remote error {}: {}", code, message)
            }
            Error::Schema(ref err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

//------------ InvalidValue --------------------------------------------------

/// A validator rejected a value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidValue {
    msg: String,
}

impl InvalidValue {
    /// Creates a new error with the given message.
    pub fn new(msg: impl Into<String>) -> Self {
        InvalidValue { msg: msg.into() }
    }

    /// Returns the message of the error.
    pub fn message(&self) -> &str {
        &self.msg
    }
}

//--- Display and Error

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for InvalidValue {}

//------------ SchemaError ---------------------------------------------------

/// A schema definition is not consistent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaError {
    /// The type name was empty.
    EmptyTypeName,

    /// A field was defined with an empty name.
    EmptyFieldName,

    /// A field name was defined more than once.
    DuplicateField(String),

    /// No primary key fields were given.
    EmptyPrimaryKey,

    /// A primary key field is not among the defined fields.
    UndeclaredKey(String),
}

//--- Display and Error

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SchemaError::EmptyTypeName => f.write_str("empty type name"),
            SchemaError::EmptyFieldName => f.write_str("empty field name"),
            SchemaError::DuplicateField(ref name) => {
                write!(f, "duplicate field '{}'", name)
            }
            SchemaError::EmptyPrimaryKey => f.write_str("empty primary key"),
            SchemaError::UndeclaredKey(ref name) => {
                write!(f, "primary key field '{}' is not defined", name)
            }
        }
    }
}

impl std::error::Error for SchemaError {}

//============ Testing =======================================================

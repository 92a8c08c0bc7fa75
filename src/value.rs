use std::fmt;

use crate::errors::*;

/// The declared type of a constructor parameter or field.
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ValueType {
    Bool,
    Int,
    Long,
    Double,
    Text,
}

impl ValueType {
    pub(crate) fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Long => "long",
            ValueType::Double => "double",
            ValueType::Text => "text",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically typed scalar produced by a query-result collaborator.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    Text(String),
}

impl Value {
    /// Name of the runtime type, used in cast error messages.
    pub fn type_name(&self) -> &'static str {
        match *self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Double(_) => "double",
            Value::Text(_) => "text",
        }
    }

    pub fn z(&self) -> Result<bool> {
        match *self {
            Value::Bool(b) => Ok(b),
            _ => Err(self.wrong_type("bool")),
        }
    }

    pub fn i(&self) -> Result<i32> {
        match *self {
            Value::Int(i) => Ok(i),
            _ => Err(self.wrong_type("int")),
        }
    }

    pub fn j(&self) -> Result<i64> {
        match *self {
            Value::Long(j) => Ok(j),
            _ => Err(self.wrong_type("long")),
        }
    }

    pub fn d(&self) -> Result<f64> {
        match *self {
            Value::Double(d) => Ok(d),
            _ => Err(self.wrong_type("double")),
        }
    }

    pub fn text(&self) -> Result<&str> {
        match *self {
            Value::Text(ref s) => Ok(s),
            _ => Err(self.wrong_type("text")),
        }
    }

    /// Converts the value to the declared type, applying implicit numeric
    /// widening and checked narrowing.
    ///
    /// `Int` widens to `Long` or `Double`, `Long` widens to `Double` and
    /// narrows to `Int` when the value fits. `Null` converts to nothing
    /// except itself. Everything else is a [`Error::TypeMismatch`].
    pub fn coerce(self, ty: ValueType) -> Result<Value> {
        let coerced = match (self, ty) {
            (Value::Null, _) => Value::Null,
            (Value::Bool(b), ValueType::Bool) => Value::Bool(b),
            (Value::Int(i), ValueType::Int) => Value::Int(i),
            (Value::Int(i), ValueType::Long) => Value::Long(i as i64),
            (Value::Int(i), ValueType::Double) => Value::Double(i as f64),
            (Value::Long(j), ValueType::Long) => Value::Long(j),
            (Value::Long(j), ValueType::Int) => match i32::try_from(j) {
                Ok(i) => Value::Int(i),
                Err(_) => return Err(wrong_type(ty.name(), "long")),
            },
            (Value::Long(j), ValueType::Double) => Value::Double(j as f64),
            (Value::Double(d), ValueType::Double) => Value::Double(d),
            (Value::Text(s), ValueType::Text) => Value::Text(s),
            (other, _) => return Err(wrong_type(ty.name(), other.type_name())),
        };
        Ok(coerced)
    }

    fn wrong_type(&self, expected: &'static str) -> Error {
        wrong_type(expected, self.type_name())
    }
}

fn wrong_type(expected: &'static str, actual: &'static str) -> Error {
    Error::TypeMismatch { expected, actual }
}

impl From<bool> for Value {
    fn from(other: bool) -> Self {
        Value::Bool(other)
    }
}

impl From<i32> for Value {
    fn from(other: i32) -> Self {
        Value::Int(other)
    }
}

impl From<i64> for Value {
    fn from(other: i64) -> Self {
        Value::Long(other)
    }
}

impl From<f64> for Value {
    fn from(other: f64) -> Self {
        Value::Double(other)
    }
}

impl From<&str> for Value {
    fn from(other: &str) -> Self {
        Value::Text(other.to_owned())
    }
}

impl From<String> for Value {
    fn from(other: String) -> Self {
        Value::Text(other)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(other: Option<T>) -> Self {
        match other {
            Some(v) => Value::from(v),
            None => Value::Null,
        }
    }
}

//! Cell values.
//!
//! A [`Value`] is the closed set of scalars a table cell can hold. Callers
//! rarely build one by hand; every common Rust scalar converts with `From`
//! and the [`row!`](crate::row) macro does the conversion for a whole row.

use std::borrow::Cow;
use std::fmt;

/// The kind of a [`Value`] as far as layout is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Integers and floats.
    Numeric,
    /// Text and booleans.
    Textual,
    /// No value at all.
    Empty,
}

/// A single scalar cell value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Any integer; `i128` holds every signed and unsigned primitive.
    Integer(i128),
    /// A floating point number.
    Float(f64),
    /// Free-form text, which may contain line breaks and tabs.
    Text(String),
    /// A boolean, displayed as `true` / `false`.
    Boolean(bool),
    /// No value (displayed as an empty string).
    #[default]
    Empty,
}

impl Value {
    /// Returns the layout kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) | Value::Float(_) => ValueKind::Numeric,
            Value::Text(_) | Value::Boolean(_) => ValueKind::Textual,
            Value::Empty => ValueKind::Empty,
        }
    }

    /// Whether this value is an integer or a float.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.kind() == ValueKind::Numeric
    }

    /// The display string of the value, before any normalization.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::Text(text) => Cow::Borrowed(text.as_str()),
            Value::Empty => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(text) => f.write_str(text),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Empty => Ok(()),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Integer(value as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for Value {
    fn from(value: u128) -> Self {
        match i128::try_from(value) {
            Ok(n) => Value::Integer(n),
            // still a number, just not one `i128` can carry
            Err(_) => Value::Text(value.to_string()),
        }
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::Text(value.into_owned())
    }
}

impl From<()> for Value {
    #[inline]
    fn from(_: ()) -> Self {
        Value::Empty
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Empty)
    }
}

/// Builds a row (`Vec<Value>`) from heterogeneous values.
///
/// ```
/// use biscuit_table::{row, Value};
///
/// let row = row![1, "Arya", 3.5, true, None::<i32>];
/// assert_eq!(row[0], Value::Integer(1));
/// assert_eq!(row[4], Value::Empty);
/// ```
#[macro_export]
macro_rules! row {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}

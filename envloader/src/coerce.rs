//! Conversion of resolved strings into typed field values.
//!
//! Scalars are parsed as whole base-10 literals of the field's width.
//! Sequences are split on single ASCII spaces and every token is parsed with
//! the scalar rule of the element type; the first bad token fails the field.

use crate::error::EnvError;
use std::num::IntErrorKind;

/// Why a single token could not become a scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// Not a literal of the target type.
    Format(String),
    /// A literal, but too large for the target width.
    Range(String),
}

/// A value that can be parsed from one token.
///
/// Implemented for `String`, the signed integers and the floats. It is also
/// the element bound of `Vec<T>` fields.
pub trait Scalar: Sized {
    /// Parse one token.
    fn parse_scalar(token: &str) -> Result<Self, ScalarError>;
}

/// A field type the binding engine knows how to fill.
///
/// The derive macro requires every field of an `EnvLoad` struct to
/// implement this, so unsupported field types are rejected at compile time.
pub trait FieldValue {
    /// Replace the field's value with `raw` parsed as this type.
    ///
    /// `key` and `field` only label the error.
    fn coerce(&mut self, raw: &str, key: &str, field: &str) -> Result<(), EnvError>;

    /// Whether the field holds its zero value.
    fn is_empty(&self) -> bool;

    /// Whether the caller already filled the field before loading.
    ///
    /// Only strings count as pre-populated; numbers and sequences are always
    /// looked up again.
    fn is_prepopulated(&self) -> bool {
        false
    }
}

/// Split a raw sequence value on single spaces.
///
/// No trimming, quoting or escaping. An empty input yields one empty token.
pub fn split_sequence(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(' ')
}

fn parse_as<T: Scalar>(token: &str, key: &str, field: &str) -> Result<T, EnvError> {
    T::parse_scalar(token).map_err(|e| match e {
        ScalarError::Format(message) => EnvError::format_error::<T>(key, field, message),
        ScalarError::Range(message) => EnvError::range_error::<T>(key, field, message),
    })
}

impl Scalar for String {
    fn parse_scalar(token: &str) -> Result<Self, ScalarError> {
        Ok(token.to_string())
    }
}

impl FieldValue for String {
    fn coerce(&mut self, raw: &str, _key: &str, _field: &str) -> Result<(), EnvError> {
        self.clear();
        self.push_str(raw);
        Ok(())
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }

    fn is_prepopulated(&self) -> bool {
        !String::is_empty(self)
    }
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Scalar for $ty {
            fn parse_scalar(token: &str) -> Result<Self, ScalarError> {
                token.parse::<$ty>().map_err(|e| match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        ScalarError::Range(format!("{:?}: {}", token, e))
                    }
                    _ => ScalarError::Format(format!("{:?}: {}", token, e)),
                })
            }
        }

        impl FieldValue for $ty {
            fn coerce(&mut self, raw: &str, key: &str, field: &str) -> Result<(), EnvError> {
                *self = parse_as::<$ty>(raw, key, field)?;
                Ok(())
            }

            fn is_empty(&self) -> bool {
                *self == 0
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Scalar for $ty {
            fn parse_scalar(token: &str) -> Result<Self, ScalarError> {
                let value = token
                    .parse::<$ty>()
                    .map_err(|e| ScalarError::Format(format!("{:?}: {}", token, e)))?;
                if value.is_infinite() && !names_infinity(token) {
                    return Err(ScalarError::Range(format!(
                        "{:?} overflows {}",
                        token,
                        stringify!($ty)
                    )));
                }
                Ok(value)
            }
        }

        impl FieldValue for $ty {
            fn coerce(&mut self, raw: &str, key: &str, field: &str) -> Result<(), EnvError> {
                *self = parse_as::<$ty>(raw, key, field)?;
                Ok(())
            }

            fn is_empty(&self) -> bool {
                *self == 0.0
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize);
impl_float!(f32, f64);

/// `inf` and `infinity` (any case, optional sign) are explicit infinities.
fn names_infinity(token: &str) -> bool {
    let unsigned = token
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl<T: Scalar> FieldValue for Vec<T> {
    fn coerce(&mut self, raw: &str, key: &str, field: &str) -> Result<(), EnvError> {
        let values = split_sequence(raw)
            .map(|token| parse_as::<T>(token, key, field))
            .collect::<Result<Vec<T>, EnvError>>()?;
        *self = values;
        Ok(())
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

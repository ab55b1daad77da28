use std::fmt;

use crate::InvokeError;

/// A dynamically typed argument value.
///
/// Used by [`Forwarder::invoke_values`] when arguments arrive as an untyped
/// list rather than a typed tuple.
///
/// [`Forwarder::invoke_values`]: crate::Forwarder::invoke_values
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Text(String),
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ValueKind {
    Unit,
    Bool,
    Int,
    Text,
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Unit => ValueKind::Unit,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Text(_) => ValueKind::Text,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Unit => "unit",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Text => "text",
        };
        f.write_str(name)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Unit
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

/// A type that can be extracted from a [`Value`] of one particular kind.
pub trait FromValue: Sized {
    /// The only kind this type can be extracted from.
    const KIND: ValueKind;

    /// Returns the extracted value, or `None` if `value` has another kind.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for () {
    const KIND: ValueKind = ValueKind::Unit;

    fn from_value(value: &Value) -> Option<Self> {
        matches!(value, Value::Unit).then_some(())
    }
}

impl FromValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(value) => Some(value.clone()),
            _ => None,
        }
    }
}

/// An argument tuple that can be built from a list of [`Value`]s.
///
/// Implemented for tuples of up to six [`FromValue`] types, matching the
/// arities supported by [`Callable`].
///
/// [`Callable`]: crate::Callable
pub trait FromValues: Sized {
    /// The number of values the tuple is built from.
    const ARITY: usize;

    /// Builds the tuple from `values`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::ArityMismatch`] if the number of values is
    /// wrong, or [`InvokeError::TypeMismatch`] for the first value whose kind
    /// does not match its position in the tuple.
    fn from_values(values: &[Value]) -> Result<Self, InvokeError>;
}

fn extract<T: FromValue>(values: &[Value], index: usize) -> Result<T, InvokeError> {
    let value = values.get(index).ok_or(InvokeError::ArityMismatch {
        expected: index + 1,
        found: values.len(),
    })?;

    T::from_value(value).ok_or(InvokeError::TypeMismatch {
        index,
        expected: T::KIND,
        found: value.kind(),
    })
}

macro_rules! impl_from_values {
    ($arity:literal; $($ty:ident: $index:literal),*) => {
        impl<$($ty: FromValue),*> FromValues for ($($ty,)*) {
            const ARITY: usize = $arity;

            fn from_values(values: &[Value]) -> Result<Self, InvokeError> {
                if values.len() != $arity {
                    return Err(InvokeError::ArityMismatch {
                        expected: $arity,
                        found: values.len(),
                    });
                }

                Ok(($(extract::<$ty>(values, $index)?,)*))
            }
        }
    };
}

impl_from_values!(0;);
impl_from_values!(1; A: 0);
impl_from_values!(2; A: 0, B: 1);
impl_from_values!(3; A: 0, B: 1, C: 2);
impl_from_values!(4; A: 0, B: 1, C: 2, D: 3);
impl_from_values!(5; A: 0, B: 1, C: 2, D: 3, E: 4);
impl_from_values!(6; A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(Value::Unit.kind(), ValueKind::Unit);
        assert_eq!(Value::from(true).kind(), ValueKind::Bool);
        assert_eq!(Value::from(3).kind(), ValueKind::Int);
        assert_eq!(Value::from("3").kind(), ValueKind::Text);
    }

    #[test]
    fn builds_tuples_from_matching_values() {
        let values = [Value::Int(3), Value::Text("three".into()), Value::Bool(false)];

        let (number, name, flag) = <(i64, String, bool)>::from_values(&values).unwrap();

        assert_eq!(number, 3);
        assert_eq!(name, "three");
        assert!(!flag);
    }

    #[test]
    fn empty_tuple_requires_no_values() {
        assert_eq!(<()>::from_values(&[]), Ok(()));
        assert_eq!(
            <()>::from_values(&[Value::Unit]),
            Err(InvokeError::ArityMismatch {
                expected: 0,
                found: 1
            })
        );
    }

    #[test]
    fn reports_wrong_number_of_values() {
        let result = <(i64, i64)>::from_values(&[Value::Int(1)]);

        assert_eq!(
            result,
            Err(InvokeError::ArityMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn reports_first_mismatched_value() {
        let values = [Value::Int(1), Value::Bool(true), Value::Unit];

        let err = <(i64, String, String)>::from_values(&values).unwrap_err();

        assert_eq!(
            err,
            InvokeError::TypeMismatch {
                index: 1,
                expected: ValueKind::Text,
                found: ValueKind::Bool,
            }
        );
        assert_eq!(
            err.to_string(),
            "argument 1 has the wrong type: expected text, found bool"
        );
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn values_serialize_as_tagged_variants() {
        let json = serde_json::to_string(&Value::Int(7)).unwrap();
        assert_eq!(json, r#"{"Int":7}"#);

        let kind: ValueKind = serde_json::from_str(r#""text""#).unwrap();
        assert_eq!(kind, ValueKind::Text);
    }
}

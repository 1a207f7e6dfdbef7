//! structural value representation
//!
//! Set elements are addressed by their value, so a path step has to carry a
//! complete value together with its type. The model contains
//! - boolean (true/false)
//! - integer (signed, i64)
//! - decimal (f64)
//! - string (utf-8)
//! - list, set and tuple (sequences of values)
//! - map (string keyed, single element type) and object (named attributes)
//!
//! Any value may also be `null` or `unknown`, in which case only its [Type] is known.
//!
//! Equality is structural: payload and type must both match. Maps, objects and sets
//! compare without regard to order.
use indexmap::IndexMap;
use serde::{
    ser::{SerializeMap, SerializeSeq},
    Serializer,
};
use std::fmt::{self, Display, Formatter};

/// All possible value types
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Boolean,
    Integer,
    Decimal,
    String,
    List(Box<Type>),
    Set(Box<Type>),
    Map(Box<Type>),
    Object(IndexMap<String, Type>),
    Tuple(Vec<Type>),
    /// Type is only known at runtime
    Dynamic,
}

/// A typed value
#[derive(Debug, Clone)]
pub enum Value {
    Null(Type),
    Unknown(Type),
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    String(String),
    List {
        element_type: Type,
        elements: Vec<Value>,
    },
    Set {
        element_type: Type,
        elements: Vec<Value>,
    },
    Tuple(Vec<Value>),
    Map {
        element_type: Type,
        entries: IndexMap<String, Value>,
    },
    Object {
        attribute_types: IndexMap<String, Type>,
        attributes: IndexMap<String, Value>,
    },
}

impl Value {
    pub fn null(ty: Type) -> Self {
        Value::Null(ty)
    }

    pub fn unknown(ty: Type) -> Self {
        Value::Unknown(ty)
    }

    pub fn list(element_type: Type, elements: impl IntoIterator<Item = Value>) -> Self {
        Value::List {
            element_type,
            elements: elements.into_iter().collect(),
        }
    }

    pub fn set(element_type: Type, elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Set {
            element_type,
            elements: elements.into_iter().collect(),
        }
    }

    pub fn tuple(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(elements.into_iter().collect())
    }

    pub fn map<K: Into<String>>(
        element_type: Type,
        entries: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Value::Map {
            element_type,
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Object with attribute types derived from the attribute values
    pub fn object<K: Into<String>>(attributes: impl IntoIterator<Item = (K, Value)>) -> Self {
        let attributes: IndexMap<String, Value> = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect();
        let attribute_types = attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.ty()))
            .collect();

        Value::Object {
            attribute_types,
            attributes,
        }
    }

    pub fn ty(&self) -> Type {
        match self {
            Value::Null(ty) | Value::Unknown(ty) => ty.clone(),
            Value::Boolean(_) => Type::Boolean,
            Value::Integer(_) => Type::Integer,
            Value::Decimal(_) => Type::Decimal,
            Value::String(_) => Type::String,
            Value::List { element_type, .. } => Type::List(Box::new(element_type.clone())),
            Value::Set { element_type, .. } => Type::Set(Box::new(element_type.clone())),
            Value::Tuple(elements) => Type::Tuple(elements.iter().map(Value::ty).collect()),
            Value::Map { element_type, .. } => Type::Map(Box::new(element_type.clone())),
            Value::Object {
                attribute_types, ..
            } => Type::Object(attribute_types.clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown(_))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;

        match (self, other) {
            (Null(a), Null(b)) | (Unknown(a), Unknown(b)) => a == b,
            (Boolean(a), Boolean(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (Decimal(a), Decimal(b)) => a == b || (a.is_nan() && b.is_nan()),
            (String(a), String(b)) => a == b,
            (
                List {
                    element_type: ta,
                    elements: a,
                },
                List {
                    element_type: tb,
                    elements: b,
                },
            ) => ta == tb && a == b,
            (
                Set {
                    element_type: ta,
                    elements: a,
                },
                Set {
                    element_type: tb,
                    elements: b,
                },
            ) => ta == tb && same_elements(a, b),
            (Tuple(a), Tuple(b)) => a == b,
            (
                Map {
                    element_type: ta,
                    entries: a,
                },
                Map {
                    element_type: tb,
                    entries: b,
                },
            ) => ta == tb && a == b,
            (
                Object {
                    attribute_types: ta,
                    attributes: a,
                },
                Object {
                    attribute_types: tb,
                    attributes: b,
                },
            ) => ta == tb && a == b,
            _ => false,
        }
    }
}

/// Multiset comparison, every element of `a` is paired with a distinct element of `b`
fn same_elements(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut remaining: Vec<&Value> = b.iter().collect();
    a.iter().all(|element| {
        match remaining.iter().position(|candidate| *candidate == element) {
            Some(index) => {
                remaining.swap_remove(index);
                true
            }
            None => false,
        }
    })
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

/// Renders the json-ish form used inside `[Value(...)]` path steps
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null(_) => f.write_str("<null>"),
            Value::Unknown(_) => f.write_str("<unknown>"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Decimal(value) => write!(f, "{value:.6}"),
            Value::String(value) => crate::util::write_quoted(f, value),
            Value::List { elements, .. } | Value::Set { elements, .. } | Value::Tuple(elements) => {
                f.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Map {
                entries: values, ..
            }
            | Value::Object {
                attributes: values,
                ..
            } => {
                let mut keys: Vec<&String> = values.keys().collect();
                keys.sort();

                f.write_str("{")?;
                for (index, key) in keys.into_iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    crate::util::write_quoted(f, key)?;
                    write!(f, ":{}", values[key])?;
                }
                f.write_str("}")
            }
        }
    }
}

impl serde::ser::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null(_) | Value::Unknown(_) => serializer.serialize_unit(),
            Value::Boolean(value) => serializer.serialize_bool(*value),
            Value::Integer(value) => serializer.serialize_i64(*value),
            Value::Decimal(value) => serializer.serialize_f64(*value),
            Value::String(value) => serializer.serialize_str(value),
            Value::List { elements, .. } | Value::Set { elements, .. } | Value::Tuple(elements) => {
                let mut ser = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    ser.serialize_element(element)?;
                }
                ser.end()
            }
            Value::Map {
                entries: values, ..
            }
            | Value::Object {
                attributes: values,
                ..
            } => {
                let mut ser = serializer.serialize_map(Some(values.len()))?;
                for (element_key, element_value) in values {
                    ser.serialize_entry(element_key, element_value)?;
                }
                ser.end()
            }
        }
    }
}

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use ordered_float::OrderedFloat;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The canonical mapping: string keys to dynamically-typed values.
///
/// Details, options and feature dictionaries are carried in this form once
/// they have been through [`normalize`](crate::normalize::normalize).
pub type Dict = BTreeMap<String, Value>;

/// Representation of a namespaced symbol identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol {
    namespace: Option<String>,
    name: String,
}

impl Symbol {
    pub fn new(namespace: Option<String>, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
        }
    }

    pub fn simple(name: impl Into<String>) -> Self {
        Self::new(None, name)
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_str(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}/{}", ns, self.name),
            None => self.name.clone(),
        }
    }

    pub fn parse(input: &str) -> Self {
        if let Some((ns, name)) = input.split_once('/') {
            Self::new(Some(ns.to_string()), name)
        } else {
            Self::simple(input)
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}/{}", ns, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Keyword identifiers mirror symbols but print with a leading ':'.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Keyword(Symbol);

impl Keyword {
    pub fn new(namespace: Option<String>, name: impl Into<String>) -> Self {
        Self(Symbol::new(namespace, name))
    }

    pub fn simple(name: impl Into<String>) -> Self {
        Self(Symbol::simple(name))
    }

    pub fn namespace(&self) -> Option<&str> {
        self.0.namespace()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn as_symbol(&self) -> &Symbol {
        &self.0
    }

    pub fn parse(input: &str) -> Self {
        let trimmed = input.strip_prefix(':').unwrap_or(input);
        Self(Symbol::parse(trimmed))
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(":")?;
        self.0.fmt(f)
    }
}

/// A value carrying an application-defined tag. Opaque to lookups.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaggedValue {
    pub tag: Symbol,
    pub value: Box<Value>,
}

impl TaggedValue {
    pub fn new(tag: Symbol, value: Value) -> Self {
        Self {
            tag,
            value: Box::new(value),
        }
    }
}

/// Wraps a value with metadata.
///
/// Annotations are transparent for dictionary access: a key or value wrapped
/// in one behaves like the wrapped value when normalizing and reading
/// options.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Annotation {
    pub metadata: Vec<(Value, Value)>,
    pub value: Box<Value>,
}

impl Annotation {
    pub fn new(metadata: Vec<(Value, Value)>, value: Value) -> Self {
        Self {
            metadata,
            value: Box::new(value),
        }
    }

    /// Create an annotation with just a doc string.
    pub fn with_doc(doc: impl Into<String>, value: Value) -> Self {
        Self::new(
            vec![(
                Value::Keyword(Keyword::simple("doc")),
                Value::String(doc.into()),
            )],
            value,
        )
    }

    /// Get the documentation string if present.
    pub fn doc(&self) -> Option<&str> {
        let key = Value::Keyword(Keyword::simple("doc"));
        self.metadata.iter().find_map(|(k, v)| match v {
            Value::String(s) if *k == key => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn inner(&self) -> &Value {
        &self.value
    }

    pub fn unwrap(self) -> Value {
        *self.value
    }
}

/// Dynamically-typed value found in protocol dictionaries.
///
/// `Map` is the shape decoders hand over: keys of any kind, possibly
/// duplicated, in wire order. `Dict` is the canonical string-keyed form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float32(OrderedFloat<f32>),
    Float64(OrderedFloat<f64>),
    String(String),
    Bytes(Vec<u8>),
    Symbol(Symbol),
    Keyword(Keyword),
    Vector(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Dict(Dict),
    Tagged(TaggedValue),
    Annotated(Box<Annotation>),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float32(_) => "f32",
            Value::Float64(_) => "f64",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Symbol(_) => "symbol",
            Value::Keyword(_) => "keyword",
            Value::Vector(_) => "vector",
            Value::Map(_) => "map",
            Value::Dict(_) => "dict",
            Value::Tagged(_) => "tagged",
            Value::Annotated(_) => "annotated",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Unwrap any annotations to get the underlying data value.
    pub fn unwrap_annotations(&self) -> &Value {
        match self {
            Value::Annotated(ann) => ann.inner().unwrap_annotations(),
            other => other,
        }
    }

    /// Consume self and unwrap all annotations.
    pub fn into_unwrapped(self) -> Value {
        match self {
            Value::Annotated(ann) => ann.unwrap().into_unwrapped(),
            other => other,
        }
    }

    /// Wrap this value with an annotation.
    pub fn annotate(self, metadata: Vec<(Value, Value)>) -> Value {
        Value::Annotated(Box::new(Annotation::new(metadata, self)))
    }

    /// Add a doc string annotation to this value.
    pub fn with_doc(self, doc: impl Into<String>) -> Value {
        Value::Annotated(Box::new(Annotation::with_doc(doc, self)))
    }

    /// True for foreign maps, canonical dicts, and annotations wrapping either.
    pub fn is_map_shaped(&self) -> bool {
        matches!(self.unwrap_annotations(), Value::Map(_) | Value::Dict(_))
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Int(value as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::UInt(value as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float32(OrderedFloat(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(OrderedFloat(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Keyword> for Value {
    fn from(value: Keyword) -> Self {
        Value::Keyword(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Vector(value)
    }
}

impl From<Dict> for Value {
    fn from(value: Dict) -> Self {
        Value::Dict(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

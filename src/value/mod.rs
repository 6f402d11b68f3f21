//! Dynamic values.

mod registry;

pub use registry::Registry;

use crate::kind::Kind;
use crate::ser::Encode;
use crate::sink::Sink;
use std::any::{Any, TypeId};
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::sync::Arc;

/// Possible errors that can arise during accessing a [`Value`].
#[derive(Debug)]
pub enum ValueError {
    KindMismatch { expected: Kind, actual: Kind },
    StructMismatch,
}

impl Display for ValueError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::KindMismatch { expected, actual } => {
                write!(f, "kind mismatch, expect {}, but actual {}", expected, actual)
            }
            ValueError::StructMismatch => {
                write!(f, "struct value holds a different payload type")
            }
        }
    }
}

impl Error for ValueError {}

pub type ValueResult<T> = std::result::Result<T, ValueError>;

/// A dynamically-tagged JSON value.
///
/// A `Value` represents any supported JSON shape behind a runtime tag;
/// heterogeneous data can be stored, introspected through the checked
/// accessors, and re-serialized without its concrete type being known at
/// compile time. Values are immutable once tagged.
///
/// ```rust
/// use rawjson::Value;
///
/// let values = Value::Array(vec![Value::from(8u8), Value::from("x"), Value::from(true)]);
/// assert_eq!(rawjson::stringify(&values), r#"[8,"x",true]"#);
/// ```
#[derive(Clone, Debug)]
pub enum Value {
    /// Pre-encoded JSON text, emitted verbatim.
    Raw(String),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F64(f64),
    Bool(bool),
    String(String),
    Array(Vec<Value>),
    /// A user struct, re-serialized through the registry.
    Struct(StructValue),
}

/// Type-erased payload of a [`Value::Struct`].
///
/// Carries the payload type's `TypeId` for registry lookup plus shared
/// ownership of the erased data; the registry itself owns only a function
/// pointer, never data.
#[derive(Clone)]
pub struct StructValue {
    type_id: TypeId,
    data: Arc<dyn Any + Send + Sync>,
}

impl fmt::Debug for StructValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructValue").field("type_id", &self.type_id).finish()
    }
}

impl Value {
    /// Wraps pre-encoded JSON text.
    #[inline]
    pub fn raw<T: Into<String>>(text: T) -> Value {
        Value::Raw(text.into())
    }

    /// Wraps a user struct, registering its encode function in the global
    /// registry on first use.
    #[inline]
    pub fn from_struct<T: Encode + Send + Sync + 'static>(value: T) -> Value {
        Registry::global().register::<T>();
        Value::Struct(StructValue {
            type_id: TypeId::of::<T>(),
            data: Arc::new(value),
        })
    }

    /// Runtime tag of this value.
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Raw(_) => Kind::Raw,
            Value::U8(_) => Kind::U8,
            Value::U16(_) => Kind::U16,
            Value::U32(_) => Kind::U32,
            Value::U64(_) => Kind::U64,
            Value::F64(_) => Kind::F64,
            Value::Bool(_) => Kind::Bool,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Struct(_) => Kind::Struct,
        }
    }

    #[inline]
    fn mismatch<T>(&self, expected: Kind) -> ValueResult<T> {
        Err(ValueError::KindMismatch {
            expected,
            actual: self.kind(),
        })
    }

    /// If `Value` is `U8`, returns it. Returns `ValueError` otherwise.
    #[inline]
    pub fn as_u8(&self) -> ValueResult<u8> {
        match self {
            Value::U8(v) => Ok(*v),
            _ => self.mismatch(Kind::U8),
        }
    }

    /// If `Value` is `U16`, returns it. Returns `ValueError` otherwise.
    #[inline]
    pub fn as_u16(&self) -> ValueResult<u16> {
        match self {
            Value::U16(v) => Ok(*v),
            _ => self.mismatch(Kind::U16),
        }
    }

    /// If `Value` is `U32`, returns it. Returns `ValueError` otherwise.
    #[inline]
    pub fn as_u32(&self) -> ValueResult<u32> {
        match self {
            Value::U32(v) => Ok(*v),
            _ => self.mismatch(Kind::U32),
        }
    }

    /// If `Value` is `U64`, returns it. Returns `ValueError` otherwise.
    #[inline]
    pub fn as_u64(&self) -> ValueResult<u64> {
        match self {
            Value::U64(v) => Ok(*v),
            _ => self.mismatch(Kind::U64),
        }
    }

    /// If `Value` is `F64`, returns it. Returns `ValueError` otherwise.
    #[inline]
    pub fn as_f64(&self) -> ValueResult<f64> {
        match self {
            Value::F64(v) => Ok(*v),
            _ => self.mismatch(Kind::F64),
        }
    }

    /// If `Value` is `Bool`, returns it. Returns `ValueError` otherwise.
    #[inline]
    pub fn as_bool(&self) -> ValueResult<bool> {
        match self {
            Value::Bool(v) => Ok(*v),
            _ => self.mismatch(Kind::Bool),
        }
    }

    /// If `Value` is `String` or `Raw`, returns the text. Returns
    /// `ValueError` otherwise.
    #[inline]
    pub fn as_str(&self) -> ValueResult<&str> {
        match self {
            Value::String(s) => Ok(s),
            Value::Raw(s) => Ok(s),
            _ => self.mismatch(Kind::String),
        }
    }

    /// If `Value` is `Array`, returns its elements. Returns `ValueError`
    /// otherwise.
    #[inline]
    pub fn as_array(&self) -> ValueResult<&[Value]> {
        match self {
            Value::Array(v) => Ok(v),
            _ => self.mismatch(Kind::Array),
        }
    }

    /// If `Value` is `Struct` holding a `T`, returns a reference to the
    /// payload. Returns `ValueError` otherwise.
    #[inline]
    pub fn as_struct<T: 'static>(&self) -> ValueResult<&T> {
        match self {
            Value::Struct(s) => s
                .data
                .as_ref()
                .downcast_ref::<T>()
                .ok_or(ValueError::StructMismatch),
            _ => self.mismatch(Kind::Struct),
        }
    }
}

impl From<u8> for Value {
    #[inline]
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    #[inline]
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u32> for Value {
    #[inline]
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<u64> for Value {
    #[inline]
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<f32> for Value {
    /// `f32` promotes to the `F64` kind.
    #[inline]
    fn from(v: f32) -> Self {
        Value::F64(v as f64)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl Encode for Value {
    fn encode(&self, sink: &mut Sink) {
        match self {
            Value::Raw(text) => sink.push_str(text),
            Value::U8(v) => v.encode(sink),
            Value::U16(v) => v.encode(sink),
            Value::U32(v) => v.encode(sink),
            Value::U64(v) => v.encode(sink),
            Value::F64(v) => v.encode(sink),
            Value::Bool(v) => v.encode(sink),
            Value::String(s) => s.encode(sink),
            Value::Array(elements) => elements.as_slice().encode(sink),
            Value::Struct(s) => Registry::global().encode_by_id(s.type_id, s.data.as_ref(), sink),
        }
    }
}

impl Display for Value {
    /// Renders the value back to JSON text.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::stringify(self))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Raw(a), Value::Raw(b)) => a == b,
            (Value::U8(a), Value::U8(b)) => a == b,
            (Value::U16(a), Value::U16(b)) => a == b,
            (Value::U32(a), Value::U32(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Struct(a), Value::Struct(b)) => {
                a.type_id == b.type_id && Arc::ptr_eq(&a.data, &b.data)
            }
            _ => false,
        }
    }
}

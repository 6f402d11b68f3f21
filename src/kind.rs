//! Value kinds.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Runtime tag of a [`Value`](crate::Value).
///
/// The tag fully determines how a value's storage is interpreted and never
/// changes after construction.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum Kind {
    Raw = 0,
    U8 = 1,
    U16 = 2,
    U32 = 3,
    U64 = 4,
    F64 = 5,
    Bool = 6,
    String = 7,
    Array = 8,
    Struct = 9,
}

impl From<Kind> for u8 {
    #[inline]
    fn from(kind: Kind) -> Self {
        kind as u8
    }
}

#[derive(Debug)]
#[repr(transparent)]
pub struct InvalidKind(u8);

impl TryFrom<u8> for Kind {
    type Error = InvalidKind;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Kind::Raw),
            1 => Ok(Kind::U8),
            2 => Ok(Kind::U16),
            3 => Ok(Kind::U32),
            4 => Ok(Kind::U64),
            5 => Ok(Kind::F64),
            6 => Ok(Kind::Bool),
            7 => Ok(Kind::String),
            8 => Ok(Kind::Array),
            9 => Ok(Kind::Struct),
            v => Err(InvalidKind(v)),
        }
    }
}

impl Display for Kind {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let s = match self {
            Kind::Raw => "raw",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::F64 => "f64",
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Struct => "struct",
        };
        write!(f, "{}", s)
    }
}

impl Display for InvalidKind {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "invalid kind value '{}'", self.0)
    }
}

impl Error for InvalidKind {}

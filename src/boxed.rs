//! Boxed primitives.

use crate::de::{Decode, ParseResult};
use crate::ser::Encode;
use crate::sink::Sink;

/// Wrapper that lets a primitive participate in nullable positions.
///
/// A bare primitive cannot represent absence; `Option<Boxed<T>>` encodes
/// `None` as the `null` literal and `Some` as the plain inner value.
///
/// ```rust
/// use rawjson::Boxed;
///
/// let absent: Option<Boxed<i32>> = None;
/// assert_eq!(rawjson::stringify(&absent), "null");
/// assert_eq!(rawjson::parse::<Option<Boxed<i32>>>("null").unwrap(), None);
/// assert_eq!(rawjson::parse::<Option<Boxed<i32>>>("7").unwrap(), Some(Boxed(7)));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Boxed<T>(pub T);

impl<T> Boxed<T> {
    #[inline]
    pub fn new(value: T) -> Boxed<T> {
        Boxed(value)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Boxed<T> {
    #[inline]
    fn from(value: T) -> Boxed<T> {
        Boxed(value)
    }
}

impl<T: Encode> Encode for Boxed<T> {
    #[inline]
    fn encode(&self, sink: &mut Sink) {
        self.0.encode(sink);
    }
}

impl<T: Decode> Decode for Boxed<T> {
    #[inline]
    fn decode(bytes: &[u8]) -> ParseResult<Self> {
        T::decode(bytes).map(Boxed)
    }
}

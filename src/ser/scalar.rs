//! Scalar serialization.

use crate::ser::Encode;
use crate::sink::Sink;

const TRUE_WORD: &[u8] = b"true";
const FALSE_WORD: &[u8] = b"false";
pub(crate) const NULL_WORD: &[u8] = b"null";

impl Encode for bool {
    #[inline]
    fn encode(&self, sink: &mut Sink) {
        sink.push_bytes(if *self { TRUE_WORD } else { FALSE_WORD });
    }
}

macro_rules! impl_encode_integer {
    ($($ty:ty)*) => {$(
        impl Encode for $ty {
            #[inline]
            fn encode(&self, sink: &mut Sink) {
                let mut buf = itoa::Buffer::new();
                sink.push_str(buf.format(*self));
            }
        }
    )*};
}

impl_encode_integer!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);

macro_rules! impl_encode_float {
    ($($ty:ty)*) => {$(
        impl Encode for $ty {
            /// Shortest round-trip decimal form. Non-finite values are outside
            /// JSON's grammar and render as `NaN`/`inf`/`-inf`.
            #[inline]
            fn encode(&self, sink: &mut Sink) {
                let mut buf = ryu::Buffer::new();
                sink.push_str(buf.format(*self));
            }
        }
    )*};
}

impl_encode_float!(f32 f64);

impl<T: Encode> Encode for Option<T> {
    #[inline]
    fn encode(&self, sink: &mut Sink) {
        match self {
            Some(value) => value.encode(sink),
            None => sink.push_bytes(NULL_WORD),
        }
    }
}

//! Array serialization.

use crate::ser::Encode;
use crate::sink::Sink;

/// Writes `[`, each element followed by a separator, then trims the trailing
/// separator and closes. The empty array is special-cased to `[]`.
#[inline]
fn encode_elements<T: Encode>(elements: &[T], sink: &mut Sink) {
    sink.push_byte(b'[');
    if !elements.is_empty() {
        for element in elements {
            element.encode(sink);
            sink.push_byte(b',');
        }
        sink.truncate(sink.offset() - 1);
    }
    sink.push_byte(b']');
}

impl<T: Encode> Encode for [T] {
    #[inline]
    fn encode(&self, sink: &mut Sink) {
        encode_elements(self, sink);
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    #[inline]
    fn encode(&self, sink: &mut Sink) {
        encode_elements(self, sink);
    }
}

impl<T: Encode> Encode for Vec<T> {
    #[inline]
    fn encode(&self, sink: &mut Sink) {
        encode_elements(self, sink);
    }
}

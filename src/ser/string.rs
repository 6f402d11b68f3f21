//! String serialization.

use crate::ser::Encode;
use crate::sink::Sink;

const BB: &[u8] = b"\\b"; // \x08
const TT: &[u8] = b"\\t"; // \x09
const NN: &[u8] = b"\\n"; // \x0A
const FF: &[u8] = b"\\f"; // \x0C
const RR: &[u8] = b"\\r"; // \x0D
const QU: &[u8] = b"\\\""; // \x22
const BS: &[u8] = b"\\\\"; // \x5C
const __: &[u8] = b"";

macro_rules! uu {
    ($hex:literal) => {
        concat!("\\u00", $hex).as_bytes()
    };
}

// Lookup table of escape sequences. A value of b"x" at index i means that
// byte i is escaped as "x" in the output. A value of b"" means that byte i
// is emitted unchanged. Control characters without a short form use the
// six-byte \u00XX form.
static ESCAPE: [&[u8]; 256] = [
    //        1         2         3         4         5         6         7         8         9         A   B         C   D   E         F
    uu!("00"), uu!("01"), uu!("02"), uu!("03"), uu!("04"), uu!("05"), uu!("06"), uu!("07"), BB, TT, NN, uu!("0b"), FF, RR, uu!("0e"), uu!("0f"), // 0
    uu!("10"), uu!("11"), uu!("12"), uu!("13"), uu!("14"), uu!("15"), uu!("16"), uu!("17"), uu!("18"), uu!("19"), uu!("1a"), uu!("1b"), uu!("1c"), uu!("1d"), uu!("1e"), uu!("1f"), // 1
    __, __, QU, __, __, __, __, __, __, __, __, __, __, __, __, __, // 2
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 3
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 4
    __, __, __, __, __, __, __, __, __, __, __, __, BS, __, __, __, // 5
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 6
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 7
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 8
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 9
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // A
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // B
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // C
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // D
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // E
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // F
];

/// Appends `value` wrapped in quotes, escaping quote, backslash and control
/// characters.
#[inline]
pub(crate) fn push_escaped_str(value: &str, sink: &mut Sink) {
    let bytes = value.as_bytes();
    sink.reserve(bytes.len() + 2);
    sink.push_byte(b'"');

    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        let escape = ESCAPE[byte as usize];
        if escape.is_empty() {
            continue;
        }

        if start < i {
            sink.push_bytes(&bytes[start..i]);
        }
        sink.push_bytes(escape);
        start = i + 1;
    }

    if start != bytes.len() {
        sink.push_bytes(&bytes[start..]);
    }

    sink.push_byte(b'"');
}

impl Encode for str {
    #[inline]
    fn encode(&self, sink: &mut Sink) {
        push_escaped_str(self, sink);
    }
}

impl Encode for String {
    #[inline]
    fn encode(&self, sink: &mut Sink) {
        push_escaped_str(self, sink);
    }
}

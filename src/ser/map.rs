//! Map serialization.

use crate::ser::{push_escaped_str, Encode};
use crate::sink::Sink;
use std::collections::{BTreeMap, HashMap};

/// Writes `{`, then `"key":value` per entry with a separator, trimming the
/// trailing separator. Entries follow the map's own iteration order.
#[inline]
fn encode_entries<'a, V, I>(entries: I, sink: &mut Sink)
where
    V: Encode + 'a,
    I: Iterator<Item = (&'a String, &'a V)>,
{
    sink.push_byte(b'{');
    let body = sink.offset();
    for (key, value) in entries {
        push_escaped_str(key, sink);
        sink.push_byte(b':');
        value.encode(sink);
        sink.push_byte(b',');
    }
    if sink.offset() > body {
        sink.truncate(sink.offset() - 1);
    }
    sink.push_byte(b'}');
}

impl<V: Encode, S> Encode for HashMap<String, V, S> {
    #[inline]
    fn encode(&self, sink: &mut Sink) {
        encode_entries(self.iter(), sink);
    }
}

impl<V: Encode> Encode for BTreeMap<String, V> {
    #[inline]
    fn encode(&self, sink: &mut Sink) {
        encode_entries(self.iter(), sink);
    }
}

//! Object serialization.

use crate::ser::{push_escaped_str, Encode};
use crate::sink::Sink;

/// Writes the fields of a struct as a JSON object.
///
/// Hand-written [`Encode`] impls emit `"key":value` pairs in field
/// declaration order, skipping absent optional fields:
///
/// ```rust
/// use rawjson::{Encode, ObjectWriter, Sink};
///
/// struct Player {
///     name: String,
///     age: u32,
///     motto: Option<String>,
/// }
///
/// impl Encode for Player {
///     fn encode(&self, sink: &mut Sink) {
///         let mut obj = ObjectWriter::new(sink);
///         obj.field("name", &self.name);
///         obj.field("age", &self.age);
///         obj.optional_field("motto", &self.motto);
///         obj.finish();
///     }
/// }
///
/// let player = Player { name: "Emmet".into(), age: 23, motto: None };
/// assert_eq!(rawjson::stringify(&player), r#"{"name":"Emmet","age":23}"#);
/// ```
pub struct ObjectWriter<'a> {
    sink: &'a mut Sink,
    body: usize,
}

impl<'a> ObjectWriter<'a> {
    /// Opens the object, writing `{`.
    #[inline]
    pub fn new(sink: &'a mut Sink) -> ObjectWriter<'a> {
        sink.push_byte(b'{');
        let body = sink.offset();
        ObjectWriter { sink, body }
    }

    /// Writes one `"key":value` field.
    #[inline]
    pub fn field<T: Encode + ?Sized>(&mut self, key: &str, value: &T) -> &mut Self {
        push_escaped_str(key, self.sink);
        self.sink.push_byte(b':');
        value.encode(self.sink);
        self.sink.push_byte(b',');
        self
    }

    /// Writes the field only when the value is present; `None` emits nothing.
    #[inline]
    pub fn optional_field<T: Encode>(&mut self, key: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.field(key, value);
        }
        self
    }

    /// Closes the object, trimming the trailing separator.
    #[inline]
    pub fn finish(self) {
        if self.sink.offset() > self.body {
            self.sink.truncate(self.sink.offset() - 1);
        }
        self.sink.push_byte(b'}');
    }
}

//! Object deserialization.

use crate::de::map::object_body;
use crate::de::{split_entry, Elements, ParseError, ParseResult};

/// Iterates the `"key":value` fields of an object range.
///
/// Hand-written [`Decode`](crate::Decode) impls walk the fields, matching
/// keys by name and recursing per field; unknown keys are skipped:
///
/// ```rust
/// use rawjson::{Decode, ObjectReader, ParseError, ParseResult};
///
/// #[derive(Debug, PartialEq)]
/// struct Player {
///     name: String,
///     age: u32,
/// }
///
/// impl Decode for Player {
///     fn decode(bytes: &[u8]) -> ParseResult<Self> {
///         let mut name = None;
///         let mut age = None;
///         let mut fields = ObjectReader::new(bytes)?;
///         while let Some((key, value)) = fields.next_field()? {
///             match key {
///                 "name" => name = Some(String::decode(value)?),
///                 "age" => age = Some(u32::decode(value)?),
///                 _ => {}
///             }
///         }
///         Ok(Player {
///             name: name.ok_or(ParseError::MissingField("name"))?,
///             age: age.ok_or(ParseError::MissingField("age"))?,
///         })
///     }
/// }
///
/// let player: Player = rawjson::parse(r#"{"name":"Emmet","age":23}"#).unwrap();
/// assert_eq!(player, Player { name: "Emmet".into(), age: 23 });
/// ```
///
/// Keys are returned as the raw span between their quotes; escaped key names
/// will not match a plain field name literal.
pub struct ObjectReader<'a> {
    elements: Elements<'a>,
}

impl<'a> ObjectReader<'a> {
    /// Verifies the brace pair of `bytes` and positions the reader at the
    /// first field.
    #[inline]
    pub fn new(bytes: &'a [u8]) -> ParseResult<ObjectReader<'a>> {
        let body = object_body(bytes)?;
        Ok(ObjectReader {
            elements: Elements::new(body),
        })
    }

    /// Returns the next `(key, value)` field, or `None` past the last one.
    #[inline]
    pub fn next_field(&mut self) -> ParseResult<Option<(&'a str, &'a [u8])>> {
        let entry = match self.elements.next() {
            None => return Ok(None),
            Some(entry) => entry?,
        };
        let (key, value) = split_entry(entry)?;
        if key.len() < 2 || key[0] != b'"' || key[key.len() - 1] != b'"' {
            return Err(ParseError::UnexpectedToken {
                expected: "quoted key",
                found: *key.first().unwrap_or(&b' '),
            });
        }
        let key = std::str::from_utf8(&key[1..key.len() - 1])?;
        Ok(Some((key, value)))
    }
}

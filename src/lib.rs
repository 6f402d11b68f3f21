//! Buffer-oriented JSON serialization and deserialization in Rust.
//!
//! `rawjson` runs directly against linear byte buffers: serialization
//! appends UTF-8 bytes into a growable [`Sink`] at raw offsets, and
//! deserialization scans immutable byte ranges in place, extracting
//! substrings and primitives without building an intermediate parse tree.
//!
//! ## Text format
//!
//! ```BNF
//! value ::=
//!     "null" |
//!     bool |
//!     integer |
//!     float |
//!     string |
//!     date |
//!     array |
//!     object |
//!
//! bool ::= "true" | "false"
//! integer ::= "-"? digit+         // plain decimal digits
//! float ::= shortest round-trip decimal form
//! string ::= '"' character* '"'   // quote, backslash and control
//!                                 // characters are backslash-escaped
//! date ::= '"' iso-8601 'Z' '"'   // fixed length, millisecond precision
//!
//! array ::= "[" (value ("," value)*)? "]"
//! object ::= "{" (entry ("," entry)*)? "}"
//! entry ::= string ":" value
//! ```
//!
//! No whitespace is ever inserted and no separator precedes a closing
//! bracket or brace. The reader is lenient exactly where the writer is
//! unambiguous; it is not a general-purpose validating parser.
//!
//! ## Usage
//!
//! Primitives and containers work through [`stringify`] and [`parse`]:
//!
//! ```rust
//! let text = rawjson::stringify(&vec![8i32, 27, 2022]);
//! assert_eq!(text, "[8,27,2022]");
//!
//! let values: Vec<i32> = rawjson::parse(&text).unwrap();
//! assert_eq!(values, vec![8, 27, 2022]);
//! ```
//!
//! Struct types participate by supplying the two capabilities [`Encode`]
//! and [`Decode`], written against [`ObjectWriter`] and [`ObjectReader`]:
//!
//! ```rust
//! use rawjson::{Decode, Encode, ObjectReader, ObjectWriter, ParseError, ParseResult, Sink};
//!
//! struct Player {
//!     first_name: String,
//!     age: u8,
//!     is_verified: bool,
//! }
//!
//! impl Encode for Player {
//!     fn encode(&self, sink: &mut Sink) {
//!         let mut obj = ObjectWriter::new(sink);
//!         obj.field("firstName", &self.first_name);
//!         obj.field("age", &self.age);
//!         obj.field("isVerified", &self.is_verified);
//!         obj.finish();
//!     }
//! }
//!
//! impl Decode for Player {
//!     fn decode(bytes: &[u8]) -> ParseResult<Self> {
//!         let mut first_name = None;
//!         let mut age = None;
//!         let mut is_verified = None;
//!         let mut fields = ObjectReader::new(bytes)?;
//!         while let Some((key, value)) = fields.next_field()? {
//!             match key {
//!                 "firstName" => first_name = Some(String::decode(value)?),
//!                 "age" => age = Some(u8::decode(value)?),
//!                 "isVerified" => is_verified = Some(bool::decode(value)?),
//!                 _ => {}
//!             }
//!         }
//!         Ok(Player {
//!             first_name: first_name.ok_or(ParseError::MissingField("firstName"))?,
//!             age: age.ok_or(ParseError::MissingField("age"))?,
//!             is_verified: is_verified.ok_or(ParseError::MissingField("isVerified"))?,
//!         })
//!     }
//! }
//!
//! let player = Player { first_name: "Emmet".into(), age: 23, is_verified: true };
//! let text = rawjson::stringify(&player);
//! assert_eq!(text, r#"{"firstName":"Emmet","age":23,"isVerified":true}"#);
//!
//! let parsed: Player = rawjson::parse(&text).unwrap();
//! assert_eq!(parsed.first_name, "Emmet");
//! ```
//!
//! Heterogeneous data goes through the dynamically-tagged [`Value`]:
//!
//! ```rust
//! use rawjson::{Kind, Value};
//!
//! let value = Value::Array(vec![Value::from(1u8), Value::from("two")]);
//! assert_eq!(value.kind(), Kind::Array);
//! assert_eq!(value.to_string(), r#"[1,"two"]"#);
//! ```

mod boxed;
mod date;
mod de;
mod kind;
mod ser;
mod sink;
mod value;

pub use self::{
    boxed::Boxed,
    date::DateTime,
    de::{parse, Decode, ObjectReader, ParseError, ParseResult},
    kind::{InvalidKind, Kind},
    ser::{stringify, Encode, ObjectWriter},
    sink::Sink,
    value::{Registry, StructValue, Value, ValueError, ValueResult},
};

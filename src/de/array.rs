//! Array deserialization.

use crate::de::{Decode, Elements, ParseError, ParseResult};

/// Verifies the bracket pair and returns the body range.
#[inline]
pub(crate) fn array_body(bytes: &[u8]) -> ParseResult<&[u8]> {
    match bytes.first() {
        None => return Err(ParseError::UnexpectedEnd),
        Some(&b'[') => {}
        Some(&found) => {
            return Err(ParseError::UnexpectedToken {
                expected: "'['",
                found,
            })
        }
    }
    match bytes.last() {
        Some(&b']') if bytes.len() >= 2 => Ok(&bytes[1..bytes.len() - 1]),
        Some(&found) => Err(ParseError::UnexpectedToken {
            expected: "']'",
            found,
        }),
        None => Err(ParseError::UnexpectedEnd),
    }
}

impl<T: Decode> Decode for Vec<T> {
    #[inline]
    fn decode(bytes: &[u8]) -> ParseResult<Self> {
        let body = array_body(bytes)?;
        if body.is_empty() {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        for element in Elements::new(body) {
            out.push(T::decode(element?)?);
        }
        Ok(out)
    }
}

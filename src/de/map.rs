//! Map deserialization.

use crate::de::{decode_string, split_entry, Decode, Elements, ParseError, ParseResult};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Verifies the brace pair and returns the body range.
#[inline]
pub(crate) fn object_body(bytes: &[u8]) -> ParseResult<&[u8]> {
    match bytes.first() {
        None => return Err(ParseError::UnexpectedEnd),
        Some(&b'{') => {}
        Some(&found) => {
            return Err(ParseError::UnexpectedToken {
                expected: "'{'",
                found,
            })
        }
    }
    match bytes.last() {
        Some(&b'}') if bytes.len() >= 2 => Ok(&bytes[1..bytes.len() - 1]),
        Some(&found) => Err(ParseError::UnexpectedToken {
            expected: "'}'",
            found,
        }),
        None => Err(ParseError::UnexpectedEnd),
    }
}

#[inline]
fn decode_entries<V, F>(bytes: &[u8], mut insert: F) -> ParseResult<()>
where
    V: Decode,
    F: FnMut(String, V),
{
    let body = object_body(bytes)?;
    if body.is_empty() {
        return Ok(());
    }
    for entry in Elements::new(body) {
        let (key, value) = split_entry(entry?)?;
        insert(decode_string(key)?, V::decode(value)?);
    }
    Ok(())
}

impl<V: Decode, S: BuildHasher + Default> Decode for HashMap<String, V, S> {
    #[inline]
    fn decode(bytes: &[u8]) -> ParseResult<Self> {
        let mut out = HashMap::with_hasher(S::default());
        decode_entries(bytes, |key, value| {
            out.insert(key, value);
        })?;
        Ok(out)
    }
}

impl<V: Decode> Decode for BTreeMap<String, V> {
    #[inline]
    fn decode(bytes: &[u8]) -> ParseResult<Self> {
        let mut out = BTreeMap::new();
        decode_entries(bytes, |key, value| {
            out.insert(key, value);
        })?;
        Ok(out)
    }
}

//! Scalar deserialization.

use crate::de::{Decode, ParseError, ParseResult};

impl Decode for bool {
    /// Matches the first byte only (`t` is true, anything else false),
    /// trusting the writer's `true`/`false` tokens.
    #[inline]
    fn decode(bytes: &[u8]) -> ParseResult<Self> {
        match bytes.first() {
            Some(&b't') => Ok(true),
            Some(_) => Ok(false),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}

// Digits accumulate as a negative magnitude and positive results negate at
// the end, so the minimum value of each signed width round-trips.
macro_rules! impl_decode_signed {
    ($($ty:ty)*) => {$(
        impl Decode for $ty {
            #[inline]
            fn decode(bytes: &[u8]) -> ParseResult<Self> {
                let (negative, digits) = match bytes.first() {
                    None => return Err(ParseError::UnexpectedEnd),
                    Some(&b'-') => (true, &bytes[1..]),
                    Some(_) => (false, bytes),
                };
                if digits.is_empty() {
                    return Err(ParseError::InvalidNumber);
                }
                let mut value: $ty = 0;
                for &byte in digits {
                    if !byte.is_ascii_digit() {
                        return Err(ParseError::InvalidNumber);
                    }
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_sub((byte - b'0') as $ty))
                        .ok_or(ParseError::NumberOutOfRange)?;
                }
                if negative {
                    Ok(value)
                } else {
                    value.checked_neg().ok_or(ParseError::NumberOutOfRange)
                }
            }
        }
    )*};
}

impl_decode_signed!(i8 i16 i32 i64 isize);

macro_rules! impl_decode_unsigned {
    ($($ty:ty)*) => {$(
        impl Decode for $ty {
            #[inline]
            fn decode(bytes: &[u8]) -> ParseResult<Self> {
                if bytes.is_empty() {
                    return Err(ParseError::UnexpectedEnd);
                }
                let mut value: $ty = 0;
                for &byte in bytes {
                    if !byte.is_ascii_digit() {
                        return Err(ParseError::InvalidNumber);
                    }
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add((byte - b'0') as $ty))
                        .ok_or(ParseError::NumberOutOfRange)?;
                }
                Ok(value)
            }
        }
    )*};
}

impl_decode_unsigned!(u8 u16 u32 u64 usize);

macro_rules! impl_decode_float {
    ($($ty:ty)*) => {$(
        impl Decode for $ty {
            #[inline]
            fn decode(bytes: &[u8]) -> ParseResult<Self> {
                let s = std::str::from_utf8(bytes)?;
                s.parse().map_err(|_| ParseError::InvalidNumber)
            }
        }
    )*};
}

impl_decode_float!(f32 f64);

impl<T: Decode> Decode for Option<T> {
    /// Exactly the 4-byte `null` token yields the absent state.
    #[inline]
    fn decode(bytes: &[u8]) -> ParseResult<Self> {
        if bytes == b"null" {
            Ok(None)
        } else {
            T::decode(bytes).map(Some)
        }
    }
}

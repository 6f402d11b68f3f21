//! Date values.

use crate::de::{Decode, ParseError, ParseResult};
use crate::ser::Encode;
use crate::sink::Sink;
use time::error::ComponentRange;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// `"YYYY-MM-DDTHH:MM:SS.mmmZ"` without the quotes.
const FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// A point in time, encoded as a quoted fixed-length ISO-8601 string.
///
/// The inner timestamp is normalized to UTC and millisecond precision on
/// construction so that values round-trip exactly through their encoded
/// form.
///
/// ```rust
/// use rawjson::DateTime;
///
/// let date = DateTime::from_unix_millis(1_640_995_200_000).unwrap();
/// assert_eq!(rawjson::stringify(&date), r#""2022-01-01T00:00:00.000Z""#);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime(OffsetDateTime);

impl DateTime {
    /// Creates a `DateTime`, dropping any sub-millisecond component.
    #[inline]
    pub fn new(inner: OffsetDateTime) -> DateTime {
        let millis = inner.nanosecond() / 1_000_000;
        let truncated = inner
            .replace_nanosecond(millis * 1_000_000)
            .expect("truncating a nanosecond component cannot overflow");
        DateTime(truncated.to_offset(time::UtcOffset::UTC))
    }

    /// Creates a `DateTime` from milliseconds since the Unix epoch.
    #[inline]
    pub fn from_unix_millis(millis: i64) -> Result<DateTime, ComponentRange> {
        let inner = OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * 1_000_000)?;
        Ok(DateTime(inner))
    }

    /// Milliseconds since the Unix epoch.
    #[inline]
    pub fn unix_millis(&self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    #[inline]
    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for DateTime {
    #[inline]
    fn from(inner: OffsetDateTime) -> DateTime {
        DateTime::new(inner)
    }
}

impl Encode for DateTime {
    #[inline]
    fn encode(&self, sink: &mut Sink) {
        let text = self
            .0
            .format(FORMAT)
            .expect("a normalized timestamp always formats");
        sink.push_byte(b'"');
        sink.push_str(&text);
        sink.push_byte(b'"');
    }
}

impl Decode for DateTime {
    /// Slices the quoted content and parses it as ISO-8601.
    #[inline]
    fn decode(bytes: &[u8]) -> ParseResult<Self> {
        if bytes.len() < 2 || bytes[0] != b'"' || bytes[bytes.len() - 1] != b'"' {
            return Err(match bytes.first() {
                None => ParseError::UnexpectedEnd,
                Some(&b'"') => ParseError::UnterminatedString,
                Some(&found) => ParseError::UnexpectedToken {
                    expected: "opening quote",
                    found,
                },
            });
        }
        let inner = std::str::from_utf8(&bytes[1..bytes.len() - 1])?;
        let parsed = PrimitiveDateTime::parse(inner, FORMAT)?;
        Ok(DateTime(parsed.assume_utc()))
    }
}

//! Date/time codecs for the Mailtrap wire format.
//!
//! The API is inconsistent about timestamps: most endpoints return ISO-8601
//! strings, the contacts endpoints return Unix epoch milliseconds, and some
//! fields arrive as empty strings standing in for `null`. Both codecs here
//! accept the full superset on read and differ only in what they write.

use chrono::{DateTime, FixedOffset, Utc};
use serde::de::{self, Visitor};

type MaybeDateTime = Option<DateTime<FixedOffset>>;

fn from_unix_ms(ms: i64) -> Result<DateTime<FixedOffset>, String> {
    DateTime::from_timestamp_millis(ms)
        .map(|dt: DateTime<Utc>| dt.fixed_offset())
        .ok_or_else(|| format!("Unix milliseconds value {ms} is out of range"))
}

fn parse_datetime_str(value: &str) -> Result<MaybeDateTime, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(parsed));
    }
    // Some endpoints quote epoch milliseconds as strings.
    if let Ok(unix_ms) = trimmed.parse::<i64>() {
        return from_unix_ms(unix_ms).map(Some);
    }
    Err(format!("cannot convert value '{trimmed}' to a date-time"))
}

struct FlexibleDateTimeVisitor;

impl<'de> Visitor<'de> for FlexibleDateTimeVisitor {
    type Value = MaybeDateTime;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an ISO-8601 string, Unix epoch milliseconds, or null")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_datetime_str(value).map_err(E::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        from_unix_ms(value).map(Some).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let ms = i64::try_from(value)
            .map_err(|_| E::custom(format!("Unix milliseconds value {value} is out of range")))?;
        from_unix_ms(ms).map(Some).map_err(E::custom)
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // Fractional epochs are malformed, not a rounding opportunity.
        Err(E::custom(format!(
            "invalid numeric value {value} for Unix milliseconds epoch"
        )))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

/// Canonical codec: reads ISO-8601 strings or Unix epoch milliseconds,
/// writes ISO-8601 (RFC 3339) strings. Blank strings and JSON null map to
/// [`None`].
pub mod iso_datetime {
    use super::{FlexibleDateTimeVisitor, MaybeDateTime};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &MaybeDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<MaybeDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlexibleDateTimeVisitor)
    }
}

/// Epoch codec: reads the same superset as [`iso_datetime`], writes integer
/// Unix epoch milliseconds. Used by the contacts endpoints.
pub mod unix_ms {
    use super::{FlexibleDateTimeVisitor, MaybeDateTime};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &MaybeDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_i64(dt.timestamp_millis()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<MaybeDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlexibleDateTimeVisitor)
    }
}

//! # Serializers — Uniform Column Capability
//!
//! A [`Serializer<T>`] turns a typed column value into the plaintext bytes
//! that get encrypted, and back. Callers holding columns of different SQL
//! types go through [`SqlSerializer`], a tagged variant table dispatched by
//! `match`, rather than through trait objects.
//!
//! ## Null Handling
//!
//! `serialize(None)` and `deserialize(None)` return `Ok(None)` without
//! consulting the codec. This is the capability-level contract: "no value
//! at all" never reaches the type-specific code. The codec carries its own
//! typed-absent handling, which agrees with this one but is tested on its
//! own.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::CodecError;

/// Two-operation capability shared by every column serializer.
pub trait Serializer<T>: Send + Sync {
    /// Stable identifier for this serializer, used to look it up by name.
    fn identifier(&self) -> &'static str;

    /// Convert a value to plaintext bytes. `None` maps to `None`.
    fn serialize(&self, value: Option<&T>) -> Result<Option<Vec<u8>>, CodecError>;

    /// Convert plaintext bytes back to a value. `None` maps to `None`.
    fn deserialize(&self, bytes: Option<&[u8]>) -> Result<Option<T>, CodecError>;
}

/// Serializer for SQL Server `smalldatetime` columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmallDateTimeSerializer;

impl SmallDateTimeSerializer {
    /// Identifier under which this serializer is registered.
    pub const IDENTIFIER: &'static str = "SQL_SmallDateTime";
}

impl Serializer<NaiveDateTime> for SmallDateTimeSerializer {
    fn identifier(&self) -> &'static str {
        Self::IDENTIFIER
    }

    fn serialize(&self, value: Option<&NaiveDateTime>) -> Result<Option<Vec<u8>>, CodecError> {
        let Some(value) = value else {
            return Ok(None);
        };
        Ok(codec::encode(Some(value))?.map(|bytes| bytes.to_vec()))
    }

    fn deserialize(&self, bytes: Option<&[u8]>) -> Result<Option<NaiveDateTime>, CodecError> {
        let Some(bytes) = bytes else {
            return Ok(None);
        };
        codec::decode(Some(bytes))
    }
}

/// A typed column value, tagged by SQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SqlValue {
    /// A `smalldatetime` value.
    SmallDateTime(NaiveDateTime),
}

/// Tagged serializer variants, one per supported SQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlSerializer {
    /// `smalldatetime`.
    SmallDateTime(SmallDateTimeSerializer),
}

impl SqlSerializer {
    /// Every registered variant.
    pub const ALL: [SqlSerializer; 1] = [SqlSerializer::SmallDateTime(SmallDateTimeSerializer)];

    /// Look up a serializer by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownSerializer`] if nothing is registered
    /// under `identifier`.
    pub fn from_identifier(identifier: &str) -> Result<Self, CodecError> {
        Self::ALL
            .into_iter()
            .find(|s| s.identifier() == identifier)
            .ok_or_else(|| CodecError::UnknownSerializer(identifier.to_string()))
    }

    /// The serializer that handles `value`'s SQL type.
    pub fn for_value(value: &SqlValue) -> Self {
        match value {
            SqlValue::SmallDateTime(_) => Self::SmallDateTime(SmallDateTimeSerializer),
        }
    }
}

impl Serializer<SqlValue> for SqlSerializer {
    fn identifier(&self) -> &'static str {
        match self {
            Self::SmallDateTime(s) => Serializer::<NaiveDateTime>::identifier(s),
        }
    }

    fn serialize(&self, value: Option<&SqlValue>) -> Result<Option<Vec<u8>>, CodecError> {
        let Some(value) = value else {
            return Ok(None);
        };
        match (self, value) {
            (Self::SmallDateTime(s), SqlValue::SmallDateTime(v)) => s.serialize(Some(v)),
        }
    }

    fn deserialize(&self, bytes: Option<&[u8]>) -> Result<Option<SqlValue>, CodecError> {
        let Some(bytes) = bytes else {
            return Ok(None);
        };
        match self {
            Self::SmallDateTime(s) => Ok(s.deserialize(Some(bytes))?.map(SqlValue::SmallDateTime)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::parse_naive;

    fn dt(s: &str) -> NaiveDateTime {
        parse_naive(s).unwrap()
    }

    #[test]
    fn serialize_null_is_null() {
        let serializer = SmallDateTimeSerializer;
        assert_eq!(serializer.serialize(None), Ok(None));
    }

    #[test]
    fn deserialize_null_is_null() {
        let serializer = SmallDateTimeSerializer;
        assert_eq!(serializer.deserialize(None), Ok(None));
    }

    #[test]
    fn deserialize_empty_is_not_null() {
        let err = SmallDateTimeSerializer.deserialize(Some(&[])).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn serialize_matches_codec() {
        let value = dt("2020-07-10 12:12:12");
        let bytes = SmallDateTimeSerializer.serialize(Some(&value)).unwrap().unwrap();
        assert_eq!(bytes, vec![0xF4, 0xAB, 0xDC, 0x02]);
    }

    #[test]
    fn serialize_rejects_out_of_range() {
        let err = SmallDateTimeSerializer
            .serialize(Some(&dt("2079-06-07")))
            .unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn deserialize_rejects_short_input() {
        let inputs: [&[u8]; 4] = [&[], &[0], &[1, 2], &[1, 2, 3]];
        for bytes in inputs {
            let err = SmallDateTimeSerializer.deserialize(Some(bytes)).unwrap_err();
            assert!(err.is_malformed());
        }
    }

    #[test]
    fn identifier_is_stable() {
        assert_eq!(
            Serializer::<NaiveDateTime>::identifier(&SmallDateTimeSerializer),
            "SQL_SmallDateTime"
        );
    }

    // ---- variant table ----

    #[test]
    fn from_identifier_finds_smalldatetime() {
        let s = SqlSerializer::from_identifier("SQL_SmallDateTime").unwrap();
        assert_eq!(s, SqlSerializer::SmallDateTime(SmallDateTimeSerializer));
    }

    #[test]
    fn from_identifier_rejects_unknown() {
        assert_eq!(
            SqlSerializer::from_identifier("SQL_DateTime2"),
            Err(CodecError::UnknownSerializer("SQL_DateTime2".to_string()))
        );
    }

    #[test]
    fn sql_serializer_null_passthrough() {
        let s = SqlSerializer::for_value(&SqlValue::SmallDateTime(dt("2020-07-10")));
        assert_eq!(s.serialize(None), Ok(None));
        assert_eq!(s.deserialize(None), Ok(None));
    }

    #[test]
    fn sql_serializer_roundtrip() {
        let value = SqlValue::SmallDateTime(dt("2020-07-10 08:30"));
        let s = SqlSerializer::for_value(&value);
        let bytes = s.serialize(Some(&value)).unwrap();
        assert_eq!(s.deserialize(bytes.as_deref()).unwrap(), Some(value));
    }

    #[test]
    fn heterogeneous_columns_share_one_type() {
        let columns: Vec<(SqlSerializer, Option<SqlValue>)> = vec![
            (SqlSerializer::ALL[0], Some(SqlValue::SmallDateTime(dt("1900-01-01")))),
            (SqlSerializer::ALL[0], None),
        ];
        let encoded: Vec<Option<Vec<u8>>> = columns
            .iter()
            .map(|(s, v)| s.serialize(v.as_ref()).unwrap())
            .collect();
        assert_eq!(encoded, vec![Some(vec![0, 0, 0, 0]), None]);
    }

    #[test]
    fn sql_value_serde_is_tagged() {
        let value = SqlValue::SmallDateTime(dt("2020-07-10 12:12"));
        let json = serde_json::to_value(value).unwrap();
        assert_eq!(json["type"], "small_date_time");
        let back: SqlValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }
}

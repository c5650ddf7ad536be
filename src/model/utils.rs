/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Serde helpers shared by the entity and request models

use crate::constants::TIMESTAMP_FORMAT;
use crate::presentation::list::ListMembership;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serializer};

/// Parses a listmonk timestamp
///
/// Accepts the native `YYYY-MM-DDTHH:MM:SS.ffffffZ` layout, any RFC 3339
/// timestamp, and a naive `YYYY-MM-DDTHH:MM:SS[.f]` which is taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Formats a timestamp the way the listmonk API expects it
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// `#[serde(with = "timestamp")]` for required timestamps
pub mod timestamp {
    use super::*;

    /// Serializes as `YYYY-MM-DDTHH:MM:SS.ffffffZ`
    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(value))
    }

    /// Deserializes any layout accepted by [`parse_timestamp`]
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

/// `#[serde(with = "timestamp_opt", default)]` for optional timestamps
pub mod timestamp_opt {
    use super::*;

    /// Serializes `None` as `null`
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&format_timestamp(dt)),
            None => serializer.serialize_none(),
        }
    }

    /// Treats `null` and the empty string as absent
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_timestamp(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}"))),
        }
    }
}

/// Lower-cases and trims an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Deserializes an email address, normalizing it on the way in
pub fn deserialize_email<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_email(&raw))
}

/// Deserializes `null` as the type's default value
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Shapes the server uses for a list reference
#[derive(Deserialize)]
#[serde(untagged)]
enum RawListRef {
    Id(i64),
    Text(String),
    Object(ListMembership),
}

impl RawListRef {
    fn into_membership<E: DeError>(self) -> Result<ListMembership, E> {
        match self {
            RawListRef::Id(id) => Ok(ListMembership::from_id(id)),
            RawListRef::Text(text) => text
                .trim()
                .parse::<i64>()
                .map(ListMembership::from_id)
                .map_err(|_| E::custom(format!("list id is not an integer: {text}"))),
            RawListRef::Object(membership) => Ok(membership),
        }
    }
}

/// Deserializes a list-membership array whose items may be bare ids, numeric
/// strings or objects carrying an `id`. `null` is read as an empty array.
pub fn deserialize_memberships<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<ListMembership>, D::Error> {
    let raw: Option<Vec<RawListRef>> = Option::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(RawListRef::into_membership)
        .collect()
}

/// Deserializes a list id that may arrive as a number or a numeric string
pub fn deserialize_list_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Int(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("list id is not an integer: {text}"))),
    }
}

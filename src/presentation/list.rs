/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::utils::{deserialize_list_id, null_as_default, timestamp, timestamp_opt};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Visibility of a mailing list
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Listed on the public subscription form
    Public,
    /// Only managed by administrators
    Private,
    /// Short-lived list created for a single send
    Temporary,
    /// Any type added by a newer server
    #[serde(other)]
    Unknown,
}

impl ListType {
    /// Whether the server sent a value this client does not know
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// Opt-in policy of a mailing list
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OptinMode {
    /// Subscribers are confirmed immediately
    Single,
    /// Subscribers must confirm by email
    Double,
    /// Any mode added by a newer server
    #[serde(other)]
    Unknown,
}

impl OptinMode {
    /// Whether the server sent a value this client does not know
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// State of one subscriber's membership in one list
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Waiting for a double opt-in confirmation
    Unconfirmed,
    /// Confirmed member of the list
    Confirmed,
    /// Left the list
    Unsubscribed,
}

/// A mailing list on the listmonk instance
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MailingList {
    /// Server assigned identifier
    pub id: i64,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Last modification time
    #[serde(with = "timestamp_opt", default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Public identifier used in subscription links
    pub uuid: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Visibility
    #[serde(rename = "type", default)]
    pub list_type: Option<ListType>,
    /// Opt-in policy
    #[serde(default)]
    pub optin: Option<OptinMode>,
    /// Free-form tags, in server order
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Description shown on public forms
    #[serde(default)]
    pub description: Option<String>,
    /// Number of subscribers in the list
    #[serde(default)]
    pub subscriber_count: Option<i64>,
    /// Subscriber count per subscription status
    #[serde(default, deserialize_with = "null_as_default")]
    pub subscriber_statuses: BTreeMap<String, i64>,
}

/// A subscriber's membership in a list, as embedded in subscriber and
/// campaign records
///
/// The server sends either a bare id or an object; both end up here with the
/// id coerced to an integer.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ListMembership {
    /// List identifier
    #[serde(deserialize_with = "deserialize_list_id")]
    pub id: i64,
    /// List uuid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// List name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Membership state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<SubscriptionStatus>,
    /// When the subscriber joined the list
    #[serde(
        with = "timestamp_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_created_at: Option<DateTime<Utc>>,
    /// When the membership last changed
    #[serde(
        with = "timestamp_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_updated_at: Option<DateTime<Utc>>,
    /// Any other metadata the server attaches to the membership
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl ListMembership {
    /// Membership known only by its list id
    #[must_use]
    pub fn from_id(id: i64) -> Self {
        Self {
            id,
            uuid: None,
            name: None,
            subscription_status: None,
            subscription_created_at: None,
            subscription_updated_at: None,
            meta: Map::new(),
        }
    }
}

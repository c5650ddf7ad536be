/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::utils::{deserialize_email, deserialize_memberships, null_as_default, timestamp};
use crate::presentation::list::ListMembership;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Account-wide state of a subscriber
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    /// Receives campaigns
    #[default]
    Enabled,
    /// Temporarily excluded from campaigns
    Disabled,
    /// Unsubscribed from everything
    Blocklisted,
}

impl SubscriberStatus {
    /// Wire name of the status
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriberStatus::Enabled => "enabled",
            SubscriberStatus::Disabled => "disabled",
            SubscriberStatus::Blocklisted => "blocklisted",
        }
    }
}

/// A contact on the listmonk instance
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Subscriber {
    /// Server assigned identifier
    pub id: i64,
    /// Email address, trimmed and lower-cased
    #[serde(deserialize_with = "deserialize_email")]
    pub email: String,
    /// Full name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Last modification time
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Public identifier used in opt-in and unsubscribe links
    #[serde(default)]
    pub uuid: Option<String>,
    /// Lists the subscriber belongs to
    #[serde(default, deserialize_with = "deserialize_memberships")]
    pub lists: Vec<ListMembership>,
    /// Custom attributes, queryable from the listmonk UI
    #[serde(default, deserialize_with = "null_as_default")]
    pub attribs: Map<String, Value>,
    /// Account-wide status
    #[serde(default)]
    pub status: SubscriberStatus,
}

impl Subscriber {
    /// Ids of the lists the subscriber belongs to
    #[must_use]
    pub fn list_ids(&self) -> BTreeSet<i64> {
        self.lists.iter().map(|l| l.id).collect()
    }
}

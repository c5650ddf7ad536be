/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::utils::{deserialize_memberships, null_as_default, timestamp, timestamp_opt};
use crate::presentation::list::ListMembership;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Kind of campaign
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    /// Regular newsletter
    Regular,
    /// Opt-in confirmation campaign
    Optin,
    /// Any kind added by a newer server
    #[serde(other)]
    Unknown,
}

impl CampaignType {
    /// Whether the server sent a value this client does not know
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// Lifecycle state of a campaign
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// Being edited
    Draft,
    /// Waiting for `send_at`
    Scheduled,
    /// Currently sending
    Running,
    /// Sending suspended
    Paused,
    /// All messages sent
    Finished,
    /// Stopped before finishing
    Cancelled,
    /// Any state added by a newer server
    #[serde(other)]
    Unknown,
}

impl CampaignStatus {
    /// Whether the server sent a value this client does not know
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// Format of a campaign or transactional body
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// WYSIWYG editor output
    Richtext,
    /// Raw HTML
    Html,
    /// Markdown
    Markdown,
    /// Plain text
    Plain,
    /// Visual builder output
    Visual,
    /// Any format added by a newer server
    #[serde(other)]
    Unknown,
}

impl ContentType {
    /// Whether the server sent a value this client does not know
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// A bulk email tied to one or more lists
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    /// Server assigned identifier
    pub id: i64,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Last modification time
    #[serde(with = "timestamp_opt", default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Number of recorded views
    #[serde(default)]
    pub views: i64,
    /// Number of recorded link clicks
    #[serde(default)]
    pub clicks: i64,
    /// Target lists
    #[serde(default, deserialize_with = "deserialize_memberships")]
    pub lists: Vec<ListMembership>,
    /// When sending started
    #[serde(with = "timestamp_opt", default)]
    pub started_at: Option<DateTime<Utc>>,
    /// Messages left to send
    #[serde(default)]
    pub to_send: i64,
    /// Messages already sent
    #[serde(default)]
    pub sent: i64,
    /// Public identifier
    pub uuid: String,
    /// Internal name
    #[serde(default)]
    pub name: Option<String>,
    /// Kind of campaign
    #[serde(rename = "type", default)]
    pub campaign_type: Option<CampaignType>,
    /// Email subject
    #[serde(default)]
    pub subject: Option<String>,
    /// Sender address
    #[serde(default)]
    pub from_email: Option<String>,
    /// Body
    #[serde(default)]
    pub body: Option<String>,
    /// Plain text alternative body
    #[serde(default)]
    pub altbody: Option<String>,
    /// Scheduled send time
    #[serde(with = "timestamp_opt", default)]
    pub send_at: Option<DateTime<Utc>>,
    /// Lifecycle state
    #[serde(default)]
    pub status: Option<CampaignStatus>,
    /// Body format
    #[serde(default)]
    pub content_type: Option<ContentType>,
    /// Free-form tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Template wrapping the body
    #[serde(default)]
    pub template_id: Option<i64>,
    /// Delivery channel, usually `email`
    #[serde(default)]
    pub messenger: Option<String>,
    /// Extra email headers, one object per header
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: Vec<Map<String, Value>>,
}

impl Campaign {
    /// Ids of the target lists
    #[must_use]
    pub fn list_ids(&self) -> BTreeSet<i64> {
        self.lists.iter().map(|l| l.id).collect()
    }
}

/// Rendered HTML of a campaign
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct CampaignPreview {
    /// Preview markup as returned by the server
    pub preview: String,
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::utils::{timestamp, timestamp_opt};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// What a template is used for
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemplateType {
    /// Wraps campaign bodies
    Campaign,
    /// Visual builder campaign template
    CampaignVisual,
    /// Transactional email template
    Tx,
    /// Any usage added by a newer server
    #[serde(other)]
    Unknown,
}

impl TemplateType {
    /// Whether the server sent a value this client does not know
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// A reusable layout for campaigns and transactional emails
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Template {
    /// Server assigned identifier
    pub id: i64,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Last modification time
    #[serde(with = "timestamp_opt", default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Template markup
    #[serde(default)]
    pub body: Option<String>,
    /// Usage
    #[serde(rename = "type", default)]
    pub template_type: Option<TemplateType>,
    /// Whether new campaigns use this template
    #[serde(default)]
    pub is_default: Option<bool>,
}

/// Rendered HTML of a template filled with sample content
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplatePreview {
    /// Preview markup as returned by the server
    pub preview: String,
}

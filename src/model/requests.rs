/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Write models: what the client sends to the server
//!
//! Each request type carries only the fields the API accepts on write. List
//! ids travel as ordered sets and serialize as plain integer arrays.

use crate::constants::{DEFAULT_CAMPAIGN_LIST_ID, DEFAULT_MESSENGER, TEMPLATE_CONTENT_PLACEHOLDER};
use crate::error::AppError;
use crate::model::utils::{normalize_email, timestamp_opt};
use crate::presentation::campaign::{Campaign, CampaignType, ContentType};
use crate::presentation::list::SubscriptionStatus;
use crate::presentation::subscriber::{Subscriber, SubscriberStatus};
use crate::presentation::template::{Template, TemplateType};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use pretty_simple_display::DisplaySimple;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

static CONTENT_PLACEHOLDER: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r#"\{\{\s*template\s+"content"\s+\.\s*\}\}"#).ok());

/// Filters for the subscriber listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriberQuery {
    /// Expression in listmonk's query language, e.g.
    /// `subscribers.attribs->>'city' = 'Portland'`
    pub query: Option<String>,
    /// Only subscribers of this list
    pub list_id: Option<i64>,
}

impl SubscriberQuery {
    /// Matches every subscriber
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query expression
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the list filter
    pub fn with_list_id(mut self, list_id: i64) -> Self {
        self.list_id = Some(list_id);
        self
    }

    /// Query parameters, newest updates first
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("order_by", "updated_at".to_string()),
            ("order", "DESC".to_string()),
        ];
        if let Some(list_id) = self.list_id {
            params.push(("list_id", list_id.to_string()));
        }
        if let Some(query) = self.query.as_deref().filter(|q| !q.trim().is_empty()) {
            params.push(("query", query.to_string()));
        }
        params
    }
}

/// Body of `POST /api/subscribers`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CreateSubscriberRequest {
    /// Email address
    pub email: String,
    /// Full name
    pub name: String,
    /// Initial status
    pub status: SubscriberStatus,
    /// Lists to subscribe to
    pub lists: BTreeSet<i64>,
    /// Skip the double opt-in email
    pub preconfirm_subscriptions: bool,
    /// Custom attributes
    pub attribs: Map<String, Value>,
}

impl CreateSubscriberRequest {
    /// Enabled subscriber with no lists and no attributes
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            status: SubscriberStatus::Enabled,
            lists: BTreeSet::new(),
            preconfirm_subscriptions: false,
            attribs: Map::new(),
        }
    }

    /// Set the lists to subscribe to
    pub fn with_lists(mut self, lists: impl IntoIterator<Item = i64>) -> Self {
        self.lists = lists.into_iter().collect();
        self
    }

    /// Confirm double opt-in subscriptions right away
    pub fn with_preconfirm(mut self, preconfirm: bool) -> Self {
        self.preconfirm_subscriptions = preconfirm;
        self
    }

    /// Set the custom attributes
    pub fn with_attribs(mut self, attribs: Map<String, Value>) -> Self {
        self.attribs = attribs;
        self
    }

    /// Set the initial status
    pub fn with_status(mut self, status: SubscriberStatus) -> Self {
        self.status = status;
        self
    }

    /// Normalizes the email and name and checks both are present
    pub fn validate(mut self) -> Result<Self, AppError> {
        self.email = normalize_email(&self.email);
        self.name = self.name.trim().to_string();
        if self.email.is_empty() {
            return Err(AppError::Validation("Email is required".to_string()));
        }
        if self.name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        Ok(self)
    }
}

/// Changes applied by `update_subscriber`
///
/// Fields of the subscriber snapshot itself (email, name, attribs) are sent
/// as they are; this type only describes list and status changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriberUpdate {
    /// Lists to join
    pub add_to_lists: BTreeSet<i64>,
    /// Lists to leave
    pub remove_from_lists: BTreeSet<i64>,
    /// New status; `None` keeps the current one
    pub status: Option<SubscriberStatus>,
}

impl SubscriberUpdate {
    /// No list or status change
    pub fn new() -> Self {
        Self::default()
    }

    /// Status-only change
    pub fn status(status: SubscriberStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Join these lists
    pub fn add_to(mut self, lists: impl IntoIterator<Item = i64>) -> Self {
        self.add_to_lists.extend(lists);
        self
    }

    /// Leave these lists
    pub fn remove_from(mut self, lists: impl IntoIterator<Item = i64>) -> Self {
        self.remove_from_lists.extend(lists);
        self
    }

    /// Set the new status
    pub fn with_status(mut self, status: SubscriberStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// `(current - remove) + add`
    pub fn final_lists(&self, current: &BTreeSet<i64>) -> BTreeSet<i64> {
        current
            .difference(&self.remove_from_lists)
            .chain(self.add_to_lists.iter())
            .copied()
            .collect()
    }
}

/// Body of `PUT /api/subscribers/{id}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct UpdateSubscriberRequest {
    /// Email address
    pub email: String,
    /// Full name
    pub name: String,
    /// Status after the update
    pub status: SubscriberStatus,
    /// Complete list set after the update
    pub lists: BTreeSet<i64>,
    /// Always true so list changes never trigger opt-in emails
    pub preconfirm_subscriptions: bool,
    /// Custom attributes
    pub attribs: Map<String, Value>,
}

impl UpdateSubscriberRequest {
    /// Builds the update body from a snapshot and the requested changes
    pub fn from_subscriber(subscriber: &Subscriber, update: &SubscriberUpdate) -> Self {
        Self {
            email: normalize_email(&subscriber.email),
            name: subscriber.name.trim().to_string(),
            status: update.status.unwrap_or(subscriber.status),
            lists: update.final_lists(&subscriber.list_ids()),
            preconfirm_subscriptions: true,
            attribs: subscriber.attribs.clone(),
        }
    }
}

/// Bulk membership action
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListAction {
    /// Add subscribers to the target lists
    Add,
    /// Remove subscribers from the target lists
    Remove,
    /// Mark subscribers as unsubscribed on the target lists
    Unsubscribe,
}

/// Body of `PUT /api/subscribers/lists`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ListMembershipUpdate {
    /// Subscribers to change
    pub ids: BTreeSet<i64>,
    /// What to do
    pub action: ListAction,
    /// Lists to change
    pub target_list_ids: BTreeSet<i64>,
    /// Membership status to set, required when adding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
}

impl ListMembershipUpdate {
    /// Add subscribers to lists with the given membership status
    pub fn add(
        ids: impl IntoIterator<Item = i64>,
        lists: impl IntoIterator<Item = i64>,
        status: SubscriptionStatus,
    ) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            action: ListAction::Add,
            target_list_ids: lists.into_iter().collect(),
            status: Some(status),
        }
    }

    /// Remove subscribers from lists
    pub fn remove(ids: impl IntoIterator<Item = i64>, lists: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            action: ListAction::Remove,
            target_list_ids: lists.into_iter().collect(),
            status: None,
        }
    }

    /// Unsubscribe subscribers from lists
    pub fn unsubscribe(
        ids: impl IntoIterator<Item = i64>,
        lists: impl IntoIterator<Item = i64>,
    ) -> Self {
        Self {
            action: ListAction::Unsubscribe,
            ..Self::remove(ids, lists)
        }
    }

    /// Checks that subscribers and lists are named and that adds carry a status
    pub fn validate(self) -> Result<Self, AppError> {
        if self.ids.is_empty() {
            return Err(AppError::Validation("At least one subscriber id is required".to_string()));
        }
        if self.target_list_ids.is_empty() {
            return Err(AppError::Validation("At least one target list id is required".to_string()));
        }
        if self.action == ListAction::Add && self.status.is_none() {
            return Err(AppError::Validation(
                "A subscription status is required when adding to lists".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Body of `POST /api/campaigns`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CreateCampaignRequest {
    /// Internal name
    pub name: String,
    /// Email subject
    pub subject: String,
    /// Target lists; the default list when empty
    pub lists: BTreeSet<i64>,
    /// Sender; the instance default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    /// Kind of campaign
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<CampaignType>,
    /// Body format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    /// Body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Plain text alternative body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altbody: Option<String>,
    /// Scheduled send time
    #[serde(with = "timestamp_opt", skip_serializing_if = "Option::is_none", default)]
    pub send_at: Option<DateTime<Utc>>,
    /// Delivery channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messenger: Option<String>,
    /// Template wrapping the body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Extra email headers
    pub headers: Vec<Map<String, Value>>,
}

impl CreateCampaignRequest {
    /// Campaign with a name and subject, everything else left to the server
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            lists: BTreeSet::new(),
            from_email: None,
            campaign_type: None,
            content_type: None,
            body: None,
            altbody: None,
            send_at: None,
            messenger: None,
            template_id: None,
            tags: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Set the target lists
    pub fn with_lists(mut self, lists: impl IntoIterator<Item = i64>) -> Self {
        self.lists = lists.into_iter().collect();
        self
    }

    /// Set the sender
    pub fn with_from_email(mut self, from_email: impl Into<String>) -> Self {
        self.from_email = Some(from_email.into());
        self
    }

    /// Set the kind of campaign
    pub fn with_type(mut self, campaign_type: CampaignType) -> Self {
        self.campaign_type = Some(campaign_type);
        self
    }

    /// Set the body and its format
    pub fn with_body(mut self, body: impl Into<String>, content_type: ContentType) -> Self {
        self.body = Some(body.into());
        self.content_type = Some(content_type);
        self
    }

    /// Set the plain text alternative
    pub fn with_altbody(mut self, altbody: impl Into<String>) -> Self {
        self.altbody = Some(altbody.into());
        self
    }

    /// Schedule the send
    pub fn with_send_at(mut self, send_at: DateTime<Utc>) -> Self {
        self.send_at = Some(send_at);
        self
    }

    /// Set the delivery channel
    pub fn with_messenger(mut self, messenger: impl Into<String>) -> Self {
        self.messenger = Some(messenger.into());
        self
    }

    /// Set the template
    pub fn with_template_id(mut self, template_id: i64) -> Self {
        self.template_id = Some(template_id);
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Set the extra headers
    pub fn with_headers(mut self, headers: Vec<Map<String, Value>>) -> Self {
        self.headers = headers;
        self
    }

    /// Requires a name and subject, normalizes the sender and falls back to the
    /// default list
    pub fn validate(mut self) -> Result<Self, AppError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if self.subject.trim().is_empty() {
            return Err(AppError::Validation("Subject is required".to_string()));
        }
        self.from_email = self
            .from_email
            .as_deref()
            .map(normalize_email)
            .filter(|email| !email.is_empty());
        if self.lists.is_empty() {
            self.lists.insert(DEFAULT_CAMPAIGN_LIST_ID);
        }
        Ok(self)
    }
}

/// Body of `PUT /api/campaigns/{id}`
///
/// `send_at` is always serialized, so a cleared schedule reaches the server
/// as `null`.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct UpdateCampaignRequest {
    /// Internal name
    pub name: Option<String>,
    /// Email subject
    pub subject: Option<String>,
    /// Target lists
    pub lists: BTreeSet<i64>,
    /// Sender
    pub from_email: Option<String>,
    /// Kind of campaign, omitted when unknown to this client
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<CampaignType>,
    /// Body format, omitted when unknown to this client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    /// Body
    pub body: Option<String>,
    /// Plain text alternative body
    pub altbody: Option<String>,
    /// Scheduled send time, `None` when unscheduled or in the past
    #[serde(with = "timestamp_opt", default)]
    pub send_at: Option<DateTime<Utc>>,
    /// Delivery channel
    pub messenger: Option<String>,
    /// Template wrapping the body
    pub template_id: Option<i64>,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Extra email headers
    pub headers: Vec<Map<String, Value>>,
}

impl UpdateCampaignRequest {
    /// Builds the update body from a campaign snapshot
    pub fn from_campaign(campaign: &Campaign) -> Self {
        Self::from_campaign_at(campaign, Utc::now())
    }

    /// Same as [`UpdateCampaignRequest::from_campaign`] with an explicit clock
    ///
    /// The server rejects updates scheduled in the past, so a `send_at` before
    /// `now` is dropped and the campaign goes out unscheduled.
    pub fn from_campaign_at(campaign: &Campaign, now: DateTime<Utc>) -> Self {
        Self {
            name: campaign.name.clone(),
            subject: campaign.subject.clone(),
            lists: campaign.list_ids(),
            from_email: campaign.from_email.clone(),
            campaign_type: campaign.campaign_type.filter(|t| !t.is_unknown()),
            content_type: campaign.content_type.filter(|t| !t.is_unknown()),
            body: campaign.body.clone(),
            altbody: campaign.altbody.clone(),
            send_at: campaign.send_at.filter(|send_at| *send_at >= now),
            messenger: campaign.messenger.clone(),
            template_id: campaign.template_id,
            tags: campaign.tags.clone(),
            headers: campaign.headers.clone(),
        }
    }
}

/// Counts occurrences of `{{ template "content" . }}`
pub fn content_placeholder_count(body: &str) -> usize {
    match &*CONTENT_PLACEHOLDER {
        Some(re) => re.find_iter(body).count(),
        None => body.matches(TEMPLATE_CONTENT_PLACEHOLDER).count(),
    }
}

/// Body of `POST /api/templates`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CreateTemplateRequest {
    /// Display name
    pub name: String,
    /// Template markup
    pub body: String,
    /// Usage
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    /// Whether new campaigns use this template
    pub is_default: bool,
}

impl CreateTemplateRequest {
    /// Campaign template that is not the default
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            template_type: TemplateType::Campaign,
            is_default: false,
        }
    }

    /// Set the usage
    pub fn with_type(mut self, template_type: TemplateType) -> Self {
        self.template_type = template_type;
        self
    }

    /// Make this the default template
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Requires a name and a body holding the content placeholder exactly once
    pub fn validate(mut self) -> Result<Self, AppError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if self.body.trim().is_empty() {
            return Err(AppError::Validation("Body is required".to_string()));
        }
        if content_placeholder_count(&self.body) != 1 {
            return Err(AppError::Validation(format!(
                "The placeholder {TEMPLATE_CONTENT_PLACEHOLDER} should appear exactly once in the template."
            )));
        }
        Ok(self)
    }
}

/// Body of `PUT /api/templates/{id}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct UpdateTemplateRequest {
    /// Display name
    pub name: Option<String>,
    /// Template markup
    pub body: Option<String>,
    /// Usage, omitted when unknown to this client
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub template_type: Option<TemplateType>,
}

impl UpdateTemplateRequest {
    /// Builds the update body from a template snapshot
    pub fn from_template(template: &Template) -> Self {
        Self {
            name: template.name.clone(),
            body: template.body.clone(),
            template_type: template.template_type.filter(|t| !t.is_unknown()),
        }
    }
}

/// Body of `POST /api/tx`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TransactionalEmail {
    /// Recipient; must be a subscriber on the instance
    pub subscriber_email: String,
    /// Transactional template to render
    pub template_id: i64,
    /// Sender; the instance default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    /// Merge data, available in the template as `{{ .Tx.Data.* }}`
    pub data: Map<String, Value>,
    /// Delivery channel
    pub messenger: String,
    /// Body format
    pub content_type: ContentType,
    /// Files to attach
    #[serde(skip)]
    pub attachments: Vec<PathBuf>,
}

impl TransactionalEmail {
    /// Markdown email over the `email` messenger with no merge data
    pub fn new(subscriber_email: impl Into<String>, template_id: i64) -> Self {
        Self {
            subscriber_email: subscriber_email.into(),
            template_id,
            from_email: None,
            data: Map::new(),
            messenger: DEFAULT_MESSENGER.to_string(),
            content_type: ContentType::Markdown,
            attachments: Vec::new(),
        }
    }

    /// Set the sender
    pub fn with_from_email(mut self, from_email: impl Into<String>) -> Self {
        self.from_email = Some(from_email.into());
        self
    }

    /// Set the merge data
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    /// Set the delivery channel
    pub fn with_messenger(mut self, messenger: impl Into<String>) -> Self {
        self.messenger = messenger.into();
        self
    }

    /// Set the body format
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Attach a file
    pub fn with_attachment(mut self, path: impl AsRef<Path>) -> Self {
        self.attachments.push(path.as_ref().to_path_buf());
        self
    }

    /// Normalizes the recipient and checks that every attachment is a file
    pub fn validate(mut self) -> Result<Self, AppError> {
        self.subscriber_email = normalize_email(&self.subscriber_email);
        if self.subscriber_email.is_empty() {
            return Err(AppError::Validation("Email is required".to_string()));
        }
        if let Some(missing) = self.attachments.iter().find(|path| !path.is_file()) {
            return Err(AppError::FileNotFound(missing.clone()));
        }
        Ok(self)
    }
}

/// Default timeout in seconds applied to every request
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Number of subscribers requested per page when aggregating listings
pub const DEFAULT_PAGE_SIZE: u32 = 500;
/// Number of results requested when looking up a single subscriber by a query filter
pub const LOOKUP_PAGE_SIZE: u32 = 100;
/// Name the client reports in its user agent
pub const CLIENT_NAME: &str = "Listmonk-Client";
/// Placeholder every campaign template body must contain exactly once
pub const TEMPLATE_CONTENT_PLACEHOLDER: &str = r#"{{ template "content" . }}"#;
/// List assigned to a new campaign when the caller does not pick any
pub const DEFAULT_CAMPAIGN_LIST_ID: i64 = 1;
/// Messenger used for transactional emails unless overridden
pub const DEFAULT_MESSENGER: &str = "email";
/// Timestamp layout the listmonk API reads and writes
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Phrases on the opt-in confirmation page that mean the subscription is confirmed.
///
/// The first two appear when the confirmation happens now, the last two when the
/// subscriber was already confirmed earlier.
pub const OPTIN_SUCCESS_PHRASES: &[&str] = &[
    "Subscribed successfully.",
    "Confirmed",
    "no subscriptions to confirm",
    "No subscriptions",
];

/// API paths relative to the instance base URL
pub mod paths {
    /// Health check
    pub const HEALTH: &str = "/api/health";
    /// Mailing list collection
    pub const LISTS: &str = "/api/lists";
    /// Subscriber collection
    pub const SUBSCRIBERS: &str = "/api/subscribers";
    /// Bulk list membership management
    pub const SUBSCRIBER_LISTS: &str = "/api/subscribers/lists";
    /// Transactional email
    pub const TX: &str = "/api/tx";
    /// Campaign collection
    pub const CAMPAIGNS: &str = "/api/campaigns";
    /// Template collection
    pub const TEMPLATES: &str = "/api/templates";

    /// Single mailing list
    pub fn list(list_id: i64) -> String {
        format!("{LISTS}/{list_id}")
    }

    /// Single subscriber
    pub fn subscriber(subscriber_id: i64) -> String {
        format!("{SUBSCRIBERS}/{subscriber_id}")
    }

    /// Public opt-in confirmation form
    pub fn optin(subscriber_uuid: &str) -> String {
        format!("/subscription/optin/{subscriber_uuid}")
    }

    /// Single campaign
    pub fn campaign(campaign_id: i64) -> String {
        format!("{CAMPAIGNS}/{campaign_id}")
    }

    /// Rendered campaign preview
    pub fn campaign_preview(campaign_id: i64) -> String {
        format!("{CAMPAIGNS}/{campaign_id}/preview")
    }

    /// Single template
    pub fn template(template_id: i64) -> String {
        format!("{TEMPLATES}/{template_id}")
    }

    /// Rendered template preview
    pub fn template_preview(template_id: i64) -> String {
        format!("{TEMPLATES}/{template_id}/preview")
    }

    /// Marks a template as the default one
    pub fn template_default(template_id: i64) -> String {
        format!("{TEMPLATES}/{template_id}/default")
    }
}

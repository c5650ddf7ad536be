/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Listmonk Client Prelude
//!
//! Brings the client, the service traits, the models and the error type into
//! scope with a single import.
//!
//! ```rust
//! use listmonk_client::prelude::*;
//!
//! let query = SubscriberQuery::new().with_list_id(3);
//! assert_eq!(query.list_id, Some(3));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Transport configuration
pub use crate::application::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and result alias
pub use crate::error::{AppError, ListmonkResult};

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// Client for one listmonk instance
pub use crate::application::client::Client;

/// Session state
pub use crate::session::{Credentials, Session};

/// Request executor
pub use crate::model::http::HttpClient;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::services::{
    CampaignService, ListService, SubscriberService, TemplateService, TransactionalService,
};

// ============================================================================
// MODELS
// ============================================================================

/// Entities returned by the API
pub use crate::presentation::campaign::{
    Campaign, CampaignPreview, CampaignStatus, CampaignType, ContentType,
};
pub use crate::presentation::list::{
    ListMembership, ListType, MailingList, OptinMode, SubscriptionStatus,
};
pub use crate::presentation::subscriber::{Subscriber, SubscriberStatus};
pub use crate::presentation::template::{Template, TemplatePreview, TemplateType};

/// Write models
pub use crate::model::requests::{
    CreateCampaignRequest, CreateSubscriberRequest, CreateTemplateRequest, ListAction,
    ListMembershipUpdate, SubscriberQuery, SubscriberUpdate, TransactionalEmail,
    UpdateCampaignRequest, UpdateSubscriberRequest, UpdateTemplateRequest,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use serde_json::{Map, Value};
pub use tracing::{debug, error, info, warn};

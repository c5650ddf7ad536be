/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Listmonk Client
//!
//! A typed async client for the [listmonk](https://listmonk.app) newsletter and
//! mailing list manager.
//!
//! ## Features
//!
//! - **Session handling**: base URL and Basic auth credentials, checked live
//!   against the health endpoint on login
//! - **Mailing lists**: listing and lookup by id
//! - **Subscribers**: paginated listing with query filters, lookup by email, id
//!   or uuid, create, update, status changes, delete, bulk list membership and
//!   double opt-in confirmation
//! - **Campaigns**: listing, lookup, preview, create, update and delete
//! - **Templates**: listing, lookup, preview, create, update, delete and
//!   choosing the default template
//! - **Transactional email**: templated one-off emails, with or without
//!   attachments
//!
//! ## Quick start
//!
//! ```no_run
//! use listmonk_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!
//!     let mut client = Client::new(Config::default())?;
//!     client.set_base_url("https://mail.example.com")?;
//!     if !client.login("api-user", "api-token").await? {
//!         return Ok(());
//!     }
//!
//!     let query = SubscriberQuery::new().with_query("subscribers.attribs->>'city' = 'Portland'");
//!     for subscriber in client.subscribers(&query).await? {
//!         info!("{} <{}>", subscriber.name, subscriber.email);
//!     }
//!
//!     let created = client
//!         .create_subscriber(
//!             CreateSubscriberRequest::new("new@example.com", "New Reader")
//!                 .with_lists([1])
//!                 .with_preconfirm(true),
//!         )
//!         .await?;
//!     client
//!         .update_subscriber(&created, SubscriberUpdate::new().add_to([2]).remove_from([1]))
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! Transport settings come from [`Config`](application::config::Config), which
//! reads these environment variables (a `.env` file is loaded first):
//!
//! ```ignore
//! LISTMONK_TIMEOUT_SECS=10
//! LISTMONK_PAGE_SIZE=500
//! LOGLEVEL=INFO
//! ```
//!
//! The instance URL and the credentials are always passed in at runtime.

/// Client, configuration, pagination and domain services
pub mod application;

/// Constants and API paths
pub mod constants;

/// Error types
pub mod error;

/// Request executor, write models and response envelopes
pub mod model;

/// Entities returned by the API
pub mod presentation;

/// Commonly used types and traits
pub mod prelude;

/// Session state
pub mod session;

/// Logging and environment helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

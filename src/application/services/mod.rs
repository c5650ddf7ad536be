/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Campaign operations on [`Client`](crate::application::client::Client)
pub mod campaign_service;
/// Mailing list operations
pub mod list_service;
/// Subscriber operations
pub mod subscriber_service;
/// Template operations
pub mod template_service;
/// Transactional email operations
pub mod transactional_service;

pub use crate::application::interfaces::campaign::CampaignService;
pub use crate::application::interfaces::list::ListService;
pub use crate::application::interfaces::subscriber::SubscriberService;
pub use crate::application::interfaces::template::TemplateService;
pub use crate::application::interfaces::transactional::TransactionalService;

use crate::error::AppError;
use reqwest::StatusCode;

/// Maps a 404 answer to `None`, keeping every other outcome
pub(crate) fn not_found_as_none<T>(result: Result<T, AppError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => Ok(None),
        Err(e) => Err(e),
    }
}

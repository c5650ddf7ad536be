/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::TransactionalEmail;
use async_trait::async_trait;

/// Interface for the transactional email service
#[async_trait]
pub trait TransactionalService: Send + Sync {
    /// Sends one templated email to one subscriber
    ///
    /// The email goes out as JSON, or as a multipart form when it carries
    /// attachments. Returns the server's acknowledgement.
    async fn send_transactional_email(&self, email: &TransactionalEmail) -> Result<bool, AppError>;
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::list::MailingList;
use async_trait::async_trait;

/// Interface for the mailing list service
#[async_trait]
pub trait ListService: Send + Sync {
    /// Gets every mailing list on the instance
    async fn lists(&self) -> Result<Vec<MailingList>, AppError>;

    /// Gets one mailing list
    ///
    /// Fails with [`AppError::NotFound`] when the server does not know the id,
    /// whichever of its two response shapes it uses.
    async fn list_by_id(&self, list_id: i64) -> Result<MailingList, AppError>;
}

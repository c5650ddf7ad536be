/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::transactional::TransactionalService;
use crate::constants::paths;
use crate::error::AppError;
use crate::model::requests::TransactionalEmail;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl TransactionalService for Client {
    async fn send_transactional_email(&self, email: &TransactionalEmail) -> Result<bool, AppError> {
        self.session().require(true)?;
        let email = email.clone().validate()?;
        info!(
            "Sending template {} to {}",
            email.template_id, email.subscriber_email
        );

        let sent: bool = if email.attachments.is_empty() {
            self.http().post(self.session(), paths::TX, &email).await?
        } else {
            debug!("Sending with {} attachments", email.attachments.len());
            self.http()
                .post_multipart(self.session(), paths::TX, &email, &email.attachments)
                .await?
        };

        debug!("Transactional email accepted: {}", sent);
        Ok(sent)
    }
}

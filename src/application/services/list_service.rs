/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::list::ListService;
use crate::application::pagination::fetch_all_pages;
use crate::constants::paths;
use crate::error::AppError;
use crate::model::responses::resolve_mailing_list;
use crate::presentation::list::MailingList;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl ListService for Client {
    async fn lists(&self) -> Result<Vec<MailingList>, AppError> {
        self.session().require(true)?;
        info!("Getting mailing lists");

        let lists: Vec<MailingList> = fetch_all_pages(
            self.http(),
            self.session(),
            paths::LISTS,
            &[],
            self.config().page_size,
        )
        .await?;

        debug!("Mailing lists obtained: {}", lists.len());
        Ok(lists)
    }

    async fn list_by_id(&self, list_id: i64) -> Result<MailingList, AppError> {
        self.session().require(true)?;
        info!("Getting mailing list {}", list_id);

        let data: Value = match self
            .http()
            .get(self.session(), &paths::list(list_id), &[])
            .await
        {
            Ok(data) => data,
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => {
                return Err(AppError::NotFound(format!("List with ID {list_id} not found.")));
            }
            Err(e) => return Err(e),
        };

        let list = resolve_mailing_list(data, list_id)?;
        debug!("Mailing list obtained: {:?}", list.name);
        Ok(list)
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::subscriber::SubscriberService;
use crate::application::pagination::fetch_all_pages;
use crate::application::services::not_found_as_none;
use crate::constants::{LOOKUP_PAGE_SIZE, OPTIN_SUCCESS_PHRASES, paths};
use crate::error::AppError;
use crate::model::requests::{
    CreateSubscriberRequest, ListMembershipUpdate, SubscriberQuery, SubscriberUpdate,
    UpdateSubscriberRequest,
};
use crate::model::responses::Page;
use crate::model::utils::normalize_email;
use crate::presentation::subscriber::{Subscriber, SubscriberStatus};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

/// Quotes a value for listmonk's SQL-like query expressions
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

impl Client {
    /// First subscriber matching a query expression
    async fn find_subscriber(&self, query: String) -> Result<Option<Subscriber>, AppError> {
        debug!("Looking up subscriber with {}", query);
        let params = [
            ("page", "1".to_string()),
            ("per_page", LOOKUP_PAGE_SIZE.to_string()),
            ("query", query),
        ];
        let page: Page<Subscriber> = self
            .http()
            .get(self.session(), paths::SUBSCRIBERS, &params)
            .await?;
        Ok(page.results.into_iter().next())
    }

    async fn set_subscriber_status(
        &self,
        subscriber: &Subscriber,
        status: SubscriberStatus,
    ) -> Result<Subscriber, AppError> {
        info!("Setting subscriber {} to {}", subscriber.id, status.as_str());
        self.update_subscriber(subscriber, SubscriberUpdate::status(status))
            .await
    }
}

#[async_trait]
impl SubscriberService for Client {
    async fn subscribers(&self, query: &SubscriberQuery) -> Result<Vec<Subscriber>, AppError> {
        self.session().require(true)?;
        info!("Getting subscribers");

        let subscribers: Vec<Subscriber> = fetch_all_pages(
            self.http(),
            self.session(),
            paths::SUBSCRIBERS,
            &query.to_params(),
            self.config().page_size,
        )
        .await?;

        debug!("Subscribers obtained: {}", subscribers.len());
        Ok(subscribers)
    }

    async fn subscriber_by_email(&self, email: &str) -> Result<Option<Subscriber>, AppError> {
        self.session().require(true)?;
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AppError::Validation("Email is required".to_string()));
        }
        self.find_subscriber(format!("subscribers.email={}", quote(&email)))
            .await
    }

    async fn subscriber_by_id(&self, subscriber_id: i64) -> Result<Option<Subscriber>, AppError> {
        self.session().require(true)?;
        self.find_subscriber(format!("subscribers.id={subscriber_id}"))
            .await
    }

    async fn subscriber_by_uuid(
        &self,
        subscriber_uuid: &str,
    ) -> Result<Option<Subscriber>, AppError> {
        self.session().require(true)?;
        let subscriber_uuid = subscriber_uuid.trim();
        if subscriber_uuid.is_empty() {
            return Err(AppError::Validation("Subscriber uuid is required".to_string()));
        }
        self.find_subscriber(format!("subscribers.uuid={}", quote(subscriber_uuid)))
            .await
    }

    async fn create_subscriber(
        &self,
        request: CreateSubscriberRequest,
    ) -> Result<Subscriber, AppError> {
        self.session().require(true)?;
        let request = request.validate()?;
        info!("Creating subscriber {}", request.email);

        let subscriber: Subscriber = self
            .http()
            .post(self.session(), paths::SUBSCRIBERS, &request)
            .await?;

        debug!("Subscriber created with id {}", subscriber.id);
        Ok(subscriber)
    }

    async fn update_subscriber(
        &self,
        subscriber: &Subscriber,
        update: SubscriberUpdate,
    ) -> Result<Subscriber, AppError> {
        self.session().require(true)?;
        let body = UpdateSubscriberRequest::from_subscriber(subscriber, &update);
        info!("Updating subscriber {}", subscriber.id);
        debug!("Subscriber {} lists after update: {:?}", subscriber.id, body.lists);

        let _: Value = self
            .http()
            .put(self.session(), &paths::subscriber(subscriber.id), &body)
            .await?;

        self.subscriber_by_id(subscriber.id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Subscriber with ID {} not found.", subscriber.id))
        })
    }

    async fn enable_subscriber(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError> {
        self.set_subscriber_status(subscriber, SubscriberStatus::Enabled)
            .await
    }

    async fn disable_subscriber(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError> {
        self.set_subscriber_status(subscriber, SubscriberStatus::Disabled)
            .await
    }

    async fn block_subscriber(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError> {
        self.set_subscriber_status(subscriber, SubscriberStatus::Blocklisted)
            .await
    }

    async fn delete_subscriber(&self, email: &str) -> Result<bool, AppError> {
        self.session().require(true)?;
        let Some(subscriber) = self.subscriber_by_email(email).await? else {
            debug!("No subscriber to delete for {}", normalize_email(email));
            return Ok(false);
        };
        self.delete_subscriber_by_id(subscriber.id).await
    }

    async fn delete_subscriber_by_id(&self, subscriber_id: i64) -> Result<bool, AppError> {
        self.session().require(true)?;
        info!("Deleting subscriber {}", subscriber_id);
        let deleted = not_found_as_none(
            self.http()
                .delete(self.session(), &paths::subscriber(subscriber_id))
                .await,
        )?;
        Ok(deleted.unwrap_or(false))
    }

    async fn manage_subscriber_lists(
        &self,
        update: ListMembershipUpdate,
    ) -> Result<bool, AppError> {
        self.session().require(true)?;
        let update = update.validate()?;
        info!(
            "Applying {} to {} subscribers on {} lists",
            update.action,
            update.ids.len(),
            update.target_list_ids.len()
        );
        self.http()
            .put(self.session(), paths::SUBSCRIBER_LISTS, &update)
            .await
    }

    async fn confirm_optin(
        &self,
        subscriber_uuid: &str,
        list_uuid: &str,
    ) -> Result<bool, AppError> {
        self.session().require(true)?;
        let subscriber_uuid = subscriber_uuid.trim();
        let list_uuid = list_uuid.trim();
        if subscriber_uuid.is_empty() {
            return Err(AppError::Validation("Subscriber uuid is required".to_string()));
        }
        if list_uuid.is_empty() {
            return Err(AppError::Validation("List uuid is required".to_string()));
        }
        info!("Confirming opt-in of {} to list {}", subscriber_uuid, list_uuid);

        let page = self
            .http()
            .post_form_text(
                self.session(),
                &paths::optin(subscriber_uuid),
                &[("l", list_uuid), ("confirm", "true")],
            )
            .await?;

        let confirmed = OPTIN_SUCCESS_PHRASES
            .iter()
            .any(|phrase| page.contains(phrase));
        debug!("Opt-in confirmed: {}", confirmed);
        Ok(confirmed)
    }
}

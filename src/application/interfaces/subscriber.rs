/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::{
    CreateSubscriberRequest, ListMembershipUpdate, SubscriberQuery, SubscriberUpdate,
};
use crate::presentation::subscriber::Subscriber;
use async_trait::async_trait;

/// Interface for the subscriber service
#[async_trait]
pub trait SubscriberService: Send + Sync {
    /// Gets every subscriber matching the query, newest updates first
    ///
    /// Pages are fetched one after the other until the server's total is
    /// reached and merged in server order.
    async fn subscribers(&self, query: &SubscriberQuery) -> Result<Vec<Subscriber>, AppError>;

    /// Finds a subscriber by email (case and surrounding whitespace ignored)
    async fn subscriber_by_email(&self, email: &str) -> Result<Option<Subscriber>, AppError>;

    /// Finds a subscriber by id
    async fn subscriber_by_id(&self, subscriber_id: i64) -> Result<Option<Subscriber>, AppError>;

    /// Finds a subscriber by uuid
    async fn subscriber_by_uuid(&self, subscriber_uuid: &str)
    -> Result<Option<Subscriber>, AppError>;

    /// Creates a subscriber
    async fn create_subscriber(
        &self,
        request: CreateSubscriberRequest,
    ) -> Result<Subscriber, AppError>;

    /// Applies list and status changes to a subscriber and returns the stored
    /// result
    ///
    /// The subscriber's own fields (email, name, attribs) are written as they
    /// are in the snapshot. The new list set is `(current - remove) + add`.
    async fn update_subscriber(
        &self,
        subscriber: &Subscriber,
        update: SubscriberUpdate,
    ) -> Result<Subscriber, AppError>;

    /// Sets the status to `enabled`, leaving lists untouched
    async fn enable_subscriber(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError>;

    /// Sets the status to `disabled`, leaving lists untouched
    async fn disable_subscriber(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError>;

    /// Sets the status to `blocklisted`, leaving lists untouched
    async fn block_subscriber(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError>;

    /// Deletes the subscriber with this email; `false` when there is none
    async fn delete_subscriber(&self, email: &str) -> Result<bool, AppError>;

    /// Deletes a subscriber by id; `false` when the server no longer has it
    async fn delete_subscriber_by_id(&self, subscriber_id: i64) -> Result<bool, AppError>;

    /// Adds, removes or unsubscribes many subscribers on many lists at once
    async fn manage_subscriber_lists(&self, update: ListMembershipUpdate)
    -> Result<bool, AppError>;

    /// Confirms a double opt-in subscription through the public opt-in form
    ///
    /// Returns `true` when the page the server renders reports the
    /// subscription as confirmed, now or earlier.
    async fn confirm_optin(&self, subscriber_uuid: &str, list_uuid: &str)
    -> Result<bool, AppError>;
}

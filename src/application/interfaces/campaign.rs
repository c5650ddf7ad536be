/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::CreateCampaignRequest;
use crate::presentation::campaign::{Campaign, CampaignPreview};
use async_trait::async_trait;

/// Interface for the campaign service
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Gets every campaign
    async fn campaigns(&self) -> Result<Vec<Campaign>, AppError>;

    /// Gets one campaign; `None` when the server answers 404
    async fn campaign_by_id(&self, campaign_id: i64) -> Result<Option<Campaign>, AppError>;

    /// Gets the rendered HTML of a campaign
    async fn campaign_preview_by_id(&self, campaign_id: i64) -> Result<CampaignPreview, AppError>;

    /// Creates a campaign
    async fn create_campaign(&self, request: CreateCampaignRequest) -> Result<Campaign, AppError>;

    /// Writes a modified campaign snapshot and returns the stored result
    ///
    /// A `send_at` in the past is sent as `null`.
    async fn update_campaign(&self, campaign: &Campaign) -> Result<Campaign, AppError>;

    /// Deletes a campaign; `false` when it does not exist
    async fn delete_campaign(&self, campaign_id: i64) -> Result<bool, AppError>;
}

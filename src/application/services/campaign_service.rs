/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::campaign::CampaignService;
use crate::application::pagination::fetch_all_pages;
use crate::application::services::not_found_as_none;
use crate::constants::paths;
use crate::error::AppError;
use crate::model::requests::{CreateCampaignRequest, UpdateCampaignRequest};
use crate::presentation::campaign::{Campaign, CampaignPreview};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl CampaignService for Client {
    async fn campaigns(&self) -> Result<Vec<Campaign>, AppError> {
        self.session().require(true)?;
        info!("Getting campaigns");

        let campaigns: Vec<Campaign> = fetch_all_pages(
            self.http(),
            self.session(),
            paths::CAMPAIGNS,
            &[],
            self.config().page_size,
        )
        .await?;

        debug!("Campaigns obtained: {}", campaigns.len());
        Ok(campaigns)
    }

    async fn campaign_by_id(&self, campaign_id: i64) -> Result<Option<Campaign>, AppError> {
        self.session().require(true)?;
        info!("Getting campaign {}", campaign_id);
        not_found_as_none(
            self.http()
                .get(self.session(), &paths::campaign(campaign_id), &[])
                .await,
        )
    }

    async fn campaign_preview_by_id(&self, campaign_id: i64) -> Result<CampaignPreview, AppError> {
        self.session().require(true)?;
        info!("Getting preview of campaign {}", campaign_id);
        let preview = self
            .http()
            .get_text(self.session(), &paths::campaign_preview(campaign_id))
            .await?;
        Ok(CampaignPreview { preview })
    }

    async fn create_campaign(&self, request: CreateCampaignRequest) -> Result<Campaign, AppError> {
        self.session().require(true)?;
        let request = request.validate()?;
        info!("Creating campaign {}", request.name);

        let campaign: Campaign = self
            .http()
            .post(self.session(), paths::CAMPAIGNS, &request)
            .await?;

        debug!("Campaign created with id {}", campaign.id);
        Ok(campaign)
    }

    async fn update_campaign(&self, campaign: &Campaign) -> Result<Campaign, AppError> {
        self.session().require(true)?;
        let body = UpdateCampaignRequest::from_campaign(campaign);
        if campaign.send_at.is_some() && body.send_at.is_none() {
            debug!("Campaign {} send_at is in the past, clearing it", campaign.id);
        }
        info!("Updating campaign {}", campaign.id);

        let _: Value = self
            .http()
            .put(self.session(), &paths::campaign(campaign.id), &body)
            .await?;

        self.campaign_by_id(campaign.id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Campaign with ID {} not found.", campaign.id))
        })
    }

    async fn delete_campaign(&self, campaign_id: i64) -> Result<bool, AppError> {
        self.session().require(true)?;
        info!("Deleting campaign {}", campaign_id);
        let deleted = not_found_as_none(
            self.http()
                .delete(self.session(), &paths::campaign(campaign_id))
                .await,
        )?;
        Ok(deleted.unwrap_or(false))
    }
}

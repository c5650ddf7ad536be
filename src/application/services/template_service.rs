/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::template::TemplateService;
use crate::application::services::not_found_as_none;
use crate::constants::paths;
use crate::error::AppError;
use crate::model::requests::{CreateTemplateRequest, UpdateTemplateRequest};
use crate::presentation::template::{Template, TemplatePreview};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl TemplateService for Client {
    async fn templates(&self) -> Result<Vec<Template>, AppError> {
        self.session().require(true)?;
        info!("Getting templates");

        let templates: Vec<Template> = self
            .http()
            .get(self.session(), paths::TEMPLATES, &[])
            .await?;

        debug!("Templates obtained: {}", templates.len());
        Ok(templates)
    }

    async fn template_by_id(&self, template_id: i64) -> Result<Option<Template>, AppError> {
        self.session().require(true)?;
        info!("Getting template {}", template_id);
        not_found_as_none(
            self.http()
                .get(self.session(), &paths::template(template_id), &[])
                .await,
        )
    }

    async fn template_preview_by_id(&self, template_id: i64) -> Result<TemplatePreview, AppError> {
        self.session().require(true)?;
        info!("Getting preview of template {}", template_id);
        let preview = self
            .http()
            .get_text(self.session(), &paths::template_preview(template_id))
            .await?;
        Ok(TemplatePreview { preview })
    }

    async fn create_template(&self, request: CreateTemplateRequest) -> Result<Template, AppError> {
        self.session().require(true)?;
        let request = request.validate()?;
        info!("Creating template {}", request.name);

        let template: Template = self
            .http()
            .post(self.session(), paths::TEMPLATES, &request)
            .await?;

        debug!("Template created with id {}", template.id);
        Ok(template)
    }

    async fn update_template(&self, template: &Template) -> Result<Template, AppError> {
        self.session().require(true)?;
        let body = UpdateTemplateRequest::from_template(template);
        info!("Updating template {}", template.id);

        let _: Value = self
            .http()
            .put(self.session(), &paths::template(template.id), &body)
            .await?;

        self.template_by_id(template.id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Template with ID {} not found.", template.id))
        })
    }

    async fn delete_template(&self, template_id: i64) -> Result<bool, AppError> {
        self.session().require(true)?;
        info!("Deleting template {}", template_id);
        let deleted = not_found_as_none(
            self.http()
                .delete(self.session(), &paths::template(template_id))
                .await,
        )?;
        Ok(deleted.unwrap_or(false))
    }

    async fn set_default_template(&self, template_id: i64) -> Result<bool, AppError> {
        self.session().require(true)?;
        info!("Setting template {} as default", template_id);
        let updated: Option<Value> = not_found_as_none(
            self.http()
                .put_empty(self.session(), &paths::template_default(template_id))
                .await,
        )?;
        Ok(match updated {
            Some(Value::Bool(ack)) => ack,
            Some(_) => true,
            None => false,
        })
    }
}

use crate::common::{self, campaign_json, envelope, page_body};
use chrono::Duration;
use listmonk_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_campaigns_are_aggregated() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    server
        .mock("GET", "/api/campaigns")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_body(page_body(
            vec![campaign_json(1, None), campaign_json(2, None)],
            2,
            1,
            500,
        ))
        .create_async()
        .await;

    let campaigns = client.campaigns().await.unwrap();
    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[1].name.as_deref(), Some("Campaign 2"));
    assert_eq!(campaigns[0].status, Some(CampaignStatus::Draft));
}

#[tokio::test]
async fn test_campaign_by_id() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    server
        .mock("GET", "/api/campaigns/1")
        .with_body(envelope(campaign_json(1, Some("2030-01-01T00:00:00.000000Z"))))
        .create_async()
        .await;
    server
        .mock("GET", "/api/campaigns/2")
        .with_status(404)
        .with_body(r#"{"message": "Campaign not found."}"#)
        .create_async()
        .await;

    let campaign = client.campaign_by_id(1).await.unwrap().unwrap();
    assert_eq!(campaign.status, Some(CampaignStatus::Scheduled));
    assert!(campaign.send_at.is_some());
    assert!(client.campaign_by_id(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_campaign_preview() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    server
        .mock("GET", "/api/campaigns/1/preview")
        .with_header("content-type", "text/html")
        .with_body("<html><p>Hello</p></html>")
        .create_async()
        .await;

    let preview = client.campaign_preview_by_id(1).await.unwrap();
    assert_eq!(preview.preview, "<html><p>Hello</p></html>");
}

#[tokio::test]
async fn test_create_campaign_defaults_to_first_list() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let create = server
        .mock("POST", "/api/campaigns")
        .match_body(Matcher::PartialJson(json!({
            "name": "Launch",
            "subject": "We launched",
            "lists": [1],
            "from_email": "news@example.com",
            "content_type": "markdown",
            "body": "# Hi"
        })))
        .with_body(envelope(campaign_json(5, None)))
        .create_async()
        .await;

    let campaign = client
        .create_campaign(
            CreateCampaignRequest::new("Launch", "We launched")
                .with_from_email("News@Example.com")
                .with_body("# Hi", ContentType::Markdown),
        )
        .await
        .unwrap();
    assert_eq!(campaign.id, 5);
    create.assert_async().await;
}

#[tokio::test]
async fn test_create_campaign_requires_subject() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let create = server
        .mock("POST", "/api/campaigns")
        .expect(0)
        .create_async()
        .await;

    let err = client
        .create_campaign(CreateCampaignRequest::new("Launch", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    create.assert_async().await;
}

#[tokio::test]
async fn test_update_campaign_clears_past_send_at() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let update = server
        .mock("PUT", "/api/campaigns/3")
        .match_body(Matcher::PartialJson(json!({
            "name": "Campaign 3",
            "lists": [1],
            "send_at": null
        })))
        .with_body(envelope(campaign_json(3, None)))
        .create_async()
        .await;
    server
        .mock("GET", "/api/campaigns/3")
        .with_body(envelope(campaign_json(3, None)))
        .create_async()
        .await;

    let past = (Utc::now() - Duration::days(3)).to_rfc3339();
    let campaign: Campaign = serde_json::from_value(campaign_json(3, Some(past.as_str()))).unwrap();
    let updated = client.update_campaign(&campaign).await.unwrap();

    assert!(updated.send_at.is_none());
    update.assert_async().await;
}

#[tokio::test]
async fn test_update_campaign_keeps_future_send_at() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let future = Utc::now() + Duration::days(3);
    let update = server
        .mock("PUT", "/api/campaigns/3")
        .match_body(Matcher::PartialJson(json!({
            "send_at": future.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
        })))
        .with_body(envelope(json!(true)))
        .create_async()
        .await;
    server
        .mock("GET", "/api/campaigns/3")
        .with_body(envelope(campaign_json(3, None)))
        .create_async()
        .await;

    let mut campaign: Campaign = serde_json::from_value(campaign_json(3, None)).unwrap();
    campaign.send_at = Some(future);
    client.update_campaign(&campaign).await.unwrap();
    update.assert_async().await;
}

#[tokio::test]
async fn test_delete_campaign() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    server
        .mock("DELETE", "/api/campaigns/3")
        .with_body(envelope(json!(true)))
        .create_async()
        .await;
    server
        .mock("DELETE", "/api/campaigns/4")
        .with_status(404)
        .create_async()
        .await;

    assert!(client.delete_campaign(3).await.unwrap());
    assert!(!client.delete_campaign(4).await.unwrap());
}

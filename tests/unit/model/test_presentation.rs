use chrono::{Datelike, Timelike};
use listmonk_client::model::utils::{format_timestamp, normalize_email, parse_timestamp};
use listmonk_client::presentation::campaign::{Campaign, CampaignStatus, CampaignType, ContentType};
use listmonk_client::presentation::list::{ListMembership, SubscriptionStatus};
use listmonk_client::presentation::subscriber::Subscriber;
use listmonk_client::presentation::template::{Template, TemplateType};
use serde_json::json;

#[test]
fn timestamps_accept_several_layouts() {
    let native = parse_timestamp("2024-01-18T08:19:23.159797Z").unwrap();
    assert_eq!(native.year(), 2024);
    assert_eq!(native.nanosecond(), 159_797_000);

    let offset = parse_timestamp("2024-01-18T10:19:23+02:00").unwrap();
    assert_eq!(offset.hour(), 8);

    let naive = parse_timestamp("2024-01-18T08:19:23").unwrap();
    assert_eq!(format_timestamp(&naive), "2024-01-18T08:19:23.000000Z");

    assert!(parse_timestamp("yesterday").is_none());
}

#[test]
fn email_normalization() {
    assert_eq!(normalize_email("  Foo@Bar.COM \n"), "foo@bar.com");
}

#[test]
fn memberships_accept_mixed_shapes() {
    let subscriber: Subscriber = serde_json::from_value(json!({
        "id": 2,
        "email": "b@example.com",
        "name": null,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "lists": [
            1,
            "2",
            {
                "id": "3",
                "uuid": "l-3",
                "name": "Three",
                "subscription_status": "unconfirmed",
                "subscription_created_at": "2024-01-01 10:00:00.5",
                "optin": "double"
            }
        ],
        "attribs": null
    }))
    .unwrap();

    assert_eq!(subscriber.name, "");
    assert!(subscriber.attribs.is_empty());
    let ids: Vec<i64> = subscriber.lists.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let third: &ListMembership = &subscriber.lists[2];
    assert_eq!(
        third.subscription_status,
        Some(SubscriptionStatus::Unconfirmed)
    );
    assert!(third.subscription_created_at.is_some());
    assert_eq!(third.meta["optin"], "double");
}

#[test]
fn membership_with_non_numeric_id_is_rejected() {
    let result: Result<Subscriber, _> = serde_json::from_value(json!({
        "id": 2,
        "email": "b@example.com",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "lists": ["three"]
    }));
    assert!(result.is_err());
}

#[test]
fn campaign_minimal_record() {
    let campaign: Campaign = serde_json::from_value(json!({
        "id": 1,
        "created_at": "2024-01-01T00:00:00Z",
        "uuid": "c-1",
        "type": "optin",
        "status": "draft",
        "lists": null,
        "tags": null,
        "headers": null
    }))
    .unwrap();
    assert_eq!(campaign.campaign_type, Some(CampaignType::Optin));
    assert_eq!(campaign.status, Some(CampaignStatus::Draft));
    assert!(campaign.lists.is_empty());
    assert!(campaign.send_at.is_none());
}

#[test]
fn unknown_enum_values_do_not_fail_parsing() {
    let campaign: Campaign = serde_json::from_value(json!({
        "id": 9,
        "created_at": "2024-03-01T09:00:00Z",
        "uuid": "c-9",
        "type": "automated",
        "status": "archived",
        "content_type": "mjml"
    }))
    .unwrap();
    assert_eq!(campaign.campaign_type, Some(CampaignType::Unknown));
    assert_eq!(campaign.status, Some(CampaignStatus::Unknown));
    assert_eq!(campaign.content_type, Some(ContentType::Unknown));
    assert!(campaign.status.is_some_and(|s| s.is_unknown()));

    let template: Template = serde_json::from_value(json!({
        "id": 4,
        "created_at": "2024-01-01T00:00:00Z",
        "type": "newsletter_block"
    }))
    .unwrap();
    assert_eq!(template.template_type, Some(TemplateType::Unknown));

    let known: Campaign = serde_json::from_value(json!({
        "id": 10,
        "created_at": "2024-03-01T09:00:00Z",
        "uuid": "c-10",
        "status": "running"
    }))
    .unwrap();
    assert!(known.status.is_some_and(|s| !s.is_unknown()));
}

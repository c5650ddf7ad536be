use crate::common::{self, envelope, template_json};
use listmonk_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_templates_plain_array() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    server
        .mock("GET", "/api/templates")
        .with_body(envelope(json!([
            template_json(1, "Default campaign template", "campaign", true),
            template_json(2, "Receipt", "tx", false)
        ])))
        .create_async()
        .await;

    let templates = client.templates().await.unwrap();
    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0].is_default, Some(true));
    assert_eq!(templates[1].template_type, Some(TemplateType::Tx));
}

#[tokio::test]
async fn test_template_by_id_and_preview() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    server
        .mock("GET", "/api/templates/2")
        .with_body(envelope(template_json(2, "Receipt", "tx", false)))
        .create_async()
        .await;
    server
        .mock("GET", "/api/templates/9")
        .with_status(404)
        .create_async()
        .await;
    server
        .mock("GET", "/api/templates/2/preview")
        .with_body("<div>Lorem ipsum</div>")
        .create_async()
        .await;

    let template = client.template_by_id(2).await.unwrap().unwrap();
    assert_eq!(template.name.as_deref(), Some("Receipt"));
    assert!(client.template_by_id(9).await.unwrap().is_none());

    let preview = client.template_preview_by_id(2).await.unwrap();
    assert!(preview.preview.contains("Lorem ipsum"));
}

#[tokio::test]
async fn test_create_template_without_placeholder_never_reaches_server() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let create = server
        .mock("POST", "/api/templates")
        .expect(0)
        .create_async()
        .await;

    let err = client
        .create_template(CreateTemplateRequest::new("Broken", "<div>no content slot</div>"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    create.assert_async().await;
}

#[tokio::test]
async fn test_create_template() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let create = server
        .mock("POST", "/api/templates")
        .match_body(Matcher::Json(json!({
            "name": "Fancy",
            "body": r#"<div>{{ template "content" . }}</div>"#,
            "type": "campaign",
            "is_default": false
        })))
        .with_body(envelope(template_json(3, "Fancy", "campaign", false)))
        .create_async()
        .await;

    let template = client
        .create_template(CreateTemplateRequest::new(
            "Fancy",
            r#"<div>{{ template "content" . }}</div>"#,
        ))
        .await
        .unwrap();
    assert_eq!(template.id, 3);
    create.assert_async().await;
}

#[tokio::test]
async fn test_update_template() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let update = server
        .mock("PUT", "/api/templates/3")
        .match_body(Matcher::PartialJson(json!({"name": "Renamed", "type": "campaign"})))
        .with_body(envelope(json!(true)))
        .create_async()
        .await;
    server
        .mock("GET", "/api/templates/3")
        .with_body(envelope(template_json(3, "Renamed", "campaign", false)))
        .create_async()
        .await;

    let mut template: Template =
        serde_json::from_value(template_json(3, "Fancy", "campaign", false)).unwrap();
    template.name = Some("Renamed".to_string());

    let updated = client.update_template(&template).await.unwrap();
    assert_eq!(updated.name.as_deref(), Some("Renamed"));
    update.assert_async().await;
}

#[tokio::test]
async fn test_delete_and_default_template() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    server
        .mock("DELETE", "/api/templates/3")
        .with_body(envelope(json!(true)))
        .create_async()
        .await;
    server
        .mock("DELETE", "/api/templates/4")
        .with_status(404)
        .create_async()
        .await;
    let default = server
        .mock("PUT", "/api/templates/3/default")
        .with_body(envelope(json!(true)))
        .create_async()
        .await;
    server
        .mock("PUT", "/api/templates/4/default")
        .with_status(404)
        .create_async()
        .await;

    assert!(client.set_default_template(3).await.unwrap());
    assert!(!client.set_default_template(4).await.unwrap());
    assert!(client.delete_template(3).await.unwrap());
    assert!(!client.delete_template(4).await.unwrap());
    default.assert_async().await;
}

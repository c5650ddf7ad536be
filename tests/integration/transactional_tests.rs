use crate::common::{self, envelope};
use listmonk_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;
use std::io::Write;

#[tokio::test]
async fn test_send_transactional_json() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let tx = server
        .mock("POST", "/api/tx")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "subscriber_email": "buyer@example.com",
            "template_id": 4,
            "data": {"order_id": 1234},
            "messenger": "email",
            "content_type": "markdown"
        })))
        .with_body(envelope(json!(true)))
        .create_async()
        .await;

    let mut data = Map::new();
    data.insert("order_id".to_string(), json!(1234));
    let email = TransactionalEmail::new(" Buyer@Example.com", 4).with_data(data);

    assert!(client.send_transactional_email(&email).await.unwrap());
    tx.assert_async().await;
}

#[tokio::test]
async fn test_send_transactional_with_attachment() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let mut file = tempfile::Builder::new()
        .prefix("invoice")
        .suffix(".txt")
        .tempfile()
        .unwrap();
    writeln!(file, "Invoice #1234").unwrap();
    let file_name = file
        .path()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();

    let tx = server
        .mock("POST", "/api/tx")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="data""#.to_string()),
            Matcher::Regex(r#""subscriber_email":"buyer@example.com""#.to_string()),
            Matcher::Regex(format!(r#"name="file"; filename="{file_name}""#)),
            Matcher::Regex("Invoice #1234".to_string()),
        ]))
        .with_body(envelope(json!(true)))
        .create_async()
        .await;

    let email = TransactionalEmail::new("buyer@example.com", 4)
        .with_from_email("Shop <shop@example.com>")
        .with_content_type(ContentType::Html)
        .with_attachment(file.path());

    assert!(client.send_transactional_email(&email).await.unwrap());
    tx.assert_async().await;
}

#[tokio::test]
async fn test_send_transactional_missing_attachment() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let tx = server
        .mock("POST", "/api/tx")
        .expect(0)
        .create_async()
        .await;

    let email = TransactionalEmail::new("buyer@example.com", 4)
        .with_attachment("/definitely/not/a/real/file.pdf");
    let err = client.send_transactional_email(&email).await.unwrap_err();

    assert!(matches!(err, AppError::FileNotFound(_)));
    assert!(err.is_validation());
    tx.assert_async().await;
}

#[tokio::test]
async fn test_send_transactional_rejected_by_server() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    server
        .mock("POST", "/api/tx")
        .with_status(400)
        .with_body(r#"{"message": "Subscriber not found"}"#)
        .create_async()
        .await;

    let err = client
        .send_transactional_email(&TransactionalEmail::new("ghost@example.com", 4))
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
    assert!(!err.is_validation());
}

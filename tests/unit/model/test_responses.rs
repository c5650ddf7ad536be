use listmonk_client::error::AppError;
use listmonk_client::model::http::parse_envelope;
use listmonk_client::model::responses::{Page, resolve_mailing_list};
use listmonk_client::presentation::list::{ListType, MailingList, OptinMode};
use listmonk_client::presentation::subscriber::Subscriber;
use serde_json::json;

#[test]
fn page_of_subscribers_from_envelope() {
    let body = json!({
        "data": {
            "results": [{
                "id": 1,
                "email": "A@Example.com",
                "name": "A",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-02T00:00:00Z",
                "lists": [],
                "attribs": {},
                "status": "enabled"
            }],
            "query": "",
            "total": 1,
            "per_page": 500,
            "page": 1
        }
    })
    .to_string();

    let page: Page<Subscriber> = parse_envelope(&body).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.per_page, Some(500));
    assert_eq!(page.results[0].email, "a@example.com");
}

#[test]
fn list_lookup_quirk_is_resolved() {
    let wrapper = json!({
        "results": [{
            "id": 9,
            "created_at": "2024-01-01T00:00:00Z",
            "uuid": "l-9",
            "name": "Nine",
            "type": "public",
            "optin": "double",
            "tags": null,
            "subscriber_count": 12,
            "subscriber_statuses": {"confirmed": 10, "unconfirmed": 2}
        }],
        "total": 1
    });
    let list: MailingList = resolve_mailing_list(wrapper, 9).unwrap();
    assert_eq!(list.list_type, Some(ListType::Public));
    assert_eq!(list.optin, Some(OptinMode::Double));
    assert!(list.tags.is_empty());
    assert_eq!(list.subscriber_statuses["confirmed"], 10);
}

#[test]
fn list_lookup_quirk_without_match() {
    let err = resolve_mailing_list(json!({"results": []}), 9).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(!err.is_validation());
}

#[test]
fn envelope_errors() {
    assert!(matches!(
        parse_envelope::<bool>(""),
        Err(AppError::EmptyResponse)
    ));
    assert!(matches!(
        parse_envelope::<bool>("<html>"),
        Err(AppError::InvalidJson(_))
    ));
    assert!(matches!(
        parse_envelope::<bool>(r#"{"data": "yes"}"#),
        Err(AppError::SchemaMismatch(_))
    ));
}

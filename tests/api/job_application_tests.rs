//! Job Application API Tests

use std::collections::HashSet;

use axum::body::Bytes;
use axum::http::{header, Method, StatusCode};
use chrono::DateTime;
use futures::future::join_all;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use job_tracker::application::dto::JobApplicationResponse;

use crate::common::{create_payload, job_title, TestApp, JOB_APPLICATIONS};

fn path(id: &str) -> String {
    TestApp::job_application_path(id)
}

fn timestamp(value: &str) -> DateTime<chrono::FixedOffset> {
    DateTime::parse_from_rfc3339(value).unwrap()
}

#[tokio::test]
async fn test_list_returns_visible_records_newest_first() {
    let app = TestApp::seeded();

    let response = app.server.get(JOB_APPLICATIONS).await;
    response.assert_status_ok();

    let ids: Vec<String> = response
        .json::<Vec<JobApplicationResponse>>()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec!["ja-004", "ja-002", "ja-001", "ja-003"]);
}

#[tokio::test]
async fn test_list_on_empty_store_is_empty_array() {
    let app = TestApp::empty();

    let response = app.server.get(JOB_APPLICATIONS).await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_get_returns_seeded_record() {
    let app = TestApp::seeded();

    let response = app.server.get(&path("ja-001")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["id"], "ja-001");
    assert_eq!(body["company"], "Microsoft");
    assert_eq!(body["platform"], "LinkedIn");
    assert_eq!(body["status"], "InterviewScheduled");
    assert!(body["jobTitle"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body.get("isDeleted").is_none());
}

#[tokio::test]
async fn test_get_soft_deleted_record_is_not_found() {
    let app = TestApp::seeded();

    let response = app.server.get(&path("ja-deleted-001")).await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], 10001);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let app = TestApp::seeded();

    let response = app.server.get(&path("does-not-exist")).await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_id_is_bad_request() {
    let app = TestApp::seeded();

    let get = app.server.get(&path("%20")).await;
    get.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = get.json();
    assert_eq!(body["code"], 10002);

    let put = app
        .server
        .put(&path("%20"))
        .json(&json!({ "jobTitle": "Engineer" }))
        .await;
    put.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = put.json();
    assert_eq!(body["code"], 10002);

    let delete = app.server.delete(&path("%20")).await;
    delete.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = delete.json();
    assert_eq!(body["code"], 10002);

    let list: Vec<Value> = app.server.get(JOB_APPLICATIONS).await.json();
    assert_eq!(list.len(), 4);
}

#[tokio::test]
async fn test_head_reports_existence() {
    let app = TestApp::seeded();

    let live = app.server.method(Method::HEAD, &path("ja-002")).await;
    live.assert_status_ok();

    let deleted = app.server.method(Method::HEAD, &path("ja-deleted-001")).await;
    deleted.assert_status(StatusCode::NOT_FOUND);

    let unknown = app.server.method(Method::HEAD, &path("nope")).await;
    unknown.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_returns_created_with_location() {
    let app = TestApp::seeded();
    let payload = create_payload();

    let response = app.server.post(JOB_APPLICATIONS).json(&payload).await;
    response.assert_status(StatusCode::CREATED);

    let created: JobApplicationResponse = response.json();
    assert!(!created.id.is_empty());
    assert_eq!(created.company, payload["company"].as_str().unwrap());
    assert_eq!(created.job_title, payload["jobTitle"].as_str().unwrap());
    assert_eq!(created.platform, "LinkedIn");
    assert_eq!(created.notes.as_deref(), Some("Referred by a former colleague"));
    assert_eq!(created.created_at, created.updated_at);

    let location = response.header(header::LOCATION);
    assert_eq!(location.to_str().unwrap(), path(&created.id));

    let fetched: JobApplicationResponse = app.server.get(&path(&created.id)).await.json();
    assert_eq!(fetched, created);

    let list: Vec<JobApplicationResponse> = app.server.get(JOB_APPLICATIONS).await.json();
    assert_eq!(list.len(), 5);
    assert_eq!(list[0].id, created.id);
}

#[tokio::test]
async fn test_create_defaults_status_and_notes() {
    let app = TestApp::empty();

    let response = app
        .server
        .post(JOB_APPLICATIONS)
        .json(&json!({
            "company": "Stripe",
            "jobTitle": "Backend Engineer",
            "platform": "Hacker News"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["status"], "Applied");
    assert_eq!(body["notes"], Value::Null);
}

#[tokio::test]
async fn test_create_reuses_existing_company_and_platform() {
    let app = TestApp::seeded();

    let response = app
        .server
        .post(JOB_APPLICATIONS)
        .json(&json!({
            "company": "  microsoft ",
            "jobTitle": "Program Manager",
            "platform": "linkedin"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: JobApplicationResponse = response.json();
    assert_eq!(created.company, "Microsoft");
    assert_eq!(created.platform, "LinkedIn");

    let companies: Vec<Value> = app.server.get("/api/companies").await.json();
    assert_eq!(companies.len(), 5);
}

#[tokio::test]
async fn test_create_blank_company_reports_field_error() {
    let app = TestApp::seeded();

    let response = app
        .server
        .post(JOB_APPLICATIONS)
        .json(&json!({
            "company": "   ",
            "jobTitle": "Data Engineer",
            "platform": "Indeed"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], 10007);
    assert_eq!(body["errors"][0]["field"], "company");

    let list: Vec<Value> = app.server.get(JOB_APPLICATIONS).await.json();
    assert_eq!(list.len(), 4);
}

#[tokio::test]
async fn test_create_empty_object_reports_every_required_field() {
    let app = TestApp::seeded();

    let response = app.server.post(JOB_APPLICATIONS).json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let mut fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    fields.dedup();
    assert_eq!(fields, vec!["company", "jobTitle", "platform"]);
}

#[tokio::test]
async fn test_create_malformed_json_is_bad_request() {
    let app = TestApp::seeded();

    let response = app
        .server
        .post(JOB_APPLICATIONS)
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{\"company\": \"Acme\""))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], 10002);
}

#[tokio::test]
async fn test_create_unknown_status_is_bad_request() {
    let app = TestApp::seeded();
    let mut payload = create_payload();
    payload["status"] = json!("Hired");

    let response = app.server.post(JOB_APPLICATIONS).json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_replaces_mutable_fields() {
    let app = TestApp::seeded();
    let before: JobApplicationResponse = app.server.get(&path("ja-002")).await.json();

    let response = app
        .server
        .put(&path("ja-002"))
        .json(&json!({
            "jobTitle": "Staff Software Engineer",
            "status": "OfferReceived",
            "notes": "Offer expires Friday"
        }))
        .await;
    response.assert_status_ok();

    let updated: JobApplicationResponse = response.json();
    assert_eq!(updated.id, "ja-002");
    assert_eq!(updated.company, before.company);
    assert_eq!(updated.platform, before.platform);
    assert_eq!(updated.created_at, before.created_at);
    assert_eq!(updated.job_title, "Staff Software Engineer");
    assert_eq!(updated.notes.as_deref(), Some("Offer expires Friday"));
    assert!(timestamp(&updated.updated_at) > timestamp(&before.updated_at));

    let body: Value = app.server.get(&path("ja-002")).await.json();
    assert_eq!(body["status"], "OfferReceived");
}

#[tokio::test]
async fn test_update_omitted_fields_reset() {
    let app = TestApp::seeded();

    let response = app
        .server
        .put(&path("ja-001"))
        .json(&json!({ "jobTitle": job_title() }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "Applied");
    assert_eq!(body["notes"], Value::Null);
}

#[tokio::test]
async fn test_update_blank_job_title_is_rejected() {
    let app = TestApp::seeded();

    let response = app
        .server
        .put(&path("ja-001"))
        .json(&json!({ "jobTitle": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["field"], "jobTitle");
    assert!(body["message"].as_str().unwrap().starts_with("jobTitle: "));
}

#[tokio::test]
async fn test_update_missing_or_deleted_is_not_found() {
    let app = TestApp::seeded();
    let payload = json!({ "jobTitle": "Engineer" });

    let deleted = app.server.put(&path("ja-deleted-001")).json(&payload).await;
    deleted.assert_status(StatusCode::NOT_FOUND);

    let unknown = app.server.put(&path("ja-999")).json(&payload).await;
    unknown.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_hides_record_everywhere() {
    let app = TestApp::seeded();

    let response = app.server.delete(&path("ja-003")).await;
    response.assert_status(StatusCode::NO_CONTENT);

    app.server
        .get(&path("ja-003"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .method(Method::HEAD, &path("ja-003"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .put(&path("ja-003"))
        .json(&json!({ "jobTitle": "Engineer" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let ids: Vec<String> = app
        .server
        .get(JOB_APPLICATIONS)
        .await
        .json::<Vec<JobApplicationResponse>>()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec!["ja-004", "ja-002", "ja-001"]);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let app = TestApp::seeded();

    app.server
        .delete(&path("ja-004"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server
        .delete(&path("ja-004"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .delete(&path("ja-deleted-001"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let app = TestApp::seeded();
    let server = &app.server;

    let responses = join_all((0..20).map(|_| async move {
        server.post(JOB_APPLICATIONS).json(&create_payload()).await
    }))
    .await;

    let ids: HashSet<String> = responses
        .into_iter()
        .map(|response| {
            response.assert_status(StatusCode::CREATED);
            response.json::<JobApplicationResponse>().id
        })
        .collect();
    assert_eq!(ids.len(), 20);

    let list: Vec<Value> = app.server.get(JOB_APPLICATIONS).await.json();
    assert_eq!(list.len(), 24);
}

#[tokio::test]
async fn test_concurrent_updates_all_apply() {
    let app = TestApp::seeded();
    let server = &app.server;
    let target = path("ja-001");

    let responses = join_all((0..10).map(|i| {
        let target = target.clone();
        async move {
            server
                .put(&target)
                .json(&json!({ "jobTitle": format!("Revision {}", i) }))
                .await
        }
    }))
    .await;

    let stamps: HashSet<String> = responses
        .into_iter()
        .map(|response| {
            response.assert_status_ok();
            response.json::<JobApplicationResponse>().updated_at
        })
        .collect();
    assert_eq!(stamps.len(), 10);

    let current: JobApplicationResponse = app.server.get(&target).await.json();
    assert!(current.job_title.starts_with("Revision "));
}

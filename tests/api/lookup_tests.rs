//! Company and Platform API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{company_name, TestApp, JOB_APPLICATIONS};

fn names(items: &[Value]) -> Vec<&str> {
    items.iter().filter_map(|item| item["name"].as_str()).collect()
}

#[tokio::test]
async fn test_list_companies_sorted_by_name() {
    let app = TestApp::seeded();

    let response = app.server.get("/api/companies").await;
    response.assert_status_ok();

    let companies: Vec<Value> = response.json();
    assert_eq!(
        names(&companies),
        vec!["Amazon", "Google", "Meta", "Microsoft", "Netflix"]
    );
}

#[tokio::test]
async fn test_list_platforms_includes_inactive() {
    let app = TestApp::seeded();

    let platforms: Vec<Value> = app.server.get("/api/platforms").await.json();

    assert_eq!(
        names(&platforms),
        vec!["Company Website", "Glassdoor", "Indeed", "LinkedIn"]
    );
    let glassdoor = platforms
        .iter()
        .find(|p| p["name"] == "Glassdoor")
        .unwrap();
    assert_eq!(glassdoor["isActive"], false);
}

#[tokio::test]
async fn test_create_registers_new_company_and_platform() {
    let app = TestApp::empty();
    let company = company_name();

    app.server
        .post(JOB_APPLICATIONS)
        .json(&json!({
            "company": company,
            "jobTitle": "Site Reliability Engineer",
            "platform": "Wellfound"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let companies: Vec<Value> = app.server.get("/api/companies").await.json();
    assert_eq!(names(&companies), vec![company.trim()]);

    let platforms: Vec<Value> = app.server.get("/api/platforms").await.json();
    assert_eq!(names(&platforms), vec!["Wellfound"]);
    assert_eq!(platforms[0]["isActive"], true);
}

#[tokio::test]
async fn test_get_company_by_id() {
    let app = TestApp::seeded();

    let response = app.server.get("/api/companies/company-002").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Google");

    app.server
        .get("/api/companies/company-404")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .get("/api/companies/%20")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_name_filter_ignores_case() {
    let app = TestApp::seeded();

    let companies: Vec<Value> = app.server.get("/api/companies?name=NETFLIX").await.json();
    assert_eq!(names(&companies), vec!["Netflix"]);

    let platforms: Vec<Value> = app.server.get("/api/platforms?name=indeed").await.json();
    assert_eq!(names(&platforms), vec!["Indeed"]);

    let none: Vec<Value> = app.server.get("/api/platforms?name=Monster").await.json();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_delete_referenced_company_is_conflict() {
    let app = TestApp::seeded();

    // company-005 is only referenced by a soft-deleted application
    for id in ["company-001", "company-005"] {
        let response = app.server.delete(&format!("/api/companies/{}", id)).await;
        response.assert_status(StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(body["code"], 10005);
    }

    let companies: Vec<Value> = app.server.get("/api/companies").await.json();
    assert_eq!(companies.len(), 5);
}

#[tokio::test]
async fn test_delete_unreferenced_platform() {
    let app = TestApp::seeded();

    app.server
        .delete("/api/platforms/platform-004")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server
        .get("/api/platforms/platform-004")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .delete("/api/platforms/platform-004")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let platforms: Vec<Value> = app.server.get("/api/platforms").await.json();
    assert_eq!(names(&platforms), vec!["Company Website", "Indeed", "LinkedIn"]);
}

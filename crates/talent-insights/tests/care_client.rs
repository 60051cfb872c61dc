//! End-to-end checks for the CaRe client over a real HTTP transport.
//!
//! A wiremock server stands in for the analytics API so the reqwest transport,
//! URL resolution and status mapping are exercised together.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use talent_insights::care::{
    insight_router, CareClientError, CareHttpClient, DistributionQuery, ProgressionQuery,
    ReqwestTransport,
};
use talent_insights::config::{
    StaticSystemConfiguration, CARE_BASE_URL_KEY, CARE_DISTRIBUTION_PATH_KEY,
    CARE_PROGRESSION_PATH_KEY,
};

type Client = CareHttpClient<StaticSystemConfiguration, ReqwestTransport>;

async fn client_for(server: &MockServer) -> Client {
    let settings = StaticSystemConfiguration::new()
        .with(CARE_BASE_URL_KEY, format!("{}/care/", server.uri()))
        .with(CARE_DISTRIBUTION_PATH_KEY, "v1/distribution")
        .with(CARE_PROGRESSION_PATH_KEY, "v1/progression");
    let transport =
        ReqwestTransport::with_timeout(Duration::from_secs(5)).expect("transport builds");
    CareHttpClient::from_settings(Arc::new(settings), transport)
        .await
        .expect("client builds")
}

fn distribution_query() -> DistributionQuery {
    DistributionQuery {
        title: Some("Registered Nurse".to_string()),
        skills: vec!["Triage".to_string()],
        country_code: Some("US".to_string()),
        state: Some("Iowa".to_string()),
        titles_count: 5,
        companies_count: 5,
        industries_count: 5,
        skills_count: 10,
        ..DistributionQuery::default()
    }
}

#[tokio::test]
async fn get_stats_sends_json_payload_and_returns_document() {
    let server = MockServer::start().await;
    let stats = json!({
        "totalCandidateCount": 1200,
        "skills": [{ "name": "Triage", "count": 800 }]
    });

    Mock::given(method("POST"))
        .and(path("/care/v1/distribution"))
        .and(header("content-type", "application/json; charset=utf-8"))
        .and(body_json(json!({
            "title": "Registered Nurse",
            "titleSynonyms": [],
            "companies": [],
            "industries": [],
            "skills": ["Triage"],
            "isSimilarTitlesStats": true,
            "isOccupationsStats": false,
            "isCompaniesStats": true,
            "isIndustriesStats": true,
            "isSkillsStats": true,
            "isTotalCandidateCount": true,
            "location": { "countryCode": "US", "stateName": "Iowa", "cityName": null },
            "similarTitlesCount": 5,
            "companiesCount": 5,
            "industriesCount": 5,
            "skillsCount": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client
        .get_stats(&distribution_query())
        .await
        .expect("stats returned");

    assert_eq!(result.into_inner(), stats);
}

#[tokio::test]
async fn get_stats_and_get_progression_treat_422_differently() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "reason": "country" })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    match client.get_stats(&distribution_query()).await {
        Err(CareClientError::Validation { field, .. }) => assert_eq!(field, "CountryCode"),
        other => panic!("expected validation error, got {other:?}"),
    }

    let progression = client
        .get_progression(&ProgressionQuery {
            title: Some("Registered Nurse".to_string()),
            similar_titles: vec!["Staff Nurse".to_string()],
            skills: Vec::new(),
        })
        .await
        .expect("422 body is decoded for progression");
    assert_eq!(progression.section("reason"), Some(&json!("country")));
}

#[tokio::test]
async fn server_failures_surface_as_unavailable_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/care/v1/progression"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    match client.get_progression(&ProgressionQuery::default()).await {
        Err(CareClientError::ServiceUnavailable { context, .. }) => {
            assert_eq!(context, "maintenance")
        }
        other => panic!("expected unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_is_reported_as_unavailable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let address = listener.local_addr().expect("local addr");
    drop(listener);

    let settings = StaticSystemConfiguration::new()
        .with(CARE_BASE_URL_KEY, format!("http://{address}/"))
        .with(CARE_DISTRIBUTION_PATH_KEY, "v1/distribution");
    let transport =
        ReqwestTransport::with_timeout(Duration::from_secs(5)).expect("transport builds");
    let client = CareHttpClient::from_settings(Arc::new(settings), transport)
        .await
        .expect("client builds");

    let err = client
        .get_stats(&distribution_query())
        .await
        .expect_err("closed port fails");
    assert!(err.is_retryable());
    assert!(matches!(
        err,
        CareClientError::ServiceUnavailable {
            source: Some(_),
            ..
        }
    ));
}

#[tokio::test]
async fn insight_routes_forward_queries_and_map_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/care/v1/distribution"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such title"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/care/v1/progression"))
        .and(body_json(json!({
            "title": "Analyst",
            "similar_titles": [],
            "skills": ["SQL"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "titles": ["Senior Analyst"] })))
        .mount(&server)
        .await;

    let router = insight_router(Arc::new(client_for(&server).await));

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/insights/distribution")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "title": "Unknown" }).to_string()))
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/insights/progression")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "title": "Analyst", "skills": ["SQL"] }).to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(payload, json!({ "titles": ["Senior Analyst"] }));
}

#[tokio::test]
async fn distribution_route_forwards_camel_case_filters() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/care/v1/distribution"))
        .and(body_json(json!({
            "title": "Nurse",
            "titleSynonyms": ["RN"],
            "companies": [],
            "industries": [],
            "skills": [],
            "isSimilarTitlesStats": true,
            "isOccupationsStats": false,
            "isCompaniesStats": true,
            "isIndustriesStats": true,
            "isSkillsStats": true,
            "isTotalCandidateCount": true,
            "location": { "countryCode": "US", "stateName": null, "cityName": null },
            "similarTitlesCount": 0,
            "companiesCount": 0,
            "industriesCount": 0,
            "skillsCount": 7
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalCandidateCount": 42 })))
        .expect(1)
        .mount(&server)
        .await;

    let response = insight_router(Arc::new(client_for(&server).await))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/insights/distribution")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "title": "Nurse",
                        "titleSynonyms": ["RN"],
                        "countryCode": "US",
                        "skillsCount": 7
                    })
                    .to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(payload["totalCandidateCount"], json!(42));
}

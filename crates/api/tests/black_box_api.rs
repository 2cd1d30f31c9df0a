use std::sync::Arc;

use meterops_api::app::{build_app, services::AppServices};
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, in-memory store, ephemeral port.
        let app = build_app(Arc::new(AppServices::in_memory()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn post(client: &reqwest::Client, url: String, body: Value) -> (StatusCode, Value) {
    let res = client.post(url).json(&body).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap_or(Value::Null))
}

fn demand(date: &str, faulty: u32, complaint: u32, leak: u32) -> Value {
    json!({
        "Date": date,
        "Faulty Program": faulty,
        "Meter Complaint": complaint,
        "Meter Leak": leak,
    })
}

#[tokio::test]
async fn health_is_ok() {
    let server = TestServer::spawn().await;
    let res = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn demand_lifecycle_over_http() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = post(&client, server.url("/demands"), demand("Jan", 2, 4, 0)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Demand created successfully");
    assert_eq!(body["demand"]["Date"], "Jan");
    assert!(body["demand"]["createdAt"].is_string());
    let id = body["demand"]["_id"].as_str().unwrap().to_string();

    let fetched: Value = client
        .get(server.url(&format!("/demands/{id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["Faulty Program"], 2);

    let res = client
        .put(server.url(&format!("/demands/{id}")))
        .json(&demand("Feb", 1, 1, 1))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Demand updated successfully");
    assert_eq!(body["updatedDemand"]["Date"], "Feb");
    assert_eq!(body["updatedDemand"]["_id"], id.as_str());

    let res = client
        .delete(server.url(&format!("/demands/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Demand deleted successfully");
    assert_eq!(body["deletedDemand"]["Date"], "Feb");

    let res = client
        .delete(server.url(&format!("/demands/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let list: Vec<Value> = client
        .get(server.url("/demands"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn forecast_tracks_history_changes() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let view: Value = client
        .get(server.url("/demands/forecast"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows = view["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "Next Month (Forecast)");
    assert_eq!(rows[0]["faultyProgram"], 0);
    assert!(rows[0]["id"].is_null());

    post(&client, server.url("/demands"), demand("Jan", 2, 4, 0)).await;
    post(&client, server.url("/demands"), demand("Feb", 4, 0, 2)).await;

    let view: Value = client
        .get(server.url("/demands/forecast"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows = view["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2]["date"], "Next Month (Forecast)");
    assert_eq!(rows[2]["faultyProgram"], 3);
    assert_eq!(rows[2]["meterComplaint"], 2);
    assert_eq!(rows[2]["meterLeak"], 1);
    assert_eq!(rows[3]["date"], "Next Year (Forecast)");
    assert_eq!(rows[3]["faultyProgram"], 36);
    assert_eq!(rows[3]["meterComplaint"], 24);
    assert_eq!(rows[3]["meterLeak"], 12);
    assert_eq!(view["averages"]["faultyProgram"], 3.0);
    assert_eq!(view["columns"][0]["Header"], "Date");
}

#[tokio::test]
async fn every_kind_is_served_at_its_route() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let cases = [
        (
            "/meters",
            "meter",
            json!({
                "Region": "North",
                "Serial Number": "SN-1",
                "Meter Size": 15,
                "Meter Type": "Smart",
                "Meter Manufacturer": "Acme",
                "Meter Model": "X1",
                "Meter Installation Date": "2020-01-01",
                "Meter Age": 4,
            }),
        ),
        (
            "/lab",
            "labTestResult",
            json!({
                "Serial Number": "SN-1",
                "Region": "North",
                "Tested Date": "2024-03-01",
                "Result": "Pass",
            }),
        ),
        (
            "/inventory",
            "inventoryItem",
            json!({ "Meter Size": "15mm", "Minimum Buffer Stock": 40 }),
        ),
        ("/demands", "demand", demand("Mar", 1, 2, 3)),
        (
            "/warranties",
            "warranty",
            json!({
                "Serial Number": "SN-2",
                "Meter Size": 20,
                "Manufactured Year": 2021,
                "Received Date": "2024-01-10",
                "Physical Checked Date": "2024-01-12",
                "Defect": "Cracked glass",
                "Status": "Claimed",
            }),
        ),
        (
            "/movements",
            "movement",
            json!({
                "Transaction From": "Store A",
                "Transaction To": "Depot 3",
                "Item Description": "15mm meter",
                "Quantity": 12,
                "Calendar Month": "April",
            }),
        ),
    ];

    for (route, key, payload) in cases {
        let (status, body) = post(&client, server.url(route), payload).await;
        assert_eq!(status, StatusCode::CREATED, "create at {route}");
        assert!(body[key]["_id"].is_string(), "{route} response keyed by {key}");

        let list: Vec<Value> = client
            .get(server.url(route))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(list.len(), 1, "{route} lists only its own kind");
    }
}

#[tokio::test]
async fn edit_payloads_with_camel_case_names_and_numeric_strings_are_accepted() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (_, body) = post(
        &client,
        server.url("/inventory"),
        json!({ "Meter Size": "20mm", "Minimum Buffer Stock": 10 }),
    )
    .await;
    let id = body["inventoryItem"]["_id"].as_str().unwrap().to_string();

    let res = client
        .put(server.url(&format!("/inventory/{id}")))
        .json(&json!({ "meterSize": "25mm", "minimumBufferStock": "12" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["updatedInventoryItem"]["Meter Size"], "25mm");
    assert_eq!(body["updatedInventoryItem"]["Minimum Buffer Stock"], 12);
}

#[tokio::test]
async fn unknown_id_is_404_with_kind_label() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let missing = meterops_core::RecordId::new();

    let res = client
        .get(server.url(&format!("/warranties/{missing}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "Meter warranty not found");

    let res = client
        .delete(server.url(&format!("/demands/{missing}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_is_400() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/meters/not-a-uuid"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn invalid_records_are_rejected() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // A persisted row may not impersonate a forecast row.
    let (status, body) = post(
        &client,
        server.url("/demands"),
        demand("Next Month (Forecast)", 1, 1, 1),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = post(&client, server.url("/demands"), demand("Apr", 0, 0, 0)).await;
    assert_eq!(status, StatusCode::CREATED);

    let res = client
        .post(server.url("/demands"))
        .json(&json!({
            "Date": "May",
            "Faulty Program": -1,
            "Meter Complaint": 0,
            "Meter Leak": 0,
        }))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_client_error());

    let list: Vec<Value> = client
        .get(server.url("/demands"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.len(), 1);
}

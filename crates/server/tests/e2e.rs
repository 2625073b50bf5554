use std::net::SocketAddr;

use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use configs::DatabaseConfig;
use server::routes::{self, ServerState};

struct TestApp {
    base_url: String,
}

/// Runs only against a real MariaDB: `DATABASE_URL` set and `SKIP_DB_TESTS` unset.
async fn start_server() -> Option<TestApp> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        eprintln!("SKIP_DB_TESTS set; skip e2e tests.");
        return None;
    }
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skip e2e tests.");
        return None;
    };

    let cfg = DatabaseConfig { url, ..DatabaseConfig::default() };
    let db = models::db::connect(&cfg).await.expect("connect db");
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("migrations notice: {e}");
    }

    let app = routes::build_router(ServerState::from_db(db), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await.expect("bind");
    let addr: SocketAddr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {e}");
        }
    });
    Some(TestApp { base_url: format!("http://{addr}") })
}

/// Six characters, unique per run.
fn fresh_code() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("T{}", &hex[..5]).to_uppercase()
}

#[tokio::test]
async fn agent_lifecycle_against_database() {
    let Some(app) = start_server().await else { return };
    let client = reqwest::Client::new();
    let code = fresh_code();
    let url = format!("{}/agents/{code}", app.base_url);

    let created = client
        .post(format!("{}/agents", app.base_url))
        .json(&json!({
            "AGENT_CODE": code, "AGENT_NAME": "Alice", "WORKING_AREA": "NY",
            "COMMISSION": 0.15, "PHONE_NO": "555-0100", "COUNTRY": "US"
        }))
        .send()
        .await
        .expect("post");
    assert_eq!(created.status(), HttpStatusCode::OK);
    let body: Value = created.json().await.expect("json");
    assert_eq!(body["agentId"], code.as_str());

    let got: Value = client.get(&url).send().await.expect("get").json().await.expect("json");
    assert_eq!(got["AGENT_NAME"], "Alice");
    assert_eq!(got["COMMISSION"], 0.15);

    // same value twice: MariaDB reports zero changed rows, still a success
    for _ in 0..2 {
        let resp = client.patch(&url).json(&json!({"PHONE_NO": "555-0199"})).send().await.expect("patch");
        assert_eq!(resp.status(), HttpStatusCode::OK);
    }

    let resp = client.patch(&url).json(&json!({"NOT_A_COLUMN": 1})).send().await.expect("patch");
    assert_eq!(resp.status(), HttpStatusCode::BAD_REQUEST);

    let resp = client
        .put(&url)
        .json(&json!({
            "AGENT_NAME": "Alicia", "WORKING_AREA": "Boston", "COMMISSION": 0.2,
            "PHONE_NO": "555-0111", "COUNTRY": "CA"
        }))
        .send()
        .await
        .expect("put");
    assert_eq!(resp.status(), HttpStatusCode::OK);
    let got: Value = client.get(&url).send().await.expect("get").json().await.expect("json");
    assert_eq!(got["COUNTRY"], "CA");
    assert_eq!(got["PHONE_NO"], "555-0111");

    let resp = client
        .post(format!("{}/agents", app.base_url))
        .json(&json!({
            "AGENT_CODE": code, "AGENT_NAME": "Dup", "WORKING_AREA": "NY",
            "COMMISSION": 0.1, "PHONE_NO": "1", "COUNTRY": "US"
        }))
        .send()
        .await
        .expect("post dup");
    assert_eq!(resp.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.expect("json");
    assert!(body["correlationId"].is_string());

    let resp = client.delete(&url).send().await.expect("delete");
    assert_eq!(resp.status(), HttpStatusCode::OK);
    let resp = client.get(&url).send().await.expect("get");
    assert_eq!(resp.status(), HttpStatusCode::NOT_FOUND);
}

#[tokio::test]
async fn company_create_and_list_against_database() {
    let Some(app) = start_server().await else { return };
    let client = reqwest::Client::new();
    let id = (Uuid::new_v4().as_u128() % 1_000_000_000) as i64 + 1_000_000;

    let resp = client
        .post(format!("{}/companies", app.base_url))
        .json(&json!({"COMPANY_ID": id.to_string(), "COMPANY_NAME": "E2E Co", "COMPANY_CITY": "Boston"}))
        .send()
        .await
        .expect("post");
    assert_eq!(resp.status(), HttpStatusCode::OK);
    let body: Value = resp.json().await.expect("json");
    assert_eq!(body["companyId"], id.to_string());

    let rows: Vec<Value> = client
        .get(format!("{}/companies", app.base_url))
        .send()
        .await
        .expect("list")
        .json()
        .await
        .expect("json");
    assert!(rows.iter().any(|r| r["COMPANY_ID"] == json!(id)));
}

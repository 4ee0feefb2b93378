#![allow(dead_code)]

use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Router};
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::minio::MinIO;
use testcontainers_modules::mongo::Mongo;

use lexfolio::api::routes::api_routes;
use lexfolio::auth::gate::AdminGate;
use lexfolio::auth::middleware::admin_page_gate;
use lexfolio::auth::session::SessionKeys;
use lexfolio::state::AppState;
use lexfolio::storage::client::{S3StorageClient, StorageClient};

pub const ADMIN_EMAIL: &str = "counsel@example.com";
pub const ADMIN_PASSWORD: &str = "correct horse battery";
const SESSION_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Holds running containers and provides the Axum router for integration tests.
///
/// Containers are kept alive for as long as this struct lives.
pub struct TestEnv {
    _mongo: ContainerAsync<Mongo>,
    _minio: ContainerAsync<MinIO>,
    pub state: AppState,
    pub router: Router,
}

impl TestEnv {
    /// Spin up MongoDB and MinIO and build a router wired to them.
    pub async fn start() -> Self {
        let (mongo_container, minio_container) =
            tokio::join!(Mongo::default().start(), MinIO::default().start());
        let mongo_container = mongo_container.expect("Failed to start MongoDB container");
        let minio_container = minio_container.expect("Failed to start MinIO container");

        // --- MongoDB ---
        let mongo_port = mongo_container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");
        let mongo_client = mongodb::Client::with_uri_str(format!("mongodb://127.0.0.1:{mongo_port}"))
            .await
            .expect("Failed to connect to MongoDB");
        let mongo_db = mongo_client.database("lexfolio_test");

        // --- MinIO (S3) ---
        let minio_port = minio_container
            .get_host_port_ipv4(9000)
            .await
            .expect("Failed to get MinIO port");
        let minio_endpoint = format!("http://127.0.0.1:{minio_port}");

        unsafe {
            std::env::set_var("AWS_ACCESS_KEY_ID", "minioadmin");
            std::env::set_var("AWS_SECRET_ACCESS_KEY", "minioadmin");
            std::env::set_var("AWS_REGION", "us-east-1");
        }

        let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .endpoint_url(&minio_endpoint)
            .region(aws_config::Region::new("us-east-1"))
            .load()
            .await;
        let s3_client = aws_sdk_s3::Client::from_conf(
            aws_sdk_s3::config::Builder::from(&s3_config)
                .force_path_style(true)
                .build(),
        );

        let bucket_name = "lexfolio-test";
        let _ = s3_client.create_bucket().bucket(bucket_name).send().await;
        let storage: Arc<dyn StorageClient> =
            Arc::new(S3StorageClient::new(s3_client, bucket_name.to_string()));

        // --- AppState ---
        let leptos_options = leptos::prelude::LeptosOptions::builder()
            .output_name("lexfolio")
            .build();
        let gate = AdminGate::new(
            ADMIN_EMAIL,
            ADMIN_PASSWORD,
            SessionKeys::new(SESSION_SECRET, 12),
        );
        let state = AppState::with_database(&mongo_db, storage, gate, leptos_options);

        Self {
            _mongo: mongo_container,
            _minio: minio_container,
            router: build_router(state.clone()),
            state,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .save_cookies()
            .expect_success_by_default()
            .try_build(self.router.clone())
            .expect("Failed to build TestServer")
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .save_cookies()
            .try_build(self.router.clone())
            .expect("Failed to build TestServer")
    }

    /// A server that is already signed in as the admin.
    pub async fn admin_server(&self) -> axum_test::TestServer {
        let server = self.server_permissive();
        login(&server).await.assert_status_ok();
        server
    }
}

/// API routes plus stand-in admin pages, behind the same page gate as the binary.
fn build_router(state: AppState) -> Router {
    let admin_page = get(|| async { "admin page" });
    Router::new()
        .merge(api_routes())
        .route("/admin", admin_page.clone())
        .route("/admin/{*rest}", admin_page)
        .layer(middleware::from_fn_with_state(state.clone(), admin_page_gate))
        .with_state(state)
}

pub async fn login(server: &axum_test::TestServer) -> axum_test::TestResponse {
    server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "email": ADMIN_EMAIL,
            "password": ADMIN_PASSWORD
        }))
        .await
}

pub fn service_payload(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "shortDescription": "Short",
        "description": format!("{title} description"),
        "longDescription": "## Scope\n\nEverything.",
        "icon": "scale",
        "features": ["First", "", "Second"],
        "pricing": "On request"
    })
}

pub fn blog_payload(title: &str, tags: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "summary": format!("About {title}"),
        "content": format!("# {title}\n\nBody text."),
        "tags": tags
    })
}

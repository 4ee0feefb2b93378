#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use anyhow::Context;
    use axum::{middleware, Router};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use lexfolio::api::routes::api_routes;
    use lexfolio::app::{shell, App};
    use lexfolio::auth::gate::AdminGate;
    use lexfolio::auth::middleware::admin_page_gate;
    use lexfolio::components::seo::SiteOrigin;
    use lexfolio::config::AppConfig;
    use lexfolio::state::AppState;
    use lexfolio::storage::client::{S3StorageClient, StorageClient};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexfolio=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting Lexfolio server...");

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None).context("Failed to read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    // Connect to MongoDB
    let mongo_client = mongodb::Client::with_uri_str(&config.mongodb.uri)
        .await
        .context("Failed to connect to MongoDB")?;
    let mongo_db = mongo_client.database(&config.mongodb.database);
    tracing::info!(database = %config.mongodb.database, "Connected to MongoDB");

    // Connect to S3
    let storage: Arc<dyn StorageClient> = Arc::new(S3StorageClient::from_config(&config.s3).await);
    tracing::info!(bucket = %config.s3.bucket, "S3 storage client initialized");

    let app_state = AppState::with_database(
        &mongo_db,
        storage,
        AdminGate::from_settings(&config.admin),
        leptos_options.clone(),
    );

    if config.seed_demo_data {
        lexfolio::demo_seeder::seed_demo_data(&app_state).await;
    }

    let site_origin = SiteOrigin::new(&config.site.base_url);
    let routes = generate_route_list(App);

    let app = Router::new()
        .merge(api_routes())
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || {
                    provide_context(app_state.clone());
                    provide_context(site_origin.clone());
                }
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback_service(ServeDir::new(&site_root))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            admin_page_gate,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server terminated")?;

    Ok(())
}

// Client-side hydration goes through lib.rs::hydrate().
#[cfg(not(feature = "ssr"))]
fn main() {}

#![recursion_limit = "256"]

mod db;
mod rate_limit;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        // The default store lives under data/; make sure the directory exists.
        std::fs::create_dir_all("data").expect("create data directory");
        "sqlite:data/site.db?mode=rwc".into()
    });
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Optional: without it the operator inquiry listing responds 503.
    let admin_token = std::env::var("ADMIN_TOKEN").ok();
    if admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN not set, inquiry listing disabled");
    }

    let content = catalog::SiteContent::load_dir(&content_dir())
        .expect("content load failed");
    content.validate().expect("content validation failed");
    tracing::info!(
        photos = content.photos.len(),
        vendors = content.vendors.len(),
        posts = content.posts.len(),
        "content loaded"
    );

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let state = state::AppState::new(pool, content, admin_token);

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "eternal moments listening");
    axum::serve(listener, app).await.expect("server failed");
}

/// Directory holding the YAML content files. Defaults to the `content/`
/// directory at the workspace root so `cargo leptos watch` works without
/// configuration.
fn content_dir() -> std::path::PathBuf {
    std::env::var("CONTENT_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../content"))
}

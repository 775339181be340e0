use iron_blog::{seed, web, Config, PostStore, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iron_blog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting iron-blog");
    tracing::info!("Web server will listen on: {}", config.web_addr());

    let store = if config.seed_demo_posts {
        PostStore::with_posts(seed::demo_posts()?)
    } else {
        PostStore::new()
    };
    tracing::info!("Loaded {} posts", store.len().await);

    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving client from {}", dir.display());
    }

    let state = web::AppState::new(store);
    web::serve(config.web_addr(), state, config.static_dir.clone()).await
}

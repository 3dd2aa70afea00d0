use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{
    fmt::time::LocalTime, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use users_api::{config, factory, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename(".env.local").ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "users_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_timer(LocalTime::rfc_3339()))
        .init();

    let settings = config::read_config().context("failed to read configuration")?;
    let application = factory::build(&settings).await?;

    tokio::spawn(application.dispatcher.run());

    let app = router::create(application.state, settings.application.app_url.clone());

    let addr = format!("{}:{}", settings.application.host, settings.application.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

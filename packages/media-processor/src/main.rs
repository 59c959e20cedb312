use anyhow::Context;
use media_processor::{router, telemetry, AppState, Config, Transport};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env はローカル実行用。存在しなくてもよい
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format);

    let state = AppState::from_config(&config);

    match config.transport {
        Transport::Lambda => {
            tracing::info!(bucket = %config.storage.bucket, "starting Lambda handler");
            media_processor::lambda::run(state)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Transport::Server => {
            let listener = tokio::net::TcpListener::bind(config.bind_addr)
                .await
                .with_context(|| format!("failed to bind {}", config.bind_addr))?;
            tracing::info!(
                addr = %config.bind_addr,
                bucket = %config.storage.bucket,
                "listening"
            );
            axum::serve(listener, router(state)).await?;
        }
    }

    Ok(())
}

use anyhow::{Context, Result};
use futures::StreamExt;
use product::{
    config::Config,
    handler::{
        ProductCommandHandler, ProductQueryHandler, ProductRpcRouter, QUEUE_GROUP, subject,
    },
    state::AppState,
};
use shared::{config::ConnectionManager, utils::init_logger};
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tokio::{sync::broadcast, task::JoinHandle};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, state) = setup().await.context("Failed to setup application")?;

    let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<()>(1);

    let handles = run_rpc_server(&config, state, shutdown_tx.clone())
        .await
        .context("Failed to start RPC server")?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("🛑 Shutdown signal received (Ctrl+C).");
            let _ = shutdown_tx.send(());
        }
        _ = shutdown_rx.recv() => {
            info!("🛑 Shutdown signal received from internal component.");
        }
    }

    shutdown(handles).await;

    Ok(())
}

async fn setup() -> Result<(Config, Arc<AppState>)> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let config = Config::init().context("Failed to load configuration")?;

    init_logger("product-service", is_dev);

    info!("🚀 Starting Product Service initialization...");

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = Arc::new(AppState::new(db_pool));

    info!("✅ Application setup completed successfully.");
    Ok((config, state))
}

async fn run_rpc_server(
    config: &Config,
    state: Arc<AppState>,
    shutdown_tx: broadcast::Sender<()>,
) -> Result<Vec<JoinHandle<()>>> {
    let client = async_nats::ConnectOptions::new()
        .name("product-service")
        .connect(config.nats_url.as_str())
        .await
        .with_context(|| format!("Failed to connect to NATS at {}", config.nats_url))?;

    info!("📡 Connected to NATS at {}", config.nats_url);

    let router = Arc::new(ProductRpcRouter::new(
        ProductQueryHandler::new(Arc::new(state.di_container.product_query.clone())),
        ProductCommandHandler::new(Arc::new(state.di_container.product_command.clone())),
    ));

    let mut handles = Vec::with_capacity(subject::ALL.len());
    for subject in subject::ALL {
        let handle =
            serve_subject(client.clone(), router.clone(), subject, shutdown_tx.clone()).await?;
        handles.push(handle);
    }

    Ok(handles)
}

async fn serve_subject(
    client: async_nats::Client,
    router: Arc<ProductRpcRouter>,
    subject: &'static str,
    shutdown_tx: broadcast::Sender<()>,
) -> Result<JoinHandle<()>> {
    let mut subscriber = client
        .queue_subscribe(subject, QUEUE_GROUP.to_string())
        .await
        .with_context(|| format!("Failed to subscribe to '{subject}'"))?;

    let mut shutdown_rx = shutdown_tx.subscribe();

    Ok(tokio::spawn(async move {
        info!("📡 Listening on '{subject}' (queue group '{QUEUE_GROUP}')");

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("🛑 Unsubscribing from '{subject}'");
                    if let Err(e) = subscriber.unsubscribe().await {
                        warn!("Failed to unsubscribe from '{subject}': {e}");
                    }
                    break;
                }
                maybe_msg = subscriber.next() => {
                    let Some(msg) = maybe_msg else {
                        warn!("Subscription on '{subject}' closed by server");
                        break;
                    };

                    let reply = router.dispatch(subject, &msg.payload).await;

                    // Fire-and-forget senders carry no reply subject.
                    if let Some(reply_to) = msg.reply {
                        if let Err(e) = client.publish(reply_to, reply.into()).await {
                            error!("❌ Failed to publish reply on '{subject}': {e}");
                        }
                    }
                }
            }
        }
    }))
}

async fn shutdown(handles: Vec<JoinHandle<()>>) {
    info!("🛑 Shutting down all subscribers...");

    let shutdown_timeout = tokio::time::Duration::from_secs(30);
    match tokio::time::timeout(shutdown_timeout, futures::future::join_all(handles)).await {
        Ok(_) => info!("✅ All subscribers shutdown gracefully"),
        Err(_) => warn!("⚠️ Shutdown timeout reached, forcing exit"),
    }

    info!("✅ Product Service shutdown complete.");
}

async fn run_migrations(pool: &Pool<Postgres>) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

mod render;
mod session;

use rand::RngCore;
use tracing_subscriber::EnvFilter;

use crate::render::{LogRenderer, Renderer};
use crate::session::{SessionBroadcast, SessionCommand};
use scrollhero_game::GameConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = GameConfig::load();
    let seed = std::env::var("SCROLLHERO_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| rand::rng().next_u64());
    tracing::info!(seed, "starting session");

    let (cmd_tx, mut broadcast_rx, handle) = session::spawn_session(config, seed);

    let quit_tx = cmd_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown requested");
            let _ = quit_tx.send(SessionCommand::Quit);
        }
    });

    let mut renderer = LogRenderer::default();
    while let Some(msg) = broadcast_rx.recv().await {
        match msg {
            SessionBroadcast::Frame(frame) => renderer.render(&frame),
            SessionBroadcast::Ended => break,
        }
    }

    let _ = handle.await;
    tracing::info!("session ended");
}

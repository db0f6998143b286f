//! # Peer Node
//!
//! Development peer: joins the configured channels with in-memory ledgers,
//! registers the whitelisted system chaincodes and waits for Ctrl+C.

use std::sync::Arc;

use anyhow::{Context, Result};
use pc_02_system_chaincodes::prelude::*;
use peer_node::container::NodeConfig;
use peer_node::PeerNode;
use peer_telemetry::init_telemetry;
use shared_types::InMemoryLedger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::from_env();

    let telemetry = init_telemetry(&config.telemetry).context("initializing telemetry")?;

    let peer = Arc::new(InMemoryPeer::new());
    for channel_id in &config.channels {
        peer.join_channel(channel_id, Arc::new(InMemoryLedger::new()));
        info!(channel_id = %channel_id, "Joined channel");
    }

    let node = PeerNode::bootstrap(&config, peer, telemetry.metrics)
        .context("registering system chaincodes")?;

    info!("===========================================");
    info!("  Peer {} v{}", config.peer_name, env!("CARGO_PKG_VERSION"));
    info!(
        "  System chaincodes: {:?}",
        node.provider().sys_cc_names().collect::<Vec<_>>()
    );
    info!("  Channels: {:?}", config.channels);
    info!("===========================================");

    info!("Peer is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;

    info!(
        metrics = %node.metrics().encode().unwrap_or_default(),
        "Shutting down"
    );

    Ok(())
}

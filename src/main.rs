//! Blogstore - actor-based post store over a REST API
//!
//! Architecture:
//! - Store layer - central state machine processing actions and lifecycle events
//! - Network layer (Tokio + reqwest) - async HTTP execution
//!
//! The binary is a smoke driver: it wires the actors together, fetches the
//! post list once and prints it. Real callers embed the actors instead.

use tokio::sync::mpsc;

use blogstore::constants::{BASE_URL_ENV, DEFAULT_BASE_URL};
use blogstore::{
    NetworkActor, NetworkCommand, StoreAction, StoreActor, StoreEvent, StoreSnapshot,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "blogstore.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let base_url =
        std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    // Create channels
    let (action_tx, action_rx) = mpsc::unbounded_channel::<StoreAction>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<StoreEvent>();
    let (snapshot_tx, mut snapshot_rx) = mpsc::unbounded_channel::<StoreSnapshot>();

    // Spawn network actor
    let network_actor = NetworkActor::new(&base_url, event_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn store actor
    let store_actor = StoreActor::new(net_cmd_tx, snapshot_tx);
    tokio::spawn(store_actor.run(action_rx, event_rx));

    action_tx.send(StoreAction::FetchPosts)?;

    // Wait for the fetch to settle: loading flips on, then off again
    let mut saw_loading = false;
    while let Some(snapshot) = snapshot_rx.recv().await {
        if snapshot.loading {
            saw_loading = true;
            continue;
        }
        if !saw_loading {
            continue;
        }
        if snapshot.post_list.is_empty() {
            println!("No posts at {}", base_url);
        } else {
            for post in &snapshot.post_list {
                println!("{:4}  {:20}  {}", post.id, post.publish_date, post.title);
            }
        }
        break;
    }

    action_tx.send(StoreAction::Shutdown)?;
    Ok(())
}

//! Network actor - runs blog API requests in the Tokio async runtime

use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::messages::network::RequestId;
use crate::messages::{NetworkCommand, StoreEvent};
use crate::network::client::{self, ApiClient};

/// Tracks an in-flight request for cancellation
struct ActiveRequest {
    cancel_tx: oneshot::Sender<()>,
}

/// Network actor that processes blog API commands.
///
/// Every operation is spawned as its own task, so requests never block
/// each other from starting. Cancel handles are kept per request id;
/// firing one makes the corresponding task resolve as a rejection. Each
/// task yields its request id on completion so the handle is dropped
/// once the request settles.
pub struct NetworkActor {
    client: ApiClient,
    event_tx: mpsc::UnboundedSender<StoreEvent>,
    active_requests: JoinSet<RequestId>,
    cancel_handles: HashMap<RequestId, ActiveRequest>,
}

impl NetworkActor {
    pub fn new(base_url: &str, event_tx: mpsc::UnboundedSender<StoreEvent>) -> Self {
        NetworkActor {
            client: ApiClient::new(base_url),
            event_tx,
            active_requests: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(cmd) => {
                            if self.handle_command(cmd) {
                                break;
                            }
                        }
                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(result) = self.active_requests.join_next() => {
                    if let Ok(id) = result {
                        self.untrack(id);
                    }
                }
            }
        }
    }

    /// Handle a single command, returns true if shutdown was requested
    fn handle_command(&mut self, cmd: NetworkCommand) -> bool {
        match cmd {
            NetworkCommand::FetchPosts { id } => {
                let cancel_rx = self.track(id);
                let event_tx = self.event_tx.clone();
                let client = self.client.clone();

                self.active_requests.spawn(async move {
                    tracing::info!(id, "Fetching post list");
                    let event = client::fetch_posts(&client, id, cancel_rx).await;
                    let _ = event_tx.send(event);
                    id
                });
            }

            NetworkCommand::AddPost { id, post } => {
                let cancel_rx = self.track(id);
                let event_tx = self.event_tx.clone();
                let client = self.client.clone();

                self.active_requests.spawn(async move {
                    tracing::info!(id, title = %post.title, "Creating post");
                    let event = client::create_post(&client, id, post, cancel_rx).await;
                    let _ = event_tx.send(event);
                    id
                });
            }

            NetworkCommand::UpdatePost { id, post_id, post } => {
                let cancel_rx = self.track(id);
                let event_tx = self.event_tx.clone();
                let client = self.client.clone();

                self.active_requests.spawn(async move {
                    tracing::info!(id, post_id = %post_id, "Updating post");
                    let event = client::update_post(&client, id, &post_id, post, cancel_rx).await;
                    let _ = event_tx.send(event);
                    id
                });
            }

            NetworkCommand::DeletePost { id, post_id } => {
                let cancel_rx = self.track(id);
                let event_tx = self.event_tx.clone();
                let client = self.client.clone();

                self.active_requests.spawn(async move {
                    tracing::info!(id, post_id = %post_id, "Deleting post");
                    let event = client::delete_post(&client, id, &post_id, cancel_rx).await;
                    let _ = event_tx.send(event);
                    id
                });
            }

            NetworkCommand::Cancel(id) => {
                if let Some(active) = self.cancel_handles.remove(&id) {
                    tracing::info!(id, "Cancelling request");
                    let _ = active.cancel_tx.send(());
                }
            }

            NetworkCommand::Shutdown => {
                // Cancel all active requests
                for (_, active) in self.cancel_handles.drain() {
                    let _ = active.cancel_tx.send(());
                }
                return true;
            }
        }

        false
    }

    /// Register a cancel handle for a request and hand back its receiver
    fn track(&mut self, id: RequestId) -> oneshot::Receiver<()> {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        self.cancel_handles.insert(id, ActiveRequest { cancel_tx });
        cancel_rx
    }

    /// Drop the cancel handle of a settled request
    fn untrack(&mut self, id: RequestId) {
        self.cancel_handles.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Post;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn completed_request_drops_its_cancel_handle() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<Post>::new()))
            .mount(&server)
            .await;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut actor = NetworkActor::new(&server.uri(), event_tx);

        actor.handle_command(NetworkCommand::FetchPosts { id: 7 });
        assert!(actor.cancel_handles.contains_key(&7));

        // Same reaping the run loop does when a task finishes
        let finished = actor
            .active_requests
            .join_next()
            .await
            .expect("one task spawned")
            .expect("task completed");
        actor.untrack(finished);

        assert_eq!(finished, 7);
        assert!(actor.cancel_handles.is_empty());
        assert!(event_rx.recv().await.is_some());
    }

    #[tokio::test]
    async fn cancel_command_fires_and_removes_the_handle() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Vec::<Post>::new())
                    .set_delay(std::time::Duration::from_secs(30)),
            )
            .mount(&server)
            .await;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut actor = NetworkActor::new(&server.uri(), event_tx);

        actor.handle_command(NetworkCommand::FetchPosts { id: 1 });
        actor.handle_command(NetworkCommand::Cancel(1));
        assert!(actor.cancel_handles.is_empty());

        // The cancelled task settles as a rejection
        match event_rx.recv().await {
            Some(StoreEvent::Failed { request_id, .. }) => assert_eq!(request_id, 1),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn shutdown_requests_quit() {
        let (event_tx, _event_rx) = mpsc::unbounded_channel();
        let mut actor = NetworkActor::new("http://localhost:3001/", event_tx);
        assert!(actor.handle_command(NetworkCommand::Shutdown));
    }
}

//! Store actor - message loop processing caller actions and lifecycle events

use tokio::sync::mpsc;

use crate::messages::{NetworkCommand, OperationKind, StoreAction, StoreEvent, StoreSnapshot};
use crate::store::state::StoreState;

/// Store actor that processes caller actions and network lifecycle events
pub struct StoreActor {
    state: StoreState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    snapshot_tx: mpsc::UnboundedSender<StoreSnapshot>,
}

impl StoreActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        snapshot_tx: mpsc::UnboundedSender<StoreSnapshot>,
    ) -> Self {
        StoreActor {
            state: StoreState::new(),
            network_tx,
            snapshot_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut action_rx: mpsc::UnboundedReceiver<StoreAction>,
        mut event_rx: mpsc::UnboundedReceiver<StoreEvent>,
    ) {
        // Send initial snapshot
        let _ = self.snapshot_tx.send(self.state.to_snapshot());

        loop {
            tokio::select! {
                Some(action) = action_rx.recv() => {
                    if self.handle_action(action) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.snapshot_tx.send(self.state.to_snapshot());
                }
                Some(event) = event_rx.recv() => {
                    self.handle_event(event);
                    let _ = self.snapshot_tx.send(self.state.to_snapshot());
                }
                else => break,
            }
        }
    }

    /// Handle a caller action, returns true if shutdown was requested
    fn handle_action(&mut self, action: StoreAction) -> bool {
        match action {
            StoreAction::FetchPosts => {
                let cmd = self.state.fetch_posts();
                let _ = self.network_tx.send(cmd);
            }
            StoreAction::AddPost(post) => {
                let cmd = self.state.add_post(post);
                let _ = self.network_tx.send(cmd);
            }
            StoreAction::UpdatePost { post_id, post } => {
                let cmd = self.state.update_post(post_id, post);
                let _ = self.network_tx.send(cmd);
            }
            StoreAction::DeletePost { post_id } => {
                let cmd = self.state.delete_post(post_id);
                let _ = self.network_tx.send(cmd);
            }
            StoreAction::BeginEdit { post_id } => self.state.begin_edit(&post_id),
            StoreAction::CancelEdit => self.state.cancel_edit(),
            StoreAction::CancelPending => {
                if let Some(cmd) = self.state.cancel_pending() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            StoreAction::Shutdown => return true,
        }

        false
    }

    /// Apply a lifecycle event and run its side effects
    fn handle_event(&mut self, event: StoreEvent) {
        // A fulfilled delete resynchronizes with the server: the local
        // removal happens first, then a fresh list fetch is dispatched
        let refetch = matches!(
            &event,
            StoreEvent::Succeeded {
                kind: OperationKind::DeletePost,
                ..
            }
        );

        self.state.apply(event);

        if refetch {
            let cmd = self.state.fetch_posts();
            let _ = self.network_tx.send(cmd);
        }
    }
}

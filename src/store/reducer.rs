//! Reducer - maps lifecycle events to state transitions
//!
//! Dispatch methods mark an operation pending and hand back the network
//! command to execute it; `apply` folds the resulting lifecycle events
//! back into the state.

use crate::messages::network::{NetworkCommand, OperationKind, Outcome, RequestId, StoreEvent};
use crate::models::{NewPost, Post};
use crate::store::state::StoreState;

impl StoreState {
    // ========================
    // Dispatch
    // ========================

    /// Start the list operation: GET all posts, replacing the local list
    /// wholesale on fulfillment
    pub fn fetch_posts(&mut self) -> NetworkCommand {
        let id = self.start(OperationKind::FetchPosts);
        NetworkCommand::FetchPosts { id }
    }

    /// Start the add operation: POST new post content, appending the
    /// server's reply on fulfillment
    pub fn add_post(&mut self, post: NewPost) -> NetworkCommand {
        let id = self.start(OperationKind::AddPost);
        NetworkCommand::AddPost { id, post }
    }

    /// Start the update operation: PUT the full post to its path,
    /// replacing the matching local entry in place on fulfillment
    pub fn update_post(&mut self, post_id: String, post: Post) -> NetworkCommand {
        let id = self.start(OperationKind::UpdatePost);
        NetworkCommand::UpdatePost { id, post_id, post }
    }

    /// Start the delete operation: DELETE the post's path, removing the
    /// matching local entry on fulfillment
    pub fn delete_post(&mut self, post_id: String) -> NetworkCommand {
        let id = self.start(OperationKind::DeletePost);
        NetworkCommand::DeletePost { id, post_id }
    }

    /// Cancel the most recently started request, if one is still tracked
    pub fn cancel_pending(&self) -> Option<NetworkCommand> {
        self.current_request_id.map(NetworkCommand::Cancel)
    }

    fn start(&mut self, kind: OperationKind) -> RequestId {
        let id = self.next_id();
        self.apply(StoreEvent::Started {
            kind,
            request_id: id,
        });
        id
    }

    // ========================
    // Reduction
    // ========================

    /// Apply a lifecycle event to the state.
    ///
    /// The pending/resolved handling is uniform across operation kinds:
    /// `Started` sets `loading` and overwrites `current_request_id`;
    /// a resolution clears them only when its id still matches, so a
    /// stale resolution cannot clear the flag of a newer operation.
    ///
    /// Data mutations of a fulfilled operation apply regardless of the id
    /// match - only the loading flag is guarded. A failed operation leaves
    /// `post_list` and `editing` untouched.
    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Started { request_id, .. } => {
                self.loading = true;
                self.current_request_id = Some(request_id);
            }
            StoreEvent::Succeeded {
                request_id,
                outcome,
                ..
            } => {
                self.apply_outcome(outcome);
                self.resolve(request_id);
            }
            StoreEvent::Failed { request_id, .. } => {
                self.resolve(request_id);
            }
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PostList(posts) => {
                self.post_list = posts;
            }
            Outcome::Created(post) => {
                self.post_list.push(post);
            }
            Outcome::Updated(post) => {
                // First match only, order otherwise preserved
                if let Some(slot) = self.post_list.iter_mut().find(|p| p.id == post.id) {
                    *slot = post;
                }
                self.editing = None;
            }
            Outcome::Deleted(post_id) => {
                // Silent no-op when the id is absent from the local list
                if let Some(idx) = self.post_list.iter().position(|p| p.id == post_id) {
                    self.post_list.remove(idx);
                }
            }
        }
    }

    /// Clear the loading flag only for the operation that set it
    fn resolve(&mut self, request_id: RequestId) {
        if self.loading && self.current_request_id == Some(request_id) {
            self.loading = false;
            self.current_request_id = None;
        }
    }
}

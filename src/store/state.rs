//! Store state - pure data structure with no I/O logic

use crate::messages::network::RequestId;
use crate::messages::StoreSnapshot;
use crate::models::Post;

/// Post store state - pure data, no I/O
#[derive(Debug)]
pub struct StoreState {
    /// Cached copy of the server's post list, in the order the list
    /// endpoint returned it
    pub post_list: Vec<Post>,

    /// Post currently selected for editing. Set by `begin_edit`, cleared
    /// by `cancel_edit` or a fulfilled update.
    pub editing: Option<Post>,

    /// True while the most recently started operation is unresolved
    pub loading: bool,

    /// Identifier of the operation that last set `loading`. Resolutions
    /// carrying any other id must not touch `loading`.
    pub current_request_id: Option<RequestId>,

    next_request_id: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreState {
    pub fn new() -> Self {
        StoreState {
            post_list: Vec::new(),
            editing: None,
            loading: false,
            current_request_id: None,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Select the post matching `post_id` for editing, or clear the
    /// selection when no post matches
    pub fn begin_edit(&mut self, post_id: &str) {
        self.editing = self.post_list.iter().find(|p| p.id == post_id).cloned();
    }

    /// Clear the editing selection unconditionally
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Convert state to a snapshot for the caller
    pub fn to_snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            post_list: self.post_list.clone(),
            editing: self.editing.clone(),
            loading: self.loading,
            current_request_id: self.current_request_id,
        }
    }
}

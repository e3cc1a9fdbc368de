//! Store actions - messages from the caller to the store layer

use crate::models::{NewPost, Post};

/// Actions a caller dispatches against the post store.
///
/// The four CRUD variants start asynchronous operations; `BeginEdit` and
/// `CancelEdit` mutate the editing selection synchronously.
#[derive(Debug, Clone)]
pub enum StoreAction {
    // Asynchronous CRUD operations
    FetchPosts,
    AddPost(NewPost),
    UpdatePost { post_id: String, post: Post },
    DeletePost { post_id: String },

    // Editing selection
    BeginEdit { post_id: String },
    CancelEdit,

    /// Cancel the most recently started request, if one is still tracked.
    /// Cancelling is always the caller's responsibility - starting a new
    /// operation never cancels a prior one.
    CancelPending,

    /// Shut down the store and network actors
    Shutdown,
}

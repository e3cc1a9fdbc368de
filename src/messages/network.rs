//! Network messages - communication between store and network layers

use crate::models::{NewPost, Post};

/// Identifier assigned to each asynchronous operation at dispatch time
pub type RequestId = u64;

/// Which asynchronous operation a command or lifecycle event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    FetchPosts,
    AddPost,
    UpdatePost,
    DeletePost,
}

/// Commands sent from the store layer to the network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// GET the full post list
    FetchPosts { id: RequestId },
    /// POST a new post (server assigns the id)
    AddPost { id: RequestId, post: NewPost },
    /// PUT the full post content to the post's path
    UpdatePost {
        id: RequestId,
        post_id: String,
        post: Post,
    },
    /// DELETE the post at the post's path
    DeletePost { id: RequestId, post_id: String },
    /// Cancel an in-flight request
    Cancel(RequestId),
    /// Shutdown the network actor
    Shutdown,
}

/// Payload carried by a fulfilled operation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Full post list returned by the server
    PostList(Vec<Post>),
    /// Newly created post, with its server-assigned id
    Created(Post),
    /// Updated post as stored by the server
    Updated(Post),
    /// Id of the deleted post
    Deleted(String),
}

/// Lifecycle events applied to the store, one per operation phase.
///
/// Every asynchronous operation moves through `Started` and then exactly
/// one of `Succeeded` or `Failed`. Cancellation surfaces as `Failed`.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// The operation entered its pending phase
    Started {
        kind: OperationKind,
        request_id: RequestId,
    },
    /// The operation fulfilled with a payload
    Succeeded {
        kind: OperationKind,
        request_id: RequestId,
        outcome: Outcome,
    },
    /// The operation rejected - network failure, timeout, non-2xx response
    /// or cancellation, all surfaced identically
    Failed {
        kind: OperationKind,
        request_id: RequestId,
        error: String,
    },
}

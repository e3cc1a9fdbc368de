//! # Blogstore
//!
//! A headless store for a blog's post list: asynchronous CRUD over a REST
//! API with request-lifecycle tracking.
//!
//! ## Features
//! - Fetch, add, update, delete posts against a REST backend
//! - Coarse loading flag guarded against stale resolutions
//! - Editing selection (begin/cancel)
//! - Per-request cooperative cancellation
//!
//! ## Architecture
//! Actor-based with channels:
//! - Caller (UI layer, excluded) - dispatches `StoreAction`s, consumes `StoreSnapshot`s
//! - Store layer (state machine + reducer)
//! - Network layer (Tokio + reqwest)

pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod store;

// Re-export commonly used types
pub use messages::{
    NetworkCommand, OperationKind, Outcome, RequestId, StoreAction, StoreEvent, StoreSnapshot,
};
pub use models::{NewPost, Post};
pub use network::{ApiClient, NetworkActor};
pub use store::{StoreActor, StoreState};

//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the caller, store, and
//! network layers.

pub mod actions;
pub mod network;
pub mod snapshot;

pub use actions::StoreAction;
pub use network::{NetworkCommand, OperationKind, Outcome, RequestId, StoreEvent};
pub use snapshot::StoreSnapshot;

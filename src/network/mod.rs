//! Network layer - blog API request execution
//!
//! The network actor receives CRUD commands and sends back lifecycle events.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::ApiClient;

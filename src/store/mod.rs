//! Store layer - central state management and event reduction
//!
//! The store actor receives caller actions and network lifecycle events,
//! updates state through the reducer, and emits network commands and
//! state snapshots.

pub mod actor;
pub mod reducer;
pub mod state;

pub use actor::StoreActor;
pub use state::StoreState;

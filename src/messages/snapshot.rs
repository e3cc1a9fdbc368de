//! Store snapshot - data sent from the store layer to the caller after each event

use crate::messages::network::RequestId;
use crate::models::Post;

/// Complete view of the store a caller needs to render.
///
/// Emitted after every applied action or lifecycle event.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    /// Cached copy of the server's post list, in server order
    pub post_list: Vec<Post>,
    /// Post currently selected for editing, if any
    pub editing: Option<Post>,
    /// True while the most recently started operation is unresolved
    pub loading: bool,
    /// Identifier of the operation that last set `loading`
    pub current_request_id: Option<RequestId>,
}

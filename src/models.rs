use serde::{Deserialize, Serialize};

/// A blog post as stored by the server.
///
/// The server owns these records; the store holds a cached copy. Field
/// names follow the API's camelCase wire format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "publishDate")]
    pub publish_date: String,
    pub published: bool,
}

/// Post content without a server-assigned id - the create payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    #[serde(rename = "publishDate")]
    pub publish_date: String,
    pub published: bool,
}

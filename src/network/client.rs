//! HTTP client wrapper - executes blog API requests and maps outcomes to lifecycle events

use std::time::Duration;

use tokio::sync::oneshot;

use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::messages::network::{OperationKind, Outcome, RequestId, StoreEvent};
use crate::models::{NewPost, Post};

/// Pre-configured HTTP client with a fixed base URL, shared by every call.
///
/// Constructed once per process. All calls take paths relative to the base
/// URL; there are no retries, interceptors or auth headers.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            client: create_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a relative path against the base URL
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path))
    }
}

/// Create an HTTP client with default configuration
fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Fetch the full post list
pub async fn fetch_posts(
    client: &ApiClient,
    request_id: RequestId,
    cancel_rx: oneshot::Receiver<()>,
) -> StoreEvent {
    let kind = OperationKind::FetchPosts;
    match send(client.get("posts"), cancel_rx).await {
        Ok(resp) => match resp.json::<Vec<Post>>().await {
            Ok(posts) => StoreEvent::Succeeded {
                kind,
                request_id,
                outcome: Outcome::PostList(posts),
            },
            Err(e) => failed(kind, request_id, format!("Error reading body: {}", e)),
        },
        Err(message) => failed(kind, request_id, message),
    }
}

/// Create a new post; the server assigns the id
pub async fn create_post(
    client: &ApiClient,
    request_id: RequestId,
    post: NewPost,
    cancel_rx: oneshot::Receiver<()>,
) -> StoreEvent {
    let kind = OperationKind::AddPost;
    match send(client.post("posts").json(&post), cancel_rx).await {
        Ok(resp) => match resp.json::<Post>().await {
            Ok(created) => StoreEvent::Succeeded {
                kind,
                request_id,
                outcome: Outcome::Created(created),
            },
            Err(e) => failed(kind, request_id, format!("Error reading body: {}", e)),
        },
        Err(message) => failed(kind, request_id, message),
    }
}

/// Replace a post's content on the server
pub async fn update_post(
    client: &ApiClient,
    request_id: RequestId,
    post_id: &str,
    post: Post,
    cancel_rx: oneshot::Receiver<()>,
) -> StoreEvent {
    let kind = OperationKind::UpdatePost;
    let path = format!("posts/{}", post_id);
    match send(client.put(&path).json(&post), cancel_rx).await {
        Ok(resp) => match resp.json::<Post>().await {
            Ok(updated) => StoreEvent::Succeeded {
                kind,
                request_id,
                outcome: Outcome::Updated(updated),
            },
            Err(e) => failed(kind, request_id, format!("Error reading body: {}", e)),
        },
        Err(message) => failed(kind, request_id, message),
    }
}

/// Delete a post. The response body is ignored; the outcome carries the
/// id that was deleted so the store can drop its local copy.
pub async fn delete_post(
    client: &ApiClient,
    request_id: RequestId,
    post_id: &str,
    cancel_rx: oneshot::Receiver<()>,
) -> StoreEvent {
    let kind = OperationKind::DeletePost;
    let path = format!("posts/{}", post_id);
    match send(client.delete(&path), cancel_rx).await {
        Ok(_) => StoreEvent::Succeeded {
            kind,
            request_id,
            outcome: Outcome::Deleted(post_id.to_string()),
        },
        Err(message) => failed(kind, request_id, message),
    }
}

fn failed(kind: OperationKind, request_id: RequestId, error: String) -> StoreEvent {
    StoreEvent::Failed {
        kind,
        request_id,
        error,
    }
}

/// Execute a request, racing it against the caller's cancellation signal.
///
/// Cancellation surfaces as an error string so the operation rejects like
/// any other failure. Non-2xx statuses, timeouts and connection failures
/// are folded into the same error channel.
async fn send(
    req_builder: reqwest::RequestBuilder,
    mut cancel_rx: oneshot::Receiver<()>,
) -> Result<reqwest::Response, String> {
    tokio::select! {
        biased;

        _ = &mut cancel_rx => Err(String::from("Request cancelled")),

        result = req_builder.send() => match result {
            Ok(resp) => {
                let status = resp.status();
                if status.is_success() {
                    Ok(resp)
                } else {
                    Err(format!("HTTP {}", status.as_u16()))
                }
            }
            Err(e) => {
                let msg = if e.is_timeout() {
                    format!("Request timed out ({}s)", REQUEST_TIMEOUT_SECS)
                } else if e.is_connect() {
                    format!("Connection failed: {}", e)
                } else {
                    format!("Request failed: {}", e)
                };
                Err(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_post(id: &str, title: &str) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            publish_date: String::new(),
            published: false,
        }
    }

    #[test]
    fn relative_paths_resolve_against_base_url() {
        let client = ApiClient::new("http://localhost:3001/");
        assert_eq!(client.url("posts"), "http://localhost:3001/posts");
        assert_eq!(client.url("/posts/2"), "http://localhost:3001/posts/2");
    }

    #[tokio::test]
    async fn fetch_posts_returns_post_list() {
        let server = MockServer::start().await;
        let posts = vec![sample_post("1", "one"), sample_post("2", "two")];
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&posts))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let (_cancel_tx, cancel_rx) = oneshot::channel();
        let event = fetch_posts(&client, 1, cancel_rx).await;

        match event {
            StoreEvent::Succeeded {
                outcome: Outcome::PostList(got),
                ..
            } => assert_eq!(got, posts),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_post_sends_body_without_id() {
        let server = MockServer::start().await;
        let input = NewPost {
            title: "x".to_string(),
            ..NewPost::default()
        };
        let created = sample_post("9", "x");
        Mock::given(method("POST"))
            .and(path("/posts"))
            .and(body_json(&input))
            .respond_with(ResponseTemplate::new(201).set_body_json(&created))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let (_cancel_tx, cancel_rx) = oneshot::channel();
        let event = create_post(&client, 1, input, cancel_rx).await;

        match event {
            StoreEvent::Succeeded {
                outcome: Outcome::Created(got),
                ..
            } => assert_eq!(got.id, "9"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_post_puts_to_the_post_path() {
        let server = MockServer::start().await;
        let updated = sample_post("2", "y");
        Mock::given(method("PUT"))
            .and(path("/posts/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&updated))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let (_cancel_tx, cancel_rx) = oneshot::channel();
        let event = update_post(&client, 1, "2", updated.clone(), cancel_rx).await;

        match event {
            StoreEvent::Succeeded {
                outcome: Outcome::Updated(got),
                ..
            } => assert_eq!(got, updated),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_post_carries_the_deleted_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/posts/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let (_cancel_tx, cancel_rx) = oneshot::channel();
        let event = delete_post(&client, 1, "2", cancel_rx).await;

        match event {
            StoreEvent::Succeeded {
                outcome: Outcome::Deleted(id),
                ..
            } => assert_eq!(id, "2"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_2xx_response_rejects_the_operation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let (_cancel_tx, cancel_rx) = oneshot::channel();
        let event = fetch_posts(&client, 1, cancel_rx).await;

        match event {
            StoreEvent::Failed { error, .. } => assert_eq!(error, "HTTP 500"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn cancellation_rejects_the_operation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Vec::<Post>::new())
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let (cancel_tx, cancel_rx) = oneshot::channel();
        cancel_tx.send(()).unwrap();
        let event = fetch_posts(&client, 1, cancel_rx).await;

        match event {
            StoreEvent::Failed { error, .. } => assert_eq!(error, "Request cancelled"),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}

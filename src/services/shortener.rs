use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Message shown to the user for every failed shorten attempt
pub const GENERIC_ERROR: &str = "Failed to shorten URL";

/// JSON body posted to the shortener endpoint
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub url: String,
    /// Always sent, empty when the user left the alias blank
    pub custom_word: String,
}

/// Response fields that may carry the link, in priority order.
/// Servers disagree on the name, so all three are accepted.
pub const LINK_FIELDS: [&str; 3] = ["shortenedUrl", "url", "shortUrl"];

/// Pick the link to display from a response body.
///
/// Each field is read on its own: a non-string or empty value is skipped
/// without affecting the others.
pub fn extract_link(body: &Value) -> Option<String> {
    LINK_FIELDS
        .iter()
        .filter_map(|field| body.get(*field).and_then(Value::as_str))
        .find(|link| !link.is_empty())
        .map(str::to_string)
}

/// Raw form input as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortenForm {
    pub url: String,
    pub custom_word: String,
}

impl ShortenForm {
    pub fn new(url: impl Into<String>, custom_word: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            custom_word: custom_word.into(),
        }
    }

    /// Build the request body, or `None` when there is nothing to shorten
    pub fn to_request(&self) -> Option<ShortenRequest> {
        let url = self.url.trim();
        if url.is_empty() {
            return None;
        }

        Some(ShortenRequest {
            url: url.to_string(),
            custom_word: self.custom_word.clone(),
        })
    }
}

/// Error type for shorten operations
#[derive(Debug, Clone, PartialEq)]
pub enum ShortenError {
    Encode(String),
    Network(String),
    Status(u16),
    Parse(String),
    MissingLink,
}

impl std::fmt::Display for ShortenError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ShortenError::Encode(e) => write!(f, "Failed to encode request: {}", e),
            ShortenError::Network(e) => write!(f, "Request failed: {}", e),
            ShortenError::Status(code) => write!(f, "Shortener returned HTTP {}", code),
            ShortenError::Parse(e) => write!(f, "Failed to parse response: {}", e),
            ShortenError::MissingLink => write!(f, "Response did not contain a shortened URL"),
        }
    }
}

impl std::error::Error for ShortenError {}

/// Status and body of an HTTP reply
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends the JSON POST. Browser builds use gloo-net, native builds use reqwest.
#[async_trait(?Send)]
pub trait ShortenTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<HttpReply, ShortenError>;
}

/// Transport backed by the browser Fetch API
#[cfg(target_arch = "wasm32")]
pub struct BrowserTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl ShortenTransport for BrowserTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<HttpReply, ShortenError> {
        use gloo_net::http::Request;

        let response = Request::post(endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ShortenError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ShortenError::Network(e.to_string()))?;

        let status = response.status();
        // Error bodies are never shown, so an unreadable one is not fatal
        let body = response.text().await.unwrap_or_default();

        Ok(HttpReply { status, body })
    }
}

/// Transport backed by reqwest
#[cfg(not(target_arch = "wasm32"))]
pub struct NativeTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl NativeTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl ShortenTransport for NativeTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<HttpReply, ShortenError> {
        let response = self
            .client
            .post(endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ShortenError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(HttpReply { status, body })
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_transport() -> BrowserTransport {
    BrowserTransport
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_transport() -> NativeTransport {
    NativeTransport::new()
}

/// POST the request to `endpoint` and return the shortened link
pub async fn shorten<T>(
    transport: &T,
    endpoint: &str,
    request: &ShortenRequest,
) -> Result<String, ShortenError>
where
    T: ShortenTransport + ?Sized,
{
    let body = serde_json::to_string(request)
        .map_err(|e| ShortenError::Encode(e.to_string()))?;

    log::info!("Shortening {} via {}", request.url, endpoint);

    let reply = transport.post_json(endpoint, body).await?;
    if !reply.is_success() {
        return Err(ShortenError::Status(reply.status));
    }

    let response: Value = serde_json::from_str(&reply.body)
        .map_err(|e| ShortenError::Parse(e.to_string()))?;

    extract_link(&response).ok_or(ShortenError::MissingLink)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod native_tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Read one HTTP request: headers plus `Content-Length` bytes of body
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        if name.trim().eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serve a single canned response on a local port.
    /// Returns the endpoint and a handle yielding the raw request received.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (format!("http://{}", addr), handle)
    }

    fn request() -> ShortenRequest {
        ShortenRequest {
            url: "https://example.com/very-long-url".to_string(),
            custom_word: "mylink".to_string(),
        }
    }

    #[tokio::test]
    async fn test_native_post_success() {
        let (endpoint, server) =
            serve_once("200 OK", r#"{"shortenedUrl":"http://localhost:3000/mylink"}"#).await;

        let link = shorten(&NativeTransport::new(), &endpoint, &request()).await;
        assert_eq!(link, Ok("http://localhost:3000/mylink".to_string()));

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST / HTTP/1.1\r\n"), "unexpected request: {}", raw);
        assert!(raw.to_lowercase().contains("content-type: application/json"));
        assert!(raw.ends_with(r#"{"url":"https://example.com/very-long-url","customWord":"mylink"}"#));
    }

    #[tokio::test]
    async fn test_native_post_non_success_status() {
        let (endpoint, server) = serve_once("400 Bad Request", r#"{"error":"URL custom short is already in use"}"#).await;

        let reply = NativeTransport::new()
            .post_json(&endpoint, "{}".to_string())
            .await
            .unwrap();
        assert_eq!(reply.status, 400);
        assert!(!reply.is_success());
        assert_eq!(reply.body, r#"{"error":"URL custom short is already in use"}"#);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_native_shorten_maps_status_to_error() {
        let (endpoint, server) = serve_once("500 Internal Server Error", "{}").await;

        let result = shorten(&NativeTransport::new(), &endpoint, &request()).await;
        assert_eq!(result, Err(ShortenError::Status(500)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_native_connection_refused() {
        // Grab a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = NativeTransport::new()
            .post_json(&format!("http://{}", addr), "{}".to_string())
            .await;
        assert!(matches!(result, Err(ShortenError::Network(_))), "got {:?}", result);
    }
}

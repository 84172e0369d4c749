//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! On WASM, `reqwest::Response` is not `Send` because it wraps JS types, so:
//! - On **native**: use reqwest directly (futures are Send)
//! - On **WASM**: run the request on the JS thread with
//!   `wasm_bindgen_futures::spawn_local` and send the result back through a
//!   `flume` channel
//!
//! This lets async commands return `Pin<Box<dyn Future<Output = ()> + Send>>`
//! on every target.

use std::collections::HashMap;

use thiserror::Error;

/// A simplified HTTP response that contains only Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

/// A GET request under construction.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(self.url, self.headers).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.send_wasm().await
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_wasm(self) -> HttpResult<Response> {
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
        let Self { url, headers } = self;

        wasm_bindgen_futures::spawn_local(async move {
            let result = execute(url, headers).await;
            // Receiver gone means nobody is waiting for the answer anymore.
            let _ = tx.send_async(result).await;
        });

        rx.recv_async()
            .await
            .map_err(|_| HttpError::new("Request cancelled"))?
    }
}

async fn execute(url: String, headers: HashMap<String, String>) -> HttpResult<Response> {
    let client = reqwest::Client::new();
    let mut request = client.get(&url);
    for (name, value) in &headers {
        request = request.header(name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;

    let status = response.status().as_u16();

    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response { status, body })
}

/// HTTP client with Send-safe futures on all platforms.
///
/// ```ignore
/// let response = Client::get("https://example.com/members.json")
///     .header("accept", "application/json")
///     .send()
///     .await?;
/// ```
pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }
}

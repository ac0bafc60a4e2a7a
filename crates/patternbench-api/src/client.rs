// Outbound self-call transport
//
// One client per benchmark run: the pool keeps connections alive across
// iterations, so per-call cost reflects a request on a warm pool rather than
// a TCP handshake every time.

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;

use patternbench_core::MicroCaller;

const FAIL: &str = "fail";

/// Blocking HTTP GET client behind the [`MicroCaller`] seam
pub struct HttpMicroCaller {
    client: Option<reqwest::blocking::Client>,
}

impl HttpMicroCaller {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .redirect(Policy::none())
            .build();
        match client {
            Ok(client) => Self {
                client: Some(client),
            },
            Err(e) => {
                tracing::error!("failed to build self-call client: {e}");
                Self { client: None }
            }
        }
    }
}

impl Default for HttpMicroCaller {
    fn default() -> Self {
        Self::new()
    }
}

impl MicroCaller for HttpMicroCaller {
    fn call(&self, url: &str) -> String {
        let Some(client) = &self.client else {
            return FAIL.to_string();
        };

        let result = client
            .get(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("charset", "utf-8")
            .send()
            .and_then(|response| response.text());

        match result {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("self-call to {url} failed: {e}");
                FAIL.to_string()
            }
        }
    }
}

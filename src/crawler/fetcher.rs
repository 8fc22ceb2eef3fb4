//! HTTP fetcher implementation
//!
//! One blocking GET per address, no retry. Transport failures of any kind
//! fold into an absent body; the caller treats that as a hard failure for
//! the address for the remainder of the run.

use reqwest::Client;

/// Result of one fetch attempt
///
/// Transient value consumed immediately by the crawl loop; never persisted.
#[derive(Debug)]
pub struct FetchResult {
    /// The response body, or `None` on any network-level failure
    pub body: Option<String>,

    /// Raw Content-Type header value, if the response carried one
    pub content_type: Option<String>,
}

/// Builds the HTTP client used for all fetches
///
/// Library defaults throughout: default redirect policy, default timeouts,
/// no custom headers, no cookie store.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().build()
}

/// Fetches a single address
///
/// Any returned body counts as success; status codes are not inspected.
/// Errors (DNS, refused connection, timeout, unreadable body) are logged
/// and collapse to `{ body: None, content_type: None }`.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The address to fetch
///
/// # Returns
///
/// A FetchResult with the body and content-type hint, or absent on failure
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let content_type = response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string());

            match response.text().await {
                Ok(body) => FetchResult {
                    body: Some(body),
                    content_type,
                },
                Err(e) => {
                    tracing::warn!("Failed to read body from {}: {}", url, e);
                    FetchResult {
                        body: None,
                        content_type: None,
                    }
                }
            }
        }
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}", url, e);
            FetchResult {
                body: None,
                content_type: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_unreachable_address() {
        let client = build_http_client().unwrap();

        // Port 0 is never connectable
        let result = fetch_url(&client, "http://127.0.0.1:0/").await;
        assert!(result.body.is_none());
        assert!(result.content_type.is_none());
    }

    #[tokio::test]
    async fn test_fetch_unsupported_scheme() {
        let client = build_http_client().unwrap();

        let result = fetch_url(&client, "mailto:someone@example.com").await;
        assert!(result.body.is_none());
        assert!(result.content_type.is_none());
    }
}

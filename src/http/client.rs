//! Low-level HTTP client — `ClobHttp`.
//!
//! One method per CLOB endpoint. Returns wire types (conversion to domain
//! types happens in the sub-clients). Internal to the SDK — `ClobClient`
//! wraps this.

use crate::domain::orderbook::wire::{OrderBookSummary, TickSizeResponse};
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the CLOB REST API.
#[derive(Clone)]
pub struct ClobHttp {
    base_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl ClobHttp {
    pub fn new(base_url: &str, retry: RetryPolicy) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(10))
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Orderbooks ───────────────────────────────────────────────────────

    pub async fn get_book(&self, token_id: &str) -> Result<OrderBookSummary, HttpError> {
        let url = format!(
            "{}/book?token_id={}",
            self.base_url,
            urlencoding::encode(token_id)
        );
        self.get(&url).await
    }

    pub async fn get_tick_size(&self, token_id: &str) -> Result<TickSizeResponse, HttpError> {
        let url = format!(
            "{}/tick-size?token_id={}",
            self.base_url,
            urlencoding::encode(token_id)
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let Some(config) = self.retry.config() else {
            return self.do_get(url).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            let e = match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };

            let (should_retry, retry_after) = match &e {
                HttpError::ServerError { status, .. } => {
                    (config.is_retryable_status(*status), None)
                }
                HttpError::RateLimited { retry_after_ms } => (
                    config.is_retryable_status(429),
                    retry_after_ms.map(Duration::from_millis),
                ),
                HttpError::Timeout => (true, None),
                HttpError::Reqwest(re) => {
                    #[cfg(not(target_arch = "wasm32"))]
                    let retryable = re.is_connect() || re.is_timeout();
                    #[cfg(target_arch = "wasm32")]
                    let retryable = re.is_timeout();
                    (retryable, None)
                }
                _ => (false, None),
            };

            if !should_retry {
                return Err(e);
            }

            if attempt < config.max_retries {
                let delay = retry_after
                    .map(|d| d.min(config.max_delay))
                    .unwrap_or_else(|| config.delay_for_attempt(attempt));
                tracing::debug!(
                    attempt = attempt + 1,
                    max = config.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying request to {}",
                    url
                );
                futures_timer::Delay::new(delay).await;
            }
            last_error = Some(e);
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs.saturating_mul(1000));
        let body_text = resp.text().await.unwrap_or_default();

        Err(classify_status(status_code, body_text, retry_after_ms))
    }
}

/// Map a non-success status to an `HttpError`.
pub(crate) fn classify_status(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        404 => HttpError::NotFound(body),
        408 => HttpError::Timeout,
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::retry::RetryConfig;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Instant;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const BOOK_JSON: &str =
        r#"{"asset_id":"tok","bids":[],"asks":[{"price":"0.4","size":"10"}]}"#;

    fn response(status: &str, extra_headers: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\n\
             content-type: application/json\r\n\
             content-length: {}\r\n\
             connection: close\r\n\
             {extra_headers}\r\n{body}",
            body.len()
        )
    }

    /// Serve `responses` in order, one per connection; the last one repeats.
    async fn serve(responses: Vec<String>) -> (String, Arc<AtomicU32>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicU32::new(0));
        let hits_clone = Arc::clone(&hits);

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let n = hits_clone.fetch_add(1, Ordering::SeqCst) as usize;
                let reply = responses[n.min(responses.len() - 1)].clone();
                tokio::spawn(async move {
                    let mut buf = [0u8; 4096];
                    let _ = socket.read(&mut buf).await;
                    let _ = socket.write_all(reply.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        (format!("http://{addr}"), hits)
    }

    fn fast_retries(max_retries: u32) -> RetryPolicy {
        RetryPolicy::Custom(
            RetryConfig {
                initial_delay: Duration::from_millis(10),
                max_delay: Duration::from_millis(50),
                ..RetryConfig::idempotent()
            }
            .with_max_retries(max_retries)
            .without_jitter(),
        )
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = ClobHttp::new("https://clob.example.com/", RetryPolicy::None).unwrap();
        assert_eq!(http.base_url(), "https://clob.example.com");
    }

    #[test]
    fn test_classify_status() {
        assert!(matches!(
            classify_status(404, "no book".into(), None),
            HttpError::NotFound(b) if b == "no book"
        ));
        assert!(matches!(classify_status(408, String::new(), None), HttpError::Timeout));
        assert!(matches!(
            classify_status(429, String::new(), Some(2000)),
            HttpError::RateLimited { retry_after_ms: Some(2000) }
        ));
        assert!(matches!(
            classify_status(422, "bad token".into(), None),
            HttpError::BadRequest(_)
        ));
        assert!(matches!(
            classify_status(503, String::new(), None),
            HttpError::ServerError { status: 503, .. }
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_fails_without_retry() {
        let http = ClobHttp::new("http://127.0.0.1:1", RetryPolicy::None).unwrap();
        let result = http.get_book("123").await;
        assert!(matches!(result, Err(HttpError::Reqwest(_))));
    }

    #[tokio::test]
    async fn test_retries_503_then_succeeds() {
        let (url, hits) = serve(vec![
            response("503 Service Unavailable", "", "down"),
            response("200 OK", "", BOOK_JSON),
        ])
        .await;
        let http = ClobHttp::new(&url, fast_retries(2)).unwrap();

        let summary = http.get_book("tok").await.unwrap();
        assert_eq!(summary.asset_id.unwrap().as_str(), "tok");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_repeated_503_exhausts_retries() {
        let (url, hits) = serve(vec![response("503 Service Unavailable", "", "down")]).await;
        let http = ClobHttp::new(&url, fast_retries(2)).unwrap();

        let result = http.get_book("tok").await;
        assert!(matches!(
            result,
            Err(HttpError::MaxRetriesExceeded { attempts: 3, ref last_error })
                if last_error.contains("503")
        ));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_status_returns_immediately() {
        let (url, hits) = serve(vec![response("404 Not Found", "", "no book")]).await;
        let http = ClobHttp::new(&url, fast_retries(2)).unwrap();

        let result = http.get_book("tok").await;
        assert!(matches!(result, Err(HttpError::NotFound(_))));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_after_not_awaited_without_retries_left() {
        let (url, hits) = serve(vec![response(
            "429 Too Many Requests",
            "retry-after: 3\r\n",
            "",
        )])
        .await;
        let http = ClobHttp::new(&url, fast_retries(0)).unwrap();

        let started = Instant::now();
        let result = http.get_book("tok").await;
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(matches!(
            result,
            Err(HttpError::MaxRetriesExceeded { attempts: 1, .. })
        ));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_after_capped_by_max_delay() {
        let (url, hits) = serve(vec![
            response("429 Too Many Requests", "retry-after: 3600\r\n", ""),
            response("200 OK", "", BOOK_JSON),
        ])
        .await;
        let http = ClobHttp::new(&url, fast_retries(1)).unwrap();

        let started = Instant::now();
        let summary = http.get_book("tok").await.unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));
        assert_eq!(summary.asset_id.unwrap().as_str(), "tok");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_rate_limit_without_429_retry_returns_immediately() {
        let (url, hits) = serve(vec![response(
            "429 Too Many Requests",
            "retry-after: 3\r\n",
            "",
        )])
        .await;
        let policy = RetryPolicy::Custom(RetryConfig {
            retryable_statuses: vec![503],
            ..RetryConfig::idempotent()
        });
        let http = ClobHttp::new(&url, policy).unwrap();

        let started = Instant::now();
        let result = http.get_book("tok").await;
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(matches!(
            result,
            Err(HttpError::RateLimited { retry_after_ms: Some(3000) })
        ));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}

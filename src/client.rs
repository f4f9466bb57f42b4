//! Dashboard HTTP Client
//!
//! Fetches the two dashboard endpoints. Both requests are issued together
//! and each outcome is applied to the view state independently; a failure
//! is logged and leaves that part of the dashboard at its current value.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header, Client};

use crate::error::{DashboardError, DashboardResult};
use crate::model::{decode_list, decode_summary, ListRecord, SummaryPatch};
use crate::view::DashboardState;

/// A source of dashboard data
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Fetch the summary counters
    async fn fetch_summary(&self) -> DashboardResult<SummaryPatch>;

    /// Fetch the full leaderboard, indexed in fetch order
    async fn fetch_list(&self) -> DashboardResult<Vec<ListRecord>>;
}

/// Configuration for the dashboard client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host without trailing slash (e.g., "https://asterixlabs.top")
    pub base_url: String,
    pub summary_path: String,
    pub list_path: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://asterixlabs.top".to_string(),
            summary_path: "/dashboard/summary".to_string(),
            list_path: "/dashboard/list".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

/// reqwest-backed dashboard client
pub struct DashboardClient {
    client: Client,
    config: ClientConfig,
}

impl DashboardClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> DashboardResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| DashboardError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn summary_url(&self) -> String {
        format!("{}{}", self.config.base_url, self.config.summary_path)
    }

    pub fn list_url(&self) -> String {
        format!("{}{}", self.config.base_url, self.config.list_path)
    }

    /// GET a JSON endpoint and return the raw body
    async fn get_body(&self, url: &str) -> DashboardResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| map_request_error(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| map_request_error(e, url))?;

        tracing::debug!(url = %url, bytes = body.len(), "Fetched dashboard endpoint");
        Ok(body.to_vec())
    }
}

#[async_trait]
impl DashboardSource for DashboardClient {
    async fn fetch_summary(&self) -> DashboardResult<SummaryPatch> {
        let body = self.get_body(&self.summary_url()).await?;
        decode_summary(&body)
    }

    async fn fetch_list(&self) -> DashboardResult<Vec<ListRecord>> {
        let body = self.get_body(&self.list_url()).await?;
        decode_list(&body)
    }
}

fn map_request_error(e: reqwest::Error, url: &str) -> DashboardError {
    if e.is_timeout() {
        DashboardError::Timeout
    } else if e.is_connect() {
        DashboardError::Unavailable(url.to_string())
    } else {
        DashboardError::Request(e)
    }
}

/// Outcome of one dashboard load
#[derive(Debug)]
pub struct DashboardLoad {
    pub summary: DashboardResult<SummaryPatch>,
    pub list: DashboardResult<Vec<ListRecord>>,
    pub fetched_at: DateTime<Utc>,
}

impl DashboardLoad {
    /// Apply both outcomes to the view state
    pub fn apply(self, state: &mut DashboardState) {
        state.apply_summary(self.summary);
        state.apply_list(self.list);
    }
}

/// Fetch summary and list concurrently. Never fails as a whole; each
/// endpoint's error is logged and returned in its slot.
pub async fn load_dashboard<S>(source: &S) -> DashboardLoad
where
    S: DashboardSource + ?Sized,
{
    let (summary, list) = tokio::join!(source.fetch_summary(), source.fetch_list());

    match &summary {
        Ok(_) => tracing::debug!("Summary loaded"),
        Err(e) => tracing::warn!(endpoint = "summary", error = %e, "Failed to load summary"),
    }
    match &list {
        Ok(records) => tracing::info!(records = records.len(), "Leaderboard loaded"),
        Err(e) => tracing::warn!(endpoint = "list", error = %e, "Failed to load leaderboard"),
    }

    DashboardLoad {
        summary,
        list,
        fetched_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SummaryRecord;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::Barrier;

    /// Both fetches wait on a shared barrier, so they only finish if they
    /// run at the same time.
    struct BarrierSource {
        barrier: Arc<Barrier>,
        fail_summary: bool,
    }

    #[async_trait]
    impl DashboardSource for BarrierSource {
        async fn fetch_summary(&self) -> DashboardResult<SummaryPatch> {
            self.barrier.wait().await;
            if self.fail_summary {
                return Err(DashboardError::Unavailable("summary".to_string()));
            }
            Ok(SummaryPatch {
                total_power: Some(7.0),
                ..Default::default()
            })
        }

        async fn fetch_list(&self) -> DashboardResult<Vec<ListRecord>> {
            self.barrier.wait().await;
            Ok(crate::model::assign_indices(vec![
                ListRecord::new("0xaaa", "1"),
                ListRecord::new("0xbbb", "2"),
            ]))
        }
    }

    /// Serve a single canned HTTP response per connection
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> DashboardClient {
        DashboardClient::new(ClientConfig {
            base_url,
            request_timeout_ms: 5_000,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_urls() {
        let client = DashboardClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.summary_url(), "https://asterixlabs.top/dashboard/summary");
        assert_eq!(client.list_url(), "https://asterixlabs.top/dashboard/list");
    }

    #[tokio::test]
    async fn test_fetches_run_concurrently() {
        let source = BarrierSource {
            barrier: Arc::new(Barrier::new(2)),
            fail_summary: false,
        };

        let load = tokio::time::timeout(Duration::from_secs(5), load_dashboard(&source))
            .await
            .expect("fetches did not run concurrently");

        let mut state = DashboardState::new();
        load.apply(&mut state);
        assert_eq!(state.summary().total_power, 7.0);
        assert_eq!(state.current_view().len(), 2);
        assert!(state.errors().is_empty());
    }

    #[tokio::test]
    async fn test_failed_endpoint_does_not_block_the_other() {
        let source = BarrierSource {
            barrier: Arc::new(Barrier::new(2)),
            fail_summary: true,
        };

        let load = load_dashboard(&source).await;
        assert!(load.summary.is_err());

        let mut state = DashboardState::new();
        load.apply(&mut state);
        assert_eq!(*state.summary(), SummaryRecord::default());
        assert!(state.errors().summary.is_some());
        assert_eq!(state.current_view().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_list_over_http() {
        let base = serve_once(
            "200 OK",
            r#"{"result":[{"ownerAddress":"0x1234567890abcdef1234","point":"10"}]}"#,
        )
        .await;
        let client = client_for(base);

        let list = client.fetch_list().await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].index, 1);
        assert_eq!(list[0].point, "10");
    }

    #[tokio::test]
    async fn test_fetch_summary_without_result() {
        let base = serve_once("200 OK", r#"{"message":"ok"}"#).await;
        let client = client_for(base);

        let summary = client.fetch_summary().await.unwrap().into_record();
        assert_eq!(summary, SummaryRecord::default());
    }

    #[tokio::test]
    async fn test_error_status() {
        let base = serve_once("503 Service Unavailable", "{}").await;
        let client = client_for(base);

        let err = client.fetch_list().await.unwrap_err();
        assert!(matches!(err, DashboardError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let base = serve_once("200 OK", "not json").await;
        let client = client_for(base);

        let err = client.fetch_summary().await.unwrap_err();
        assert!(matches!(err, DashboardError::Decode(_)));
    }
}

use crate::error::FetchError;
use crate::query::ObservationQuery;
use altinat_core::{Observation, ObservationPage};
use async_trait::async_trait;
use std::time::Duration;

/// Anything that can answer a per-friend observation query
#[async_trait]
pub trait ObservationSource: Send + Sync {
    async fn observations(&self, query: &ObservationQuery) -> Result<Vec<Observation>, FetchError>;
}

/// Observation source backed by the public REST API
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Client for `base_url`. `None` means requests never time out.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("altinat/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait]
impl ObservationSource for HttpSource {
    async fn observations(&self, query: &ObservationQuery) -> Result<Vec<Observation>, FetchError> {
        let url = query.to_url(&self.base_url)?;
        let login = query.user_login.clone();
        tracing::debug!(%url, "fetching observations");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                login: login.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                login,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                login: login.clone(),
                source,
            })?;

        let page: ObservationPage =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode { login, source })?;
        Ok(page.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use altinat_core::PageSize;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a local port, returning the base URL
    fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}/v1", addr)
    }

    fn local_source(base_url: &str) -> HttpSource {
        HttpSource::new(base_url, Some(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn test_http_source_builds() {
        let source = HttpSource::new("https://api.inaturalist.org/v1", Some(Duration::from_secs(5)));
        assert!(source.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_base_fails_before_network() {
        let source = HttpSource::new("::nonsense::", Some(Duration::from_secs(5))).unwrap();
        let query = ObservationQuery::recent("alice", PageSize::default());
        let err = source.observations(&query).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_success_decodes_results() {
        let base = serve_once(
            "200 OK",
            r#"{"results": [{"id": 7, "created_at": "2025-06-15T09:00:00Z", "user": {"login": "alice"}}]}"#,
        );
        let query = ObservationQuery::recent("alice", PageSize::default());

        let observations = local_source(&base).observations(&query).await.unwrap();
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].id, 7);
    }

    #[tokio::test]
    async fn test_server_error_is_status_failure() {
        let base = serve_once("500 Internal Server Error", "");
        let query = ObservationQuery::recent("alice", PageSize::default());

        let err = local_source(&base).observations(&query).await.unwrap_err();
        assert!(
            matches!(err, FetchError::Status { ref login, status: 500 } if login == "alice"),
            "{:?}",
            err
        );
    }

    #[tokio::test]
    async fn test_not_found_is_status_failure() {
        let base = serve_once("404 Not Found", r#"{"error": "not found"}"#);
        let query = ObservationQuery::recent("nobody", PageSize::default());

        let err = local_source(&base).observations(&query).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }), "{:?}", err);
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_failure() {
        let base = serve_once("200 OK", "{not json");
        let query = ObservationQuery::recent("alice", PageSize::default());

        let err = local_source(&base).observations(&query).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }), "{:?}", err);
        assert_eq!(err.login(), Some("alice"));
    }
}

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{PlannerError, Result};
use crate::models::DiscountSet;

/// Supplier of the identifiers currently on promotion.
#[async_trait]
pub trait DiscountSource: Send + Sync {
    async fn fetch(&self) -> Result<DiscountSet>;
}

/// Discounts stored locally, as a JSON array or one identifier per line.
#[derive(Debug, Clone)]
pub struct DiscountFile {
    path: PathBuf,
}

impl DiscountFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DiscountSource for DiscountFile {
    async fn fetch(&self) -> Result<DiscountSet> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PlannerError::Acquisition(format!("reading {}: {}", self.path.display(), e))
        })?;
        parse_discount_list(&content)
    }
}

/// Discounts served as a JSON array over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDiscountSource {
    url: String,
    client: reqwest::Client,
}

impl HttpDiscountSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    async fn fetch_values(&self) -> reqwest::Result<Vec<Value>> {
        self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl DiscountSource for HttpDiscountSource {
    async fn fetch(&self) -> Result<DiscountSet> {
        let ids = self
            .fetch_values()
            .await
            .map_err(|e| PlannerError::Acquisition(format!("fetching {}: {}", self.url, e)))?;

        tracing::debug!(url = %self.url, count = ids.len(), "fetched discounts");
        ids_from_values(ids)
    }
}

/// Pick a source from a location: URLs go over HTTP, anything else is a file.
pub fn discount_source_for(location: &str) -> Box<dyn DiscountSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpDiscountSource::new(location))
    } else {
        Box::new(DiscountFile::new(location))
    }
}

/// Parse a JSON array of identifiers, or plain text with one per line.
///
/// Lines starting with `#` are comments.
pub fn parse_discount_list(content: &str) -> Result<DiscountSet> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(trimmed)?;
        return ids_from_values(values);
    }

    Ok(trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect())
}

fn ids_from_values(values: Vec<Value>) -> Result<DiscountSet> {
    values
        .into_iter()
        .map(|value| match value {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(PlannerError::Acquisition(format!(
                "unexpected discount identifier {}",
                other
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single HTTP request with a canned response, returning its URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await.unwrap();
            let response = format!(
                "HTTP/1.1 {}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        format!("http://{}/discounts", addr)
    }

    fn local_source(url: String) -> HttpDiscountSource {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpDiscountSource::with_client(url, client)
    }

    #[test]
    fn test_parse_json_array() {
        let discounts = parse_discount_list(r#"["wi1", 42]"#).unwrap();
        assert!(discounts.contains("wi1"));
        assert!(discounts.contains("42"));
    }

    #[test]
    fn test_parse_lines() {
        let discounts = parse_discount_list("# week 12\nwi1\n\n  wi2 \n").unwrap();
        assert_eq!(discounts.len(), 2);
        assert!(discounts.contains("wi2"));
    }

    #[test]
    fn test_parse_rejects_nested_values() {
        assert!(parse_discount_list(r#"[{"id": 1}]"#).is_err());
    }

    #[test]
    fn test_empty_file_is_empty_set() {
        assert!(parse_discount_list("").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discount_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[\"a\", \"b\"]").unwrap();

        let discounts = DiscountFile::new(file.path()).fetch().await.unwrap();
        assert_eq!(discounts.len(), 2);
    }

    #[tokio::test]
    async fn test_http_source_reads_json_array() {
        let url = serve_once("200 OK", r#"["wi1", 42]"#).await;
        let discounts = local_source(url).fetch().await.unwrap();
        assert_eq!(discounts.len(), 2);
        assert!(discounts.contains("wi1"));
        assert!(discounts.contains("42"));
    }

    #[tokio::test]
    async fn test_http_error_status_is_acquisition_failure() {
        let url = serve_once("503 Service Unavailable", "[]").await;
        let err = local_source(url).fetch().await.unwrap_err();
        assert!(matches!(err, PlannerError::Acquisition(ref msg) if msg.contains("503")));
    }

    #[tokio::test]
    async fn test_http_non_array_body_is_acquisition_failure() {
        let url = serve_once("200 OK", r#"{"ids": ["wi1"]}"#).await;
        let err = local_source(url).fetch().await.unwrap_err();
        assert!(matches!(err, PlannerError::Acquisition(_)));
    }

    #[tokio::test]
    async fn test_http_connection_refused_is_acquisition_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/discounts", listener.local_addr().unwrap());
        drop(listener);

        let err = local_source(url).fetch().await.unwrap_err();
        assert!(matches!(err, PlannerError::Acquisition(_)));
    }

    #[tokio::test]
    async fn test_missing_discount_file_fails() {
        let err = DiscountFile::new("/nonexistent/discounts.json")
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::Acquisition(_)));
    }
}

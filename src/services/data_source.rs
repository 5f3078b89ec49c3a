use std::io;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("connection error: {0}")]
    Connection(String),
    #[error("unexpected status {status} from {location}")]
    Status { location: String, status: u16 },
    #[error("failed to read {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: io::Error,
    },
}

/// Retrieves a text document by location.
pub trait DataSource {
    fn fetch_text(&self, location: &str) -> Result<String, FetchError>;
}

/// Serves `http://` and `https://` locations over the network and anything
/// else from the local filesystem.
pub struct LocationSource {
    client: Client,
}

impl LocationSource {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Connection(e.to_string()))?;
        Ok(Self { client })
    }

    fn fetch_http(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                location: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .map_err(|e| FetchError::Connection(e.to_string()))
    }

    fn fetch_file(&self, path: &str) -> Result<String, FetchError> {
        std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                FetchError::NotFound(path.to_string())
            } else {
                FetchError::Read {
                    location: path.to_string(),
                    source,
                }
            }
        })
    }
}

impl DataSource for LocationSource {
    fn fetch_text(&self, location: &str) -> Result<String, FetchError> {
        debug!(location, "fetching document");
        if is_remote(location) {
            self.fetch_http(location)
        } else {
            self.fetch_file(location)
        }
    }
}

pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn source() -> LocationSource {
        LocationSource::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn is_remote_detects_http_schemes() {
        assert!(is_remote("http://localhost/data.csv"));
        assert!(is_remote("https://example.org/data.csv"));
        assert!(!is_remote("data/datos_ahorro.csv"));
        assert!(!is_remote("/tmp/http.csv"));
    }

    #[test]
    fn fetch_text_reads_local_file() {
        let file = assert_fs::NamedTempFile::new("data.csv").unwrap();
        file.write_str("period,contribution\n1,100\n").unwrap();

        let text = source().fetch_text(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "period,contribution\n1,100\n");
    }

    #[test]
    fn fetch_text_reports_missing_file_as_not_found() {
        let error = source()
            .fetch_text("/nonexistent/dir/datos.csv")
            .expect_err("expected missing file");
        assert!(matches!(error, FetchError::NotFound(_)));
    }

    #[tokio::test]
    async fn fetch_text_reads_http_body_and_maps_not_found() {
        use warp::Filter;

        let route = warp::path("data.csv").map(|| "period,contribution\n1,100\n");
        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        let (found, missing) = tokio::task::spawn_blocking(move || {
            let source = source();
            (
                source.fetch_text(&format!("http://{addr}/data.csv")),
                source.fetch_text(&format!("http://{addr}/missing.csv")),
            )
        })
        .await
        .unwrap();

        assert_eq!(found.unwrap(), "period,contribution\n1,100\n");
        assert!(matches!(missing, Err(FetchError::NotFound(_))));
    }
}

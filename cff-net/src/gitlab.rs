// cff-net/src/gitlab.rs
use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use cff_common::config::{Config, API_ENDPOINT_ENV};
use cff_common::error::RemoteFetchError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, warn};
use url::Url;

use crate::validation::{sends_token_in_clear, validate_endpoint};

const DOWNLOAD_TIMEOUT_SECS: u64 = 300;
const CONNECT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT_STRING: &str = "common_fastfile (Rust)";
// HeaderName::from_static only accepts lowercase names.
const PRIVATE_TOKEN_HEADER: &str = "private-token";

pub type Result<T> = std::result::Result<T, RemoteFetchError>;

/// Source of raw file contents for `(repository, file, version)`.
pub trait ContentApi {
    fn repo_file_contents(
        &self,
        repository: &str,
        file: &str,
        version: &str,
    ) -> impl Future<Output = Result<Bytes>> + Send;
}

/// Client for GitLab's repository-files endpoint.
#[derive(Debug, Clone)]
pub struct GitlabClient {
    http: Client,
    endpoint: Url,
}

impl GitlabClient {
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = config.api_endpoint.as_deref().ok_or_else(|| {
            RemoteFetchError::Config(format!(
                "'{API_ENDPOINT_ENV}' is not set, cannot reach the GitLab API"
            ))
        })?;
        Self::with_endpoint(endpoint, config.api_private_token.as_deref())
    }

    pub fn with_endpoint(endpoint: &str, private_token: Option<&str>) -> Result<Self> {
        let endpoint = validate_endpoint(endpoint)?;
        if sends_token_in_clear(&endpoint, private_token) {
            warn!(
                "GitLab API endpoint {} is not using https; the private token is sent in clear text",
                endpoint
            );
        }
        if private_token.is_none() {
            debug!("No GitLab private token configured, sending unauthenticated requests");
        }
        let http = build_http_client(private_token)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `{endpoint}/projects/{repository}/repository/files/{file}/raw?ref={version}`,
    /// with `repository` and `file` each encoded as a single path segment.
    ///
    /// `.` and `..` are refused: as URL segments they would be resolved away
    /// and address a different endpoint.
    pub fn raw_file_url(&self, repository: &str, file: &str, version: &str) -> Result<Url> {
        for (name, value) in [("repository", repository), ("file", file)] {
            if is_dot_segment(value) {
                return Err(RemoteFetchError::InvalidPathSegment {
                    name,
                    value: value.to_string(),
                });
            }
        }

        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| RemoteFetchError::InvalidEndpoint {
                endpoint: self.endpoint.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .push("projects")
            .push(repository)
            .push("repository")
            .push("files")
            .push(file)
            .push("raw");
        url.query_pairs_mut().clear().append_pair("ref", version);
        Ok(url)
    }
}

impl ContentApi for GitlabClient {
    async fn repo_file_contents(&self, repository: &str, file: &str, version: &str) -> Result<Bytes> {
        let url = self.raw_file_url(repository, file, version)?;
        debug!("Requesting {}", url);

        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            debug!("HTTP request failed for {url}: {e}");
            RemoteFetchError::from(e)
        })?;
        let status = response.status();
        debug!("Received HTTP status: {} for {}", status, url);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            error!("HTTP error {} for URL {}: {}", status, url, body);
            return Err(match status {
                StatusCode::UNAUTHORIZED => RemoteFetchError::Unauthorized {
                    url: url.to_string(),
                },
                StatusCode::FORBIDDEN => RemoteFetchError::Forbidden {
                    url: url.to_string(),
                },
                StatusCode::NOT_FOUND => RemoteFetchError::NotFound {
                    repository: repository.to_string(),
                    file: file.to_string(),
                    version: version.to_string(),
                },
                _ => RemoteFetchError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                    body,
                },
            });
        }

        let content = response.bytes().await?;
        debug!("Received {} bytes for '{}' [{}]", content.len(), file, version);
        Ok(content)
    }
}

/// `.` or `..`, including their `%2e` spellings.
fn is_dot_segment(value: &str) -> bool {
    let decoded = value.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

fn build_http_client(private_token: Option<&str>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    if let Some(token) = private_token {
        let mut value = HeaderValue::from_str(token).map_err(|e| {
            RemoteFetchError::Config(format!("Private token is not a valid header value: {e}"))
        })?;
        value.set_sensitive(true);
        headers.insert(PRIVATE_TOKEN_HEADER, value);
    }
    Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| RemoteFetchError::Config(format!("Failed to build HTTP client: {e}")))
}

// cff-net/src/validation.rs
use cff_common::error::RemoteFetchError;
use url::Url;

/// Parses the API endpoint, accepting `https` and `http`.
pub fn validate_endpoint(endpoint: &str) -> Result<Url, RemoteFetchError> {
    let url = Url::parse(endpoint).map_err(|e| RemoteFetchError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "https" => {}
        "http" => tracing::debug!("GitLab API endpoint {} is not using https", endpoint),
        other => {
            return Err(RemoteFetchError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: format!("scheme must be https or http, but got '{other}'"),
            })
        }
    }
    if url.cannot_be_a_base() {
        return Err(RemoteFetchError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }
    Ok(url)
}

/// True when a private token would travel over plain http.
pub fn sends_token_in_clear(endpoint: &Url, private_token: Option<&str>) -> bool {
    private_token.is_some() && endpoint.scheme() == "http"
}

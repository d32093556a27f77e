// Shared HTTP plumbing for both providers

use std::error::Error;
use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};

use crate::config::{CLIENT, DEBUG_FLAGS};

// Custom error type for provider calls, for better error messages.
#[derive(Debug, PartialEq, Eq)]
pub enum ProviderError {
    Http { status: u16, url: String },
    RateLimited(String),
    Malformed(String),
    Provider { code: String, description: String },
    NoData(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProviderError::Http { status, url } => {
                write!(f, "HTTP {} from {}", status, url)
            }
            ProviderError::RateLimited(provider) => {
                write!(f, "{} rate-limited the request (HTTP 429), try again later", provider)
            }
            ProviderError::Malformed(msg) => write!(f, "Malformed provider response: {}", msg),
            ProviderError::Provider { code, description } => {
                write!(f, "Provider error {}: {}", code, description)
            }
            ProviderError::NoData(what) => write!(f, "Provider returned no data for {}", what),
        }
    }
}

impl Error for ProviderError {}

pub fn build_client() -> Result<Client> {
    Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_millis(CLIENT.timeout_ms))
        .connect_timeout(Duration::from_millis(CLIENT.connect_timeout_ms))
        .user_agent(CLIENT.user_agent)
        .build()
        .context("Failed to create HTTP client")
}

/// GET `url` with `query`, returning the body of a 2xx response.
pub async fn get_text(
    client: &Client,
    provider: &str,
    url: &str,
    query: &[(&str, String)],
) -> Result<String> {
    let request = client.get(url).query(query).build()?;
    if DEBUG_FLAGS.print_requests {
        log::debug!("GET {}", request.url());
    }

    let response = client
        .execute(request)
        .await
        .with_context(|| format!("{} request to {} failed", provider, url))?;

    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ProviderError::RateLimited(provider.to_string()).into());
    }
    if !status.is_success() {
        return Err(ProviderError::Http {
            status: status.as_u16(),
            url: url.to_string(),
        }
        .into());
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read {} response body", provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProviderError::RateLimited("Google Trends".to_string()).to_string(),
            "Google Trends rate-limited the request (HTTP 429), try again later"
        );
        assert_eq!(
            ProviderError::Http {
                status: 404,
                url: "https://example.com".to_string()
            }
            .to_string(),
            "HTTP 404 from https://example.com"
        );
    }

    #[test]
    fn test_client_builds() {
        assert!(build_client().is_ok());
    }
}

use cards_logging::cards_debug;
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Url;

use crate::decode::decode_contributors;
use crate::{ContributorRecord, FailureKind, FetchError};

/// Media type requested from the GitHub REST API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Scheme and host (optionally a path prefix) of the REST API.
    pub api_base: String,
    /// GitHub rejects requests without a user agent.
    pub user_agent: String,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            user_agent: concat!("contributor-cards/", env!("CARGO_PKG_VERSION")).to_string(),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Source of a repository's contributor list.
#[async_trait::async_trait]
pub trait ContributorSource: Send + Sync {
    async fn fetch_contributors(
        &self,
        organization: &str,
        repository: &str,
    ) -> Result<Vec<ContributorRecord>, FetchError>;
}

/// Single unauthenticated `GET /repos/{owner}/{repo}/contributors`.
/// No retries, no pagination headers.
#[derive(Debug, Clone)]
pub struct GithubContributorSource {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl GithubContributorSource {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// Owner and repository are appended as escaped path segments.
    pub fn endpoint(&self, organization: &str, repository: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.settings.api_base)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "api base cannot be a base"))?
            .pop_if_empty()
            .extend(["repos", organization, repository, "contributors"]);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl ContributorSource for GithubContributorSource {
    async fn fetch_contributors(
        &self,
        organization: &str,
        repository: &str,
    ) -> Result<Vec<ContributorRecord>, FetchError> {
        let url = self.endpoint(organization, repository)?;
        cards_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, self.settings.user_agent.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }

        let records = decode_contributors(&body)
            .map_err(|err| FetchError::new(FailureKind::MalformedBody, err.to_string()))?;
        cards_debug!(
            "Fetched {} contributors for {}/{} ({} bytes)",
            records.len(),
            organization,
            repository,
            body.len()
        );
        Ok(records)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_builder() {
        return FetchError::new(FailureKind::InvalidUrl, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

//! GitHub repository lookup for project prefill.
//!
//! The editor flow lets a user paste a repository URL and have the project's
//! name, description, and primary language filled in from the GitHub API.
//! Two halves:
//!
//! - [`parse_repo_url`] — pure parsing of a `https://github.com/{owner}/{name}`
//!   URL into a [`RepoRef`]. Also used by validation to flag malformed
//!   `githubUrl` values in stored records.
//! - [`GithubClient`] — a blocking HTTP client for the `GET /repos/{owner}/{name}`
//!   endpoint. Constructed once with the configured API base and user agent.
//!
//! [`apply_summary`] merges a fetched summary into a project without
//! clobbering anything the user already typed: empty fields fill, non-empty
//! fields stay.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Project;

#[derive(Error, Debug)]
pub enum GithubError {
    #[error("not a valid URL: {0:?}")]
    InvalidUrl(String),
    #[error("not a github.com URL: {0:?}")]
    NotGithubHost(String),
    #[error("URL has no owner/repository path: {0:?}")]
    MissingRepoPath(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("repository not found or private")]
    NotFound,
    #[error("GitHub API rate limit exceeded or access forbidden")]
    RateLimited,
    #[error("GitHub API returned status {0}")]
    Api(u16),
}

/// Owner and repository name parsed from a GitHub URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

/// Parse `https://github.com/{owner}/{name}[/...]` into a [`RepoRef`].
pub fn parse_repo_url(url: &str) -> Result<RepoRef, GithubError> {
    let parsed = Url::parse(url).map_err(|_| GithubError::InvalidUrl(url.to_string()))?;
    if parsed.host_str() != Some("github.com") {
        return Err(GithubError::NotGithubHost(url.to_string()));
    }
    let mut segments = parsed
        .path_segments()
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty());
    let owner = segments
        .next()
        .ok_or_else(|| GithubError::MissingRepoPath(url.to_string()))?;
    let name = segments
        .next()
        .ok_or_else(|| GithubError::MissingRepoPath(url.to_string()))?;
    Ok(RepoRef {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}

/// What prefill needs from a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub html_url: String,
}

/// Raw `GET /repos/{owner}/{name}` payload, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct RepoResponse {
    name: Option<String>,
    description: Option<String>,
    language: Option<String>,
    html_url: Option<String>,
}

/// Blocking client for the GitHub repositories endpoint.
pub struct GithubClient {
    client: reqwest::blocking::Client,
    api_base: String,
}

impl GithubClient {
    pub fn new(api_base: &str, user_agent: &str) -> Result<Self, GithubError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /repos/{owner}/{name}`.
    ///
    /// A null `name` in the payload falls back to the parsed repository
    /// name, so a summary always carries a usable name.
    pub fn fetch_repo(&self, repo: &RepoRef) -> Result<RepoSummary, GithubError> {
        let url = format!("{}/repos/{}/{}", self.api_base, repo.owner, repo.name);
        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github.v3+json")
            .send()?;

        match resp.status() {
            status if status.is_success() => {
                let raw: RepoResponse = resp.json()?;
                Ok(RepoSummary {
                    name: raw.name.unwrap_or_else(|| repo.name.clone()),
                    description: raw.description,
                    language: raw.language,
                    html_url: raw
                        .html_url
                        .unwrap_or_else(|| format!("https://github.com/{}/{}", repo.owner, repo.name)),
                })
            }
            StatusCode::NOT_FOUND => Err(GithubError::NotFound),
            StatusCode::FORBIDDEN => Err(GithubError::RateLimited),
            status => Err(GithubError::Api(status.as_u16())),
        }
    }
}

/// Merge a fetched summary into a project, fill-if-empty:
///
/// - `name` and `description` fill only when currently empty;
/// - `repository_url` fills from `html_url` when absent or empty;
/// - `language` is appended to `technologies` unless already present
///   (case-insensitive).
pub fn apply_summary(project: &mut Project, summary: &RepoSummary) {
    if project.name.is_empty() {
        project.name.clone_from(&summary.name);
    }
    if project.description.is_empty()
        && let Some(description) = &summary.description
    {
        project.description.clone_from(description);
    }
    if project.repository_link().is_none() {
        project.repository_url = Some(summary.html_url.clone());
    }
    if let Some(language) = &summary.language {
        let already_listed = project
            .technologies
            .iter()
            .any(|t| t.eq_ignore_ascii_case(language));
        if !already_listed {
            project.technologies.push(language.clone());
        }
    }
}

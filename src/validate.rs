//! Upstream record validation.
//!
//! The rendering engine deliberately renders whatever it is given — a blank
//! name becomes a blank heading, never an error. This module is where
//! absence gets surfaced instead: the `check` command runs [`validate`] and
//! reports every issue, so a record is fixed before it ships as a site.
//!
//! Issues are collected, not short-circuited: one pass reports everything.

use std::fmt;

use crate::github;
use crate::types::PortfolioData;

/// One problem with a record: the field path and what is wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub field: String,
    pub message: String,
}

impl Issue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a record for problems the renderer will not catch. Empty result
/// means the record is ready to render.
pub fn validate(data: &PortfolioData) -> Vec<Issue> {
    let mut issues = Vec::new();

    if data.user_id.is_empty() {
        issues.push(Issue::new("userId", "must not be empty"));
    }

    let user = &data.user_info;
    if user.name.is_empty() {
        issues.push(Issue::new("userInfo.name", "must not be empty"));
    }
    if user.professional_title.is_empty() {
        issues.push(Issue::new("userInfo.professionalTitle", "must not be empty"));
    }
    if user.about_me.is_empty() {
        issues.push(Issue::new("userInfo.aboutMe", "must not be empty"));
    }

    for (idx, link) in data.social_links.iter().enumerate() {
        if link.url.is_empty() {
            issues.push(Issue::new(
                format!("socialLinks[{idx}].url"),
                "must not be empty",
            ));
        }
    }

    for (idx, project) in data.projects.iter().enumerate() {
        if project.name.is_empty() {
            issues.push(Issue::new(
                format!("projects[{idx}].name"),
                "must not be empty",
            ));
        }
        if project.description.is_empty() {
            issues.push(Issue::new(
                format!("projects[{idx}].description"),
                "must not be empty",
            ));
        }
        if let Some(url) = &project.github_url
            && !url.is_empty()
            && let Err(err) = github::parse_repo_url(url)
        {
            issues.push(Issue::new(format!("projects[{idx}].githubUrl"), err.to_string()));
        }
    }

    issues
}

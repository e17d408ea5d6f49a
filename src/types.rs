//! The normalized portfolio data model.
//!
//! One [`PortfolioData`] value is the complete input to a render call. Records
//! are serialized as camelCase JSON (`userInfo`, `socialLinks`, `lastUpdatedAt`)
//! so files written by the store stay compatible with records produced by the
//! form editor upstream.
//!
//! The model carries no behavior beyond small accessors that encode one rule
//! in one place: an optional URL field that is present but empty counts as
//! absent. Renderers call the accessors instead of re-checking strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile information shown in every theme's header and About section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub name: String,
    pub professional_title: String,
    /// Free-form prose, rendered verbatim with no truncation.
    pub about_me: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

impl UserInfo {
    /// Profile picture URL, treating an empty string as absent.
    pub fn profile_picture(&self) -> Option<&str> {
        self.profile_picture_url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Social platform identifier.
///
/// The known set is closed (`github | linkedin | twitter | website`), but
/// anything else a record carries survives as [`SocialPlatform::Other`] and
/// renders like the rest — display is a casing rule, not a membership check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Website,
    Other(String),
}

impl SocialPlatform {
    /// The raw lowercase identifier as stored in records.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Website => "website",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for SocialPlatform {
    fn from(s: String) -> Self {
        match s.as_str() {
            "github" => Self::Github,
            "linkedin" => Self::Linkedin,
            "twitter" => Self::Twitter,
            "website" => Self::Website,
            _ => Self::Other(s),
        }
    }
}

impl From<SocialPlatform> for String {
    fn from(p: SocialPlatform) -> Self {
        p.as_str().to_string()
    }
}

/// One social link. Insertion order is display order; duplicates are allowed
/// and all of them render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

/// A portfolio project entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Generic source link, shown as "Repository"/"View Code".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    /// GitHub URL used by prefill; not rendered distinctly by the themes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Free-text labels, joined with ", " for display.
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Project {
    /// Repository link, treating an empty string as absent.
    pub fn repository_link(&self) -> Option<&str> {
        self.repository_url.as_deref().filter(|u| !u.is_empty())
    }

    /// Live demo link, treating an empty string as absent.
    pub fn live_link(&self) -> Option<&str> {
        self.live_url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Theme selector. `id` is the dispatch key; `name` is display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTheme {
    pub id: String,
    pub name: String,
}

/// Layout selector. Carried in the record for the editor's benefit; no theme
/// renderer consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioLayout {
    pub id: String,
    pub name: String,
}

/// The aggregate root: everything one render call needs.
///
/// Read-only for the duration of a render; the engine never mutates or
/// persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub user_id: String,
    pub user_info: UserInfo,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub theme: PortfolioTheme,
    pub layout: PortfolioLayout,
    /// Owner-supplied stylesheet, injected verbatim into the document head
    /// when present and non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    pub last_updated_at: DateTime<Utc>,
}

impl PortfolioData {
    /// Custom CSS, treating an empty string as absent.
    pub fn custom_css(&self) -> Option<&str> {
        self.custom_css.as_deref().filter(|c| !c.is_empty())
    }
}

//! Shared test fixtures for the devfolio test suite.
//!
//! The canonical fixture is a small two-project record ("Test User") that
//! covers both conditional-link states: the first project carries repository
//! and live URLs, the second only a repository URL. Theme and render tests
//! all derive from it so content assertions stay consistent across modules.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{
    PortfolioData, PortfolioLayout, PortfolioTheme, Project, SocialLink, SocialPlatform, UserInfo,
};

/// Fixed render clock for deterministic footer assertions.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
}

/// The canonical two-project, two-link test record.
pub fn test_portfolio() -> PortfolioData {
    PortfolioData {
        user_id: "testUser123".to_string(),
        user_info: UserInfo {
            name: "Test User".to_string(),
            professional_title: "Software Tester".to_string(),
            about_me: "I love testing software and ensuring quality.".to_string(),
            profile_picture_url: Some("https://example.com/test-profile.jpg".to_string()),
        },
        social_links: vec![
            SocialLink {
                platform: SocialPlatform::Github,
                url: "https://github.com/testuser".to_string(),
            },
            SocialLink {
                platform: SocialPlatform::Linkedin,
                url: "https://linkedin.com/in/testuser".to_string(),
            },
        ],
        projects: vec![
            Project {
                name: "Awesome Project 1".to_string(),
                description: "This is the first awesome project.".to_string(),
                repository_url: Some("https://github.com/testuser/awesome-project-1".to_string()),
                github_url: None,
                live_url: Some("https://awesome-project-1.example.com".to_string()),
                technologies: vec!["React".to_string(), "TypeScript".to_string()],
            },
            Project {
                name: "Super App 2".to_string(),
                description: "A super application that does amazing things.".to_string(),
                repository_url: Some("https://github.com/testuser/super-app-2".to_string()),
                github_url: None,
                live_url: None,
                technologies: vec![
                    "Node.js".to_string(),
                    "Express".to_string(),
                    "MongoDB".to_string(),
                ],
            },
        ],
        theme: PortfolioTheme {
            id: "default".to_string(),
            name: "Default Theme".to_string(),
        },
        layout: PortfolioLayout {
            id: "standard".to_string(),
            name: "Standard Layout".to_string(),
        },
        custom_css: None,
        last_updated_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
    }
}

/// The test record with its theme id swapped.
pub fn with_theme(mut data: PortfolioData, theme_id: &str) -> PortfolioData {
    theme_id.clone_into(&mut data.theme.id);
    data
}

//! The built-in sample portfolio.
//!
//! A fully populated record used to exercise the whole pipeline without a
//! stored record: `render --sample` for previewing themes, `sample` for
//! printing a starting-point JSON file, and the test suite's end-to-end runs.
//! The timestamp is fixed so sample output is stable across days.

use chrono::{TimeZone, Utc};

use crate::types::{
    PortfolioData, PortfolioLayout, PortfolioTheme, Project, SocialLink, SocialPlatform, UserInfo,
};

/// Build the sample record: three projects (one without links), three social
/// links, default theme and layout, and a custom stylesheet.
pub fn sample_portfolio() -> PortfolioData {
    PortfolioData {
        user_id: "user123".to_string(),
        user_info: UserInfo {
            name: "Alex Doe".to_string(),
            professional_title: "Full-Stack Developer".to_string(),
            about_me: "Passionate developer with experience in building web applications \
                       using modern technologies. I love solving problems and learning new \
                       things. Focused on creating intuitive and performant user experiences."
                .to_string(),
            profile_picture_url: Some("https://example.com/profile.jpg".to_string()),
        },
        social_links: vec![
            SocialLink {
                platform: SocialPlatform::Github,
                url: "https://github.com/alexdoe".to_string(),
            },
            SocialLink {
                platform: SocialPlatform::Linkedin,
                url: "https://linkedin.com/in/alexdoe".to_string(),
            },
            SocialLink {
                platform: SocialPlatform::Twitter,
                url: "https://twitter.com/alexdoe".to_string(),
            },
        ],
        projects: vec![
            Project {
                name: "E-commerce Platform".to_string(),
                description: "A full-featured e-commerce platform with product listings, \
                              cart functionality, and user accounts. Built with React, \
                              Node.js, and PostgreSQL."
                    .to_string(),
                repository_url: Some("https://github.com/alexdoe/ecommerce-platform".to_string()),
                github_url: None,
                live_url: Some("https://ecom.example.com".to_string()),
                technologies: vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "PostgreSQL".to_string(),
                    "TailwindCSS".to_string(),
                ],
            },
            Project {
                name: "Task Management App".to_string(),
                description: "A simple and intuitive task management application to help \
                              users organize their daily tasks. Features include \
                              drag-and-drop functionality and deadline reminders."
                    .to_string(),
                repository_url: Some("https://github.com/alexdoe/task-app".to_string()),
                github_url: None,
                live_url: Some("https://tasks.example.com".to_string()),
                technologies: vec![
                    "Vue.js".to_string(),
                    "Firebase".to_string(),
                    "Vuetify".to_string(),
                ],
            },
            // No links on purpose: previews the suppressed-link rendering.
            Project {
                name: "Personal Blog".to_string(),
                description: "A personal blog site to share articles and tutorials on web \
                              development. Static site generated with Next.js for performance."
                    .to_string(),
                repository_url: None,
                github_url: None,
                live_url: None,
                technologies: vec![
                    "Next.js".to_string(),
                    "Markdown".to_string(),
                    "TailwindCSS".to_string(),
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
        custom_css: Some(
            "body {\n  font-family: 'Roboto', sans-serif;\n}\n.container {\n  max-width: 1024px;\n}\n"
                .to_string(),
        ),
        last_updated_at: Utc.with_ymd_and_hms(2024, 7, 28, 0, 0, 0).unwrap(),
    }
}

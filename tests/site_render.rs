//! End-to-end pipeline tests: record in, standalone document out.
//!
//! Everything here goes through the public API only — the same surface the
//! binary uses: sample/record construction, the theme registry, the store,
//! and export.

use chrono::{TimeZone, Utc};
use devfolio::export::export_site;
use devfolio::render::{THEMES, render_portfolio, theme_for};
use devfolio::sample::sample_portfolio;
use devfolio::store::PortfolioStore;
use devfolio::types::{
    PortfolioData, PortfolioLayout, PortfolioTheme, Project, SocialLink, SocialPlatform, UserInfo,
};
use tempfile::TempDir;

const CDN_TAG: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
}

/// A minimal single-project record built from scratch.
fn single_project_portfolio() -> PortfolioData {
    PortfolioData {
        user_id: "testUser123".to_string(),
        user_info: UserInfo {
            name: "Test User".to_string(),
            professional_title: "Software Tester".to_string(),
            about_me: "I love testing software and ensuring quality.".to_string(),
            profile_picture_url: None,
        },
        social_links: vec![SocialLink {
            platform: SocialPlatform::Github,
            url: "https://github.com/testuser".to_string(),
        }],
        projects: vec![Project {
            name: "Awesome Project 1".to_string(),
            description: "This is the first awesome project.".to_string(),
            repository_url: Some("https://github.com/testuser/awesome-project-1".to_string()),
            github_url: None,
            live_url: None,
            technologies: vec!["React".to_string(), "TypeScript".to_string()],
        }],
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

#[test]
fn standard_theme_single_project_document() {
    let html = render_portfolio(&single_project_portfolio(), fixed_now());

    assert!(html.contains("Test User"));
    assert!(html.contains("Awesome Project 1"));
    assert!(html.contains("This is the first awesome project."));
    assert!(html.contains("https://github.com/testuser/awesome-project-1"));
    assert_eq!(html.matches(CDN_TAG).count(), 1);
}

#[test]
fn absent_links_leave_no_trace() {
    // The single project has no live URL: the Live Demo link must not exist.
    let html = render_portfolio(&single_project_portfolio(), fixed_now());
    assert!(!html.contains("Live Demo"));
}

#[test]
fn sample_record_renders_under_every_theme() {
    let sample = sample_portfolio();
    for theme in THEMES {
        let html = theme.render(&sample, fixed_now());
        assert!(html.starts_with("<!DOCTYPE html>"), "theme {}", theme.id);
        assert!(html.contains("Alex Doe"), "theme {}", theme.id);
        assert!(html.contains("Full-Stack Developer"), "theme {}", theme.id);
        for project in &sample.projects {
            assert!(html.contains(&project.name), "theme {}", theme.id);
        }
        for link in &sample.social_links {
            assert!(html.contains(&link.url), "theme {}", theme.id);
        }
        // Sample carries custom CSS: injected into every theme.
        assert!(html.contains("max-width: 1024px;"), "theme {}", theme.id);
        assert_eq!(html.matches(CDN_TAG).count(), 1, "theme {}", theme.id);
    }
}

#[test]
fn social_platform_labels_are_title_cased_everywhere() {
    let sample = sample_portfolio();
    for theme in THEMES {
        let html = theme.render(&sample, fixed_now());
        for label in ["Github", "Linkedin", "Twitter"] {
            assert!(html.contains(label), "theme {} missing {label}", theme.id);
        }
    }
}

#[test]
fn theme_markers_are_mutually_exclusive() {
    let now = fixed_now();
    let mut data = single_project_portfolio();

    data.theme.id = "dark".to_string();
    let dark = render_portfolio(&data, now);
    assert!(dark.contains("bg-gray-900"));
    assert!(dark.contains("text-gray-300"));
    assert!(!dark.contains("project-grid"));

    data.theme.id = "creative-grid".to_string();
    let creative = render_portfolio(&data, now);
    assert!(creative.contains("project-grid"));
    assert!(creative.contains("bg-gradient-to-br"));
    assert!(!creative.contains("bg-gray-900"));

    data.theme.id = "default".to_string();
    let standard = render_portfolio(&data, now);
    assert!(!standard.contains("bg-gray-900"));
    assert!(!standard.contains("project-grid"));
    assert!(!standard.contains("bg-gradient-to-br"));
}

#[test]
fn unknown_theme_id_degrades_to_standard() {
    let now = fixed_now();
    let mut data = single_project_portfolio();
    data.theme.id = "nonexistent-theme".to_string();
    let fallback = render_portfolio(&data, now);
    data.theme.id = "default".to_string();
    assert_eq!(fallback, render_portfolio(&data, now));
}

#[test]
fn same_content_three_different_documents() {
    let sample = sample_portfolio();
    let now = fixed_now();
    let a = theme_for("default").render(&sample, now);
    let b = theme_for("dark").render(&sample, now);
    let c = theme_for("creative-grid").render(&sample, now);
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
}

#[test]
fn store_to_export_round_trip() {
    let tmp = TempDir::new().unwrap();
    let store = PortfolioStore::open(tmp.path().join("portfolios")).unwrap();

    store.save(&sample_portfolio()).unwrap();
    assert_eq!(store.list().unwrap(), ["user123"]);

    let loaded = store.load("user123").unwrap().expect("stored record");
    let html = render_portfolio(&loaded, fixed_now());

    let out = tmp.path().join("dist");
    let written = export_site(&html, &out).unwrap();
    assert_eq!(written, out.join("index.html"));

    let on_disk = std::fs::read_to_string(&written).unwrap();
    assert_eq!(on_disk, html);
    assert!(on_disk.contains("Alex Doe"));
}

#[test]
fn sample_footer_has_fixed_locale_date() {
    let html = render_portfolio(&sample_portfolio(), fixed_now());
    assert!(html.contains("Last updated: 7/28/2024"));
}

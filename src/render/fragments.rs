//! Shared markup fragments used by every theme.
//!
//! Themes differ in class vocabulary and arrangement, not in semantics. The
//! rules that must hold everywhere live here, once:
//!
//! - social links render in input order, no de-duplication, platform label
//!   shown with its first character upper-cased and the rest untouched;
//! - projects render in input order; name, description, and the `", "`-joined
//!   technologies line always appear; Repository/Live Demo links appear only
//!   when the corresponding URL is a non-empty string;
//! - an empty technologies list joins to an empty string, not a placeholder.
//!
//! Builders take per-theme style structs (plain class strings) so a theme is
//! a parameterization, not a reimplementation.

use maud::{Markup, html};

use crate::types::{Project, SocialLink, SocialPlatform};

/// Display label for a platform: first character upper-cased, remainder
/// unchanged (`github` → `Github`). Applies to unknown platforms too.
pub(crate) fn platform_label(platform: &SocialPlatform) -> String {
    let raw = platform.as_str();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The `Technologies:` line body: labels joined with `", "`.
pub(crate) fn technologies_line(technologies: &[String]) -> String {
    technologies.join(", ")
}

/// Vertical social-link list styling.
pub(crate) struct SocialListStyle {
    pub anchor_class: &'static str,
}

/// One `<li>` per link, for wrapping in a theme's `<ul>`.
pub(crate) fn social_list(links: &[SocialLink], style: &SocialListStyle) -> Markup {
    html! {
        @for link in links {
            li class="mb-2" {
                a href=(link.url) target="_blank" class=(style.anchor_class) {
                    (platform_label(&link.platform))
                }
            }
        }
    }
}

/// Horizontal social-link row styling.
pub(crate) struct SocialRowStyle {
    pub anchor_class: &'static str,
    pub separator_class: &'static str,
}

/// Inline anchors separated by a visible `|` glyph between entries.
pub(crate) fn social_row(links: &[SocialLink], style: &SocialRowStyle) -> Markup {
    html! {
        @for (idx, link) in links.iter().enumerate() {
            @if idx > 0 {
                span class=(style.separator_class) { "|" }
            }
            a href=(link.url) target="_blank" class=(style.anchor_class) {
                (platform_label(&link.platform))
            }
        }
    }
}

/// Project block styling for the list-shaped themes.
pub(crate) struct ProjectListStyle {
    pub card_class: &'static str,
    pub title_class: &'static str,
    pub description_class: &'static str,
    pub link_class: &'static str,
    pub tech_class: &'static str,
    /// Stacked: each link in its own paragraph. Otherwise a flex row of
    /// anchors opening in a new tab.
    pub stacked_links: bool,
}

/// One block per project, in input order.
pub(crate) fn project_list(projects: &[Project], style: &ProjectListStyle) -> Markup {
    html! {
        @for project in projects {
            div class=(style.card_class) {
                h3 class=(style.title_class) { (project.name) }
                p class=(style.description_class) { (project.description) }
                @if style.stacked_links {
                    @if let Some(url) = project.repository_link() {
                        p { a href=(url) class=(style.link_class) { "Repository" } }
                    }
                    @if let Some(url) = project.live_link() {
                        p { a href=(url) class=(style.link_class) { "Live Demo" } }
                    }
                } @else {
                    div class="flex space-x-4 mb-2" {
                        @if let Some(url) = project.repository_link() {
                            a href=(url) class=(style.link_class) target="_blank" { "Repository" }
                        }
                        @if let Some(url) = project.live_link() {
                            a href=(url) class=(style.link_class) target="_blank" { "Live Demo" }
                        }
                    }
                }
                p class=(style.tech_class) {
                    "Technologies: " (technologies_line(&project.technologies))
                }
            }
        }
    }
}

/// One card per project for the grid theme: fixed-height scrollable
/// description, then a two-button row. A missing button leaves an empty
/// `div` so the remaining one keeps its side of the row.
pub(crate) fn project_grid_cards(projects: &[Project]) -> Markup {
    html! {
        @for project in projects {
            div class="bg-white rounded-xl shadow-lg overflow-hidden transform hover:scale-105 transition-transform duration-300 ease-in-out" {
                div class="p-6" {
                    h3 class="text-2xl font-semibold text-gray-800 mb-2" { (project.name) }
                    p class="text-gray-600 text-sm mb-4 h-20 overflow-y-auto" { (project.description) }
                    p class="text-xs text-gray-500 mb-3" {
                        "Technologies: " (technologies_line(&project.technologies))
                    }
                    div class="flex justify-between items-center" {
                        @if let Some(url) = project.repository_link() {
                            a href=(url) class="text-sm text-indigo-600 hover:text-indigo-800 font-medium" target="_blank" { "View Code" }
                        } @else {
                            div {}
                        }
                        @if let Some(url) = project.live_link() {
                            a href=(url) class="text-sm bg-green-500 text-white py-2 px-4 rounded-lg hover:bg-green-600 font-medium" target="_blank" { "Live Demo" }
                        } @else {
                            div {}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Project;

    fn link(platform: &str, url: &str) -> SocialLink {
        SocialLink {
            platform: SocialPlatform::from(platform.to_string()),
            url: url.to_string(),
        }
    }

    fn project(name: &str, repo: Option<&str>, live: Option<&str>) -> Project {
        Project {
            name: name.to_string(),
            description: format!("{name} description"),
            repository_url: repo.map(String::from),
            github_url: None,
            live_url: live.map(String::from),
            technologies: vec!["Rust".to_string(), "Maud".to_string()],
        }
    }

    const LIST_STYLE: ProjectListStyle = ProjectListStyle {
        card_class: "card",
        title_class: "title",
        description_class: "desc",
        link_class: "link",
        tech_class: "tech",
        stacked_links: true,
    };

    #[test]
    fn platform_label_upcases_first_char_only() {
        assert_eq!(platform_label(&SocialPlatform::Github), "Github");
        assert_eq!(platform_label(&SocialPlatform::Linkedin), "Linkedin");
        assert_eq!(
            platform_label(&SocialPlatform::Other("gitLab".to_string())),
            "GitLab"
        );
    }

    #[test]
    fn technologies_join_with_comma_space() {
        let techs = vec!["React".to_string(), "Node.js".to_string()];
        assert_eq!(technologies_line(&techs), "React, Node.js");
        assert_eq!(technologies_line(&[]), "");
    }

    #[test]
    fn social_list_preserves_order_and_duplicates() {
        let links = vec![
            link("twitter", "https://twitter.com/a"),
            link("github", "https://github.com/a"),
            link("github", "https://github.com/b"),
        ];
        let html = social_list(&links, &SocialListStyle { anchor_class: "x" }).into_string();

        let twitter = html.find("Twitter").unwrap();
        let github = html.find("Github").unwrap();
        assert!(twitter < github, "input order must be preserved");
        assert_eq!(html.matches("Github").count(), 2);
        assert!(html.contains("https://github.com/b"));
    }

    #[test]
    fn social_list_renders_unknown_platforms() {
        let links = vec![link("mastodon", "https://hachyderm.io/@a")];
        let html = social_list(&links, &SocialListStyle { anchor_class: "x" }).into_string();
        assert!(html.contains("Mastodon"));
        assert!(html.contains("https://hachyderm.io/@a"));
    }

    #[test]
    fn social_row_separator_goes_between_entries_only() {
        let style = SocialRowStyle {
            anchor_class: "a",
            separator_class: "sep",
        };
        let one = social_row(&[link("github", "https://g")], &style).into_string();
        assert!(!one.contains("|"));

        let two = social_row(
            &[link("github", "https://g"), link("website", "https://w")],
            &style,
        )
        .into_string();
        assert_eq!(two.matches("|").count(), 1);
    }

    #[test]
    fn project_list_conditional_links_are_independent() {
        let projects = vec![
            project("Both", Some("https://repo"), Some("https://live")),
            project("RepoOnly", Some("https://repo2"), None),
            project("Neither", None, None),
        ];
        let html = project_list(&projects, &LIST_STYLE).into_string();

        assert!(html.contains("https://repo"));
        assert!(html.contains("https://live"));
        assert!(html.contains("https://repo2"));
        assert_eq!(html.matches("Live Demo").count(), 1);
        assert_eq!(html.matches("Repository").count(), 2);
    }

    #[test]
    fn project_list_empty_url_suppresses_link() {
        let mut p = project("EmptyRepo", None, None);
        p.repository_url = Some(String::new());
        let html = project_list(&[p], &LIST_STYLE).into_string();
        assert!(!html.contains("Repository"));
    }

    #[test]
    fn project_list_escapes_markup_in_fields() {
        let mut p = project("<script>alert('x')</script>", None, None);
        p.description = "a < b & c".to_string();
        let html = project_list(&[p], &LIST_STYLE).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn grid_cards_keep_button_row_alignment() {
        let projects = vec![project("RepoOnly", Some("https://repo"), None)];
        let html = project_grid_cards(&projects).into_string();
        assert!(html.contains("View Code"));
        assert!(!html.contains("Live Demo"));
        // Placeholder div holds the empty slot in the row.
        assert!(html.contains("<div></div>"));
    }

    #[test]
    fn grid_cards_render_both_buttons() {
        let projects = vec![project("Both", Some("https://repo"), Some("https://live"))];
        let html = project_grid_cards(&projects).into_string();
        assert!(html.contains("View Code"));
        assert!(html.contains("Live Demo"));
        assert!(!html.contains("<div></div>"));
    }
}

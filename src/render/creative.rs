//! Creative-Grid theme: gradient hero plus a responsive project card grid.
//!
//! The hero folds name, title, about text, and a horizontal social row into
//! one header. Projects become cards in a `project-grid` (auto-fit CSS grid,
//! declared in the theme stylesheet) with a two-button row per card.

use chrono::{DateTime, Datelike, Utc};
use maud::Markup;

use super::fragments::{self, SocialRowStyle};
use super::{base_document, locale_date};
use crate::types::PortfolioData;

const THEME_CSS: &str = "body { font-family: 'Poppins', sans-serif; }\n\
.project-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); }";

const SOCIAL: SocialRowStyle = SocialRowStyle {
    anchor_class: "text-blue-600 hover:text-blue-800 transition duration-150 ease-in-out",
    separator_class: "mx-2 text-gray-400",
};

pub(super) fn render(data: &PortfolioData, now: DateTime<Utc>) -> Markup {
    let user = &data.user_info;
    let title = format!("{}'s Creative Portfolio", user.name);

    let content = maud::html! {
        div class="container mx-auto p-4 md:p-8" {
            header class="py-12 text-center" {
                @if let Some(url) = user.profile_picture() {
                    img src=(url) alt=(user.name)
                        class="w-40 h-40 rounded-full mx-auto mb-6 border-8 border-white shadow-2xl";
                }
                h1 class="text-5xl md:text-6xl font-extrabold text-transparent bg-clip-text bg-gradient-to-r from-purple-600 to-indigo-600 mb-3" {
                    (user.name)
                }
                p class="text-xl md:text-2xl text-gray-700 font-medium" { (user.professional_title) }
                p class="mt-6 max-w-2xl mx-auto text-gray-600 leading-relaxed" { (user.about_me) }
                div class="mt-8 flex justify-center space-x-4" {
                    (fragments::social_row(&data.social_links, &SOCIAL))
                }
            }

            main id="projects" class="py-10" {
                h2 class="text-4xl font-bold text-center text-gray-800 mb-12" { "My Projects" }
                div class="project-grid gap-8 md:gap-10" {
                    (fragments::project_grid_cards(&data.projects))
                }
            }

            footer class="text-center text-gray-600 mt-16 py-8 border-t border-gray-300" {
                p { "Last updated: " (locale_date(data.last_updated_at)) }
                p { "© " (now.year()) " " (user.name) ". Crafted with passion." }
            }
        }
    };

    base_document(
        &title,
        Some(THEME_CSS),
        data.custom_css(),
        "bg-gradient-to-br from-purple-100 to-indigo-200 text-gray-800 font-sans",
        content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{test_now, test_portfolio};

    fn rendered() -> String {
        render(&test_portfolio(), test_now()).into_string()
    }

    #[test]
    fn theme_identity_markers() {
        let html = rendered();
        assert!(html.contains("project-grid"));
        assert!(html.contains("bg-gradient-to-br"));
    }

    #[test]
    fn title_is_creative_variant() {
        let html = rendered();
        assert!(html.contains("<title>Test User's Creative Portfolio</title>"));
    }

    #[test]
    fn hero_contains_profile_and_about() {
        let html = rendered();
        assert!(html.contains("https://example.com/test-profile.jpg"));
        assert!(html.contains("I love testing software and ensuring quality."));
    }

    #[test]
    fn social_row_has_separator() {
        // Two links in the fixture: exactly one divider glyph between them.
        let html = rendered();
        assert_eq!(html.matches(r#"<span class="mx-2 text-gray-400">|</span>"#).count(), 1);
    }

    #[test]
    fn cards_render_every_project() {
        let html = rendered();
        assert!(html.contains("Awesome Project 1"));
        assert!(html.contains("Super App 2"));
        assert!(html.contains("View Code"));
    }

    #[test]
    fn footer_has_date_and_copyright() {
        let html = rendered();
        assert!(html.contains("Last updated: 1/15/2024"));
        assert!(html.contains("Crafted with passion."));
    }
}

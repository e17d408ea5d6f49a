//! Minimalist-Dark theme: centered single column on a dark palette.
//!
//! Same content as the Standard theme, reorganized: optional profile picture
//! in a centered header, "My Work" project stack, centered "Connect" list,
//! and a footer that adds a copyright line with the current year.

use chrono::{DateTime, Datelike, Utc};
use maud::Markup;

use super::fragments::{self, ProjectListStyle, SocialListStyle};
use super::{base_document, locale_date, portfolio_title};
use crate::types::PortfolioData;

const THEME_CSS: &str = "body { font-family: 'Inter', sans-serif; }";

const PROJECTS: ProjectListStyle = ProjectListStyle {
    card_class: "mb-6 p-4 border border-gray-700 rounded-lg bg-gray-800",
    title_class: "text-xl font-semibold mb-1",
    description_class: "text-sm mb-2",
    // Brighter accent than the body text so links read on the dark cards.
    link_class: "hover:underline text-indigo-400",
    tech_class: "text-xs",
    stacked_links: false,
};

const SOCIAL: SocialListStyle = SocialListStyle {
    anchor_class: "hover:underline",
};

pub(super) fn render(data: &PortfolioData, now: DateTime<Utc>) -> Markup {
    let user = &data.user_info;

    let content = maud::html! {
        div class="container mx-auto max-w-3xl p-8 md:p-12" {
            header class="text-center mb-12" {
                @if let Some(url) = user.profile_picture() {
                    img src=(url) alt=(user.name)
                        class="w-32 h-32 rounded-full mx-auto mb-4 border-4 border-gray-700 shadow-lg";
                }
                h1 class="text-5xl font-bold text-white mb-2" { (user.name) }
                p class="text-2xl text-indigo-400 mb-6" { (user.professional_title) }
            }

            section id="about" class="mb-12" {
                h2 class="text-3xl font-semibold text-white mb-4 border-b-2 border-gray-700 pb-2" {
                    "About Me"
                }
                p class="text-lg" { (user.about_me) }
            }

            section id="projects" class="mb-12" {
                h2 class="text-3xl font-semibold text-white mb-6 border-b-2 border-gray-700 pb-2" {
                    "My Work"
                }
                div class="space-y-6" {
                    (fragments::project_list(&data.projects, &PROJECTS))
                }
            }

            section id="contact" class="text-center" {
                h2 class="text-3xl font-semibold text-white mb-6 border-b-2 border-gray-700 pb-2" {
                    "Connect"
                }
                ul class="list-none text-lg text-indigo-400 space-y-2" {
                    (fragments::social_list(&data.social_links, &SOCIAL))
                }
            }

            footer class="text-center text-gray-500 mt-16 text-sm" {
                p { "Last updated: " (locale_date(data.last_updated_at)) }
                p { "© " (now.year()) " " (user.name) ". All rights reserved." }
            }
        }
    };

    base_document(
        &portfolio_title(user),
        Some(THEME_CSS),
        data.custom_css(),
        "bg-gray-900 text-gray-300 font-sans leading-relaxed",
        content,
    )
}

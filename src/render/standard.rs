//! Standard theme: light single-column card layout.
//!
//! Header (name, title), About, Projects as a sequential list, Connect with
//! Me as a link list, footer with the last-updated date.

use chrono::{DateTime, Utc};
use maud::Markup;

use super::fragments::{self, ProjectListStyle, SocialListStyle};
use super::{base_document, locale_date, portfolio_title};
use crate::types::PortfolioData;

const PROJECTS: ProjectListStyle = ProjectListStyle {
    card_class: "mb-4 p-4 border border-gray-200 rounded-lg",
    title_class: "text-xl font-semibold",
    description_class: "text-gray-700",
    link_class: "text-blue-500 hover:underline",
    tech_class: "text-sm text-gray-600",
    stacked_links: true,
};

const SOCIAL: SocialListStyle = SocialListStyle {
    anchor_class: "text-blue-500 hover:underline",
};

pub(super) fn render(data: &PortfolioData, _now: DateTime<Utc>) -> Markup {
    let user = &data.user_info;

    let content = maud::html! {
        div class="container mx-auto p-8" {
            header class="bg-white shadow-md rounded-lg p-6 mb-8" {
                h1 class="text-4xl font-bold text-gray-900" { (user.name) }
                p class="text-xl text-indigo-600" { (user.professional_title) }
            }

            section id="about" class="bg-white shadow-md rounded-lg p-6 mb-8" {
                h2 class="text-2xl font-semibold text-gray-800 mb-4" { "About Me" }
                p class="text-gray-700 leading-relaxed" { (user.about_me) }
            }

            section id="projects" class="bg-white shadow-md rounded-lg p-6 mb-8" {
                h2 class="text-2xl font-semibold text-gray-800 mb-4" { "Projects" }
                (fragments::project_list(&data.projects, &PROJECTS))
            }

            section id="contact" class="bg-white shadow-md rounded-lg p-6" {
                h2 class="text-2xl font-semibold text-gray-800 mb-4" { "Connect with Me" }
                ul class="list-none" {
                    (fragments::social_list(&data.social_links, &SOCIAL))
                }
            }

            footer class="text-center text-gray-500 mt-8" {
                p { "Last updated: " (locale_date(data.last_updated_at)) }
            }
        }
    };

    base_document(
        &portfolio_title(user),
        None,
        data.custom_css(),
        "bg-gray-100 text-gray-800 font-sans",
        content,
    )
}

//! The portfolio rendering engine.
//!
//! A pure function from one [`PortfolioData`] value to one complete HTML
//! document string. No I/O, no shared state, no validation: whatever the
//! record carries is what renders, and two calls with the same record and
//! clock produce byte-identical output.
//!
//! ## Theme registry
//!
//! Themes are registered in the [`THEMES`] table rather than dispatched by
//! an `if` chain — adding a theme is a new entry, not a branch edit. The
//! first entry is the default, and an unrecognized theme id silently resolves
//! to it: a record saved under a theme that was later removed still renders.
//!
//! ## The clock is an argument
//!
//! Footers carry a copyright year, so the current time is a parameter of
//! every render entry point instead of an ambient read. The binary calls
//! `Utc::now()` exactly once and passes it down; tests pass a fixed instant.
//!
//! ## Document contract
//!
//! Every theme produces a standalone HTML5 document: doctype, a `<title>`
//! derived from the user's name, exactly one Tailwind CDN script tag
//! (utility classes resolve when the file is opened from disk), every
//! project and social link in the record, and a footer line with the
//! last-updated date. All interpolation is escaped by maud; the owner's
//! `customCss` is the one exception, injected verbatim as a `<style>` block.

mod creative;
mod dark;
mod fragments;
mod standard;

use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

pub(crate) use fragments::platform_label;

use crate::types::{PortfolioData, UserInfo};

const TAILWIND_CDN_SRC: &str = "https://cdn.tailwindcss.com";

type RenderFn = fn(&PortfolioData, DateTime<Utc>) -> Markup;

/// A registered theme: dispatch id, display name, and its renderer.
pub struct ThemeEntry {
    pub id: &'static str,
    pub name: &'static str,
    render_fn: RenderFn,
}

impl ThemeEntry {
    /// Render a record with this theme, regardless of the record's own
    /// theme id.
    pub fn render(&self, data: &PortfolioData, now: DateTime<Utc>) -> String {
        (self.render_fn)(data, now).into_string()
    }
}

/// Theme registry. The first entry is the default: unknown theme ids
/// resolve to it.
pub const THEMES: &[ThemeEntry] = &[
    ThemeEntry {
        id: "default",
        name: "Standard",
        render_fn: standard::render,
    },
    ThemeEntry {
        id: "dark",
        name: "Minimalist Dark",
        render_fn: dark::render,
    },
    ThemeEntry {
        id: "creative-grid",
        name: "Creative Grid",
        render_fn: creative::render,
    },
];

/// Look up a theme by id, falling back to the default for unknown ids.
pub fn theme_for(id: &str) -> &'static ThemeEntry {
    THEMES.iter().find(|t| t.id == id).unwrap_or(&THEMES[0])
}

/// Render a portfolio with the theme its record selects.
pub fn render_portfolio(data: &PortfolioData, now: DateTime<Utc>) -> String {
    theme_for(&data.theme.id).render(data, now)
}

/// Document title for the list-shaped themes.
fn portfolio_title(user: &UserInfo) -> String {
    format!("{}'s Portfolio", user.name)
}

/// Last-updated footer date: `7/28/2024`-style, month and day unpadded.
fn locale_date(at: DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

/// The shared document shell: doctype, head (meta, title, Tailwind CDN,
/// optional theme and owner stylesheets), and a classed body.
fn base_document(
    title: &str,
    theme_css: Option<&str>,
    custom_css: Option<&str>,
    body_class: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src=(TAILWIND_CDN_SRC) {}
                @if let Some(css) = theme_css {
                    style { (PreEscaped(css)) }
                }
                @if let Some(css) = custom_css {
                    style { (PreEscaped(css)) }
                }
            }
            body class=(body_class) {
                (content)
            }
        }
    }
}

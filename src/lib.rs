//! # Devfolio
//!
//! A developer portfolio generator. One JSON record is the data source:
//! profile info, social links, and project entries go in, and a complete,
//! self-contained HTML site comes out in the selected theme.
//!
//! # Architecture: Record → Engine → Document
//!
//! ```text
//! 1. Store    portfolios/<user>.json  →  PortfolioData   (record in)
//! 2. Render   PortfolioData + clock   →  HTML string     (pure function)
//! 3. Export   HTML string             →  dist/index.html (document out)
//! ```
//!
//! The middle stage is the heart of the crate and is deliberately pure:
//! no I/O, no globals, no ambient clock. Given the same record and the same
//! instant, it returns byte-identical output, which is what makes the
//! document contract unit-testable down to exact substrings.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The normalized portfolio data model, serialized as camelCase JSON |
//! | [`render`] | Theme registry, dispatcher, and the three theme renderers |
//! | [`sample`] | A fully populated sample record for previews and smoke tests |
//! | [`store`] | Directory-of-JSON record store behind an explicit handle |
//! | [`validate`] | Record checks the renderer deliberately does not perform |
//! | [`github`] | Repository-URL parsing and the prefill API client |
//! | [`export`] | Writes the rendered document as `index.html` |
//! | [`config`] | `devfolio.toml` loading and validation |
//! | [`output`] | CLI output formatting — pure `format_*` fns, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped, so whatever
//!   a user types into a form field cannot break their exported document.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! The one escape hatch is the record's own `customCss`, which is injected
//! verbatim into a `<style>` block: it is the owner's stylesheet for the
//! owner's site.
//!
//! ## Themes Are Registrations
//!
//! The three themes (Standard, Minimalist Dark, Creative Grid) live in a
//! lookup table, [`render::THEMES`]. Dispatch is a table scan with the first
//! entry as the documented fallback: a record whose theme id is unknown
//! still renders, degraded to the default theme, rather than erroring.
//! Adding a theme is one new entry and one new module.
//!
//! ## The Clock Is an Argument
//!
//! Generated footers carry a copyright year, which would make a `now()`
//! call inside the engine the only impurity. Instead every render entry
//! point takes the current instant as a parameter; the binary reads the
//! clock exactly once per invocation.
//!
//! ## No Hidden Store Client
//!
//! [`store::PortfolioStore`] is constructed once in `main` and passed by
//! reference to every command that touches records. Nothing in the crate
//! holds process-wide state.

pub mod config;
pub mod export;
pub mod github;
pub mod output;
pub mod render;
pub mod sample;
pub mod store;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;

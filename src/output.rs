//! CLI output formatting.
//!
//! Information-first display: the primary line for every entity is its
//! semantic identity (theme name, project title, platform label) with a
//! 3-digit positional index, and file paths appear as trailing `→` context.
//!
//! Each report has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.

use std::path::Path;

use crate::render::{THEMES, ThemeEntry};
use crate::types::PortfolioData;
use crate::validate::Issue;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Render summary: whose portfolio, which theme, what went into it, and
/// where it landed.
///
/// ```text
/// Alex Doe — Full-Stack Developer
/// Theme: Minimalist Dark (dark)
/// 001 E-commerce Platform
/// 002 Task Management App
/// 003 Personal Blog
/// Connect: Github, Linkedin, Twitter
/// → dist/index.html
/// ```
pub fn format_render_summary(
    data: &PortfolioData,
    theme: &ThemeEntry,
    written: &Path,
) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} — {}",
            data.user_info.name, data.user_info.professional_title
        ),
        format!("Theme: {} ({})", theme.name, theme.id),
    ];
    for (idx, project) in data.projects.iter().enumerate() {
        lines.push(format!("{} {}", format_index(idx + 1), project.name));
    }
    if !data.social_links.is_empty() {
        let platforms: Vec<String> = data
            .social_links
            .iter()
            .map(|l| crate::render::platform_label(&l.platform))
            .collect();
        lines.push(format!("Connect: {}", platforms.join(", ")));
    }
    lines.push(format!("→ {}", written.display()));
    lines
}

/// Check report: one line per issue, or a single all-clear line.
pub fn format_check_report(issues: &[Issue]) -> Vec<String> {
    if issues.is_empty() {
        return vec!["Record is valid".to_string()];
    }
    let mut lines: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
    lines.push(format!(
        "{} issue{} found",
        issues.len(),
        if issues.len() == 1 { "" } else { "s" }
    ));
    lines
}

/// Registered themes, default first.
pub fn format_theme_list() -> Vec<String> {
    THEMES
        .iter()
        .enumerate()
        .map(|(idx, theme)| {
            let default_marker = if idx == 0 { " (default)" } else { "" };
            format!("{} {} — {}{}", format_index(idx + 1), theme.id, theme.name, default_marker)
        })
        .collect()
}

/// Stored records: indexed user ids.
pub fn format_store_list(user_ids: &[String]) -> Vec<String> {
    if user_ids.is_empty() {
        return vec!["No stored portfolios".to_string()];
    }
    user_ids
        .iter()
        .enumerate()
        .map(|(idx, id)| format!("{} {}", format_index(idx + 1), id))
        .collect()
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

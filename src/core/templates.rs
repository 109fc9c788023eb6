//! Template system for consistent output formatting.
//!
//! Listing rows and review cards are rendered through a small set of templates so
//! every command numbers, pads and colors entries the same way. Rendering is a
//! single pass over the template with `{placeholder}` substitution; colors are
//! applied per placeholder from the unified color system.
//!
//! # Public API
//! - [`Templates`]: Template definitions for listing and card output
//! - [`TemplateContext`]: Context data for template rendering
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Main rendering function with colors
//! - [`render_template_plain`]: Plain text rendering for testing
//! - [`strip_ansi_codes`]: Utility for removing color codes

use crate::core::colors::{badge_text, get_colored_badge, get_colored_score};
use crate::core::decision::Decision;
use colored::*;

/// Template definitions for all output formatting
pub struct Templates {
    /// A numbered listing row: badge, index, headline, detail and score
    pub list_line: &'static str,
    /// Section header above a listing
    pub list_section: &'static str,
    /// Card headline in the review view
    pub card_headline: &'static str,
    /// Card detail line in the review view
    pub card_detail: &'static str,
    /// Progress footer of the review view
    pub review_progress: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    list_line: "   ({badge}) [{n}] {name}  {detail}  {score}",
    list_section: "➤ {section}:",
    card_headline: "┃ {name}  {score}",
    card_detail: "┃ {detail}",
    review_progress: "Card {n} of {total}",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub n: Option<usize>,
    pub total: Option<usize>,
    pub name: Option<&'a str>,
    pub detail: Option<&'a str>,
    pub section: Option<&'a str>,
    pub score: Option<f32>,
    /// Decision recorded for the row, if any; drives badge text and color
    pub decision: Option<Decision>,
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    render(template, context, true)
}

/// Render a template without colors (test and plain-mode output)
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    render(template, context, false)
}

fn render(template: &str, context: &TemplateContext, colored: bool) -> String {
    let mut result = String::with_capacity(template.len() + 64);
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }
        let mut placeholder = String::new();
        let mut closed = false;
        for inner in chars.by_ref() {
            if inner == '}' {
                closed = true;
                break;
            }
            placeholder.push(inner);
        }
        if !closed {
            // Unterminated placeholder, emit literally
            result.push('{');
            result.push_str(&placeholder);
            continue;
        }
        substitute(&placeholder, context, colored, &mut result);
    }

    result
}

fn substitute(placeholder: &str, context: &TemplateContext, colored: bool, out: &mut String) {
    match placeholder {
        "n" => {
            if let Some(n) = context.n {
                out.push_str(&n.to_string());
            }
        }
        "total" => {
            if let Some(total) = context.total {
                out.push_str(&total.to_string());
            }
        }
        "name" => {
            if let Some(name) = context.name {
                if colored {
                    out.push_str(&format!("{}", name.white().bold()));
                } else {
                    out.push_str(name);
                }
            }
        }
        "detail" => {
            if let Some(detail) = context.detail {
                if colored {
                    out.push_str(&format!("{}", detail.bright_black()));
                } else {
                    out.push_str(detail);
                }
            }
        }
        "section" => {
            if let Some(section) = context.section {
                out.push_str(section);
            }
        }
        "score" => {
            if let Some(score) = context.score {
                if colored {
                    out.push_str(&format!("{}", get_colored_score(score)));
                } else {
                    out.push_str(&format!("{score:>5.1}"));
                }
            }
        }
        "badge" => {
            if colored {
                out.push_str(&format!("{}", get_colored_badge(context.decision)));
            } else {
                out.push_str(badge_text(context.decision));
            }
        }
        other => {
            // Unknown placeholders render literally so template typos are visible
            out.push('{');
            out.push_str(other);
            out.push('}');
        }
    }
}

/// Remove ANSI escape sequences from a string (testing helper)
pub fn strip_ansi_codes(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

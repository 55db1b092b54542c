//! Template placeholder scanning and substitution
//!
//! Templates use two printf-style placeholders: `%d` for the quantity and
//! `%s` for the directional label. Substitution happens in two steps, the
//! same way for every template:
//!
//! 1. [`scan`] walks the template once and records the placeholders in the
//!    order they appear.
//! 2. [`render`] replaces the placeholders positionally with the collected
//!    arguments.
//!
//! Anything else, including a `%` that is not followed by `d` or `s`, is
//! copied through unchanged.

use std::fmt;

/// Escape character that introduces a placeholder
pub const ESCAPE: char = '%';

/// Placeholder kinds recognized in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `%d`, replaced by the quantity
    Quantity,
    /// `%s`, replaced by the directional label
    Label,
}

/// A value substituted for a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    Quantity(u128),
    Label(&'a str),
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quantity(n) => write!(f, "{}", n),
            Self::Label(s) => f.write_str(s),
        }
    }
}

/// List the placeholders of a template in order of appearance
///
/// Uses a two-character escape scan: the character following an escape is
/// consumed, so `%%s` contains no placeholder.
pub fn scan(template: &str) -> Vec<Placeholder> {
    let mut placeholders = Vec::new();
    let mut escaped = false;
    for ch in template.chars() {
        if escaped {
            match ch {
                'd' => placeholders.push(Placeholder::Quantity),
                's' => placeholders.push(Placeholder::Label),
                _ => {}
            }
            escaped = false;
        } else {
            escaped = ch == ESCAPE;
        }
    }
    placeholders
}

/// Collect the arguments a template consumes, in template order
pub fn collect_args<'a>(template: &str, quantity: u128, label: &'a str) -> Vec<Arg<'a>> {
    scan(template)
        .into_iter()
        .map(|placeholder| match placeholder {
            Placeholder::Quantity => Arg::Quantity(quantity),
            Placeholder::Label => Arg::Label(label),
        })
        .collect()
}

/// Substitute `args` positionally into the placeholders of `template`
///
/// Rendering is best effort: a placeholder with no remaining argument is
/// written back literally, and surplus arguments are ignored.
pub fn render(template: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut args = args.iter();
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != ESCAPE {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(verb @ ('d' | 's')) => match args.next() {
                Some(Arg::Quantity(n)) => out.push_str(&n.to_string()),
                Some(Arg::Label(label)) => out.push_str(label),
                None => {
                    out.push(ESCAPE);
                    out.push(verb);
                }
            },
            Some(other) => {
                out.push(ESCAPE);
                out.push(other);
            }
            None => out.push(ESCAPE),
        }
    }

    out
}

/// Scan and render in one step
pub fn substitute(template: &str, quantity: u128, label: &str) -> String {
    render(template, &collect_args(template, quantity, label))
}

// Prompt-building utilities shared by every module that owns a prompt template.
//
// Templates use `{name}` placeholders next to literal JSON skeletons, so a
// brace-based format facility cannot be used. Substitution is a single
// left-to-right scan that only recognizes the names it is given.

use thiserror::Error;

/// Construction-time defects in a prompt template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("placeholder {{{0}}} is missing from the template")]
    Missing(String),

    #[error("placeholder {{{name}}} appears {count} times, expected once")]
    Duplicate { name: String, count: usize },

    #[error("template contains unexpected placeholder {{{0}}}")]
    Unexpected(String),
}

/// Substitutes `{name}` tokens for the given `(name, value)` pairs.
///
/// Braces that do not open a known placeholder are copied through unchanged.
/// Values are emitted as-is and never re-scanned, so a value containing
/// `{other_name}` stays literal.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        match vars.iter().find(|(name, _)| placeholder_at(tail, name)) {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Lists identifier-shaped `{name}` tokens in order of appearance.
/// JSON skeleton braces (`{` followed by whitespace or a quote) are not reported.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let tail = &rest[open + 1..];
        let ident_len = tail
            .char_indices()
            .find(|(i, c)| {
                !(c.is_ascii_alphabetic() || *c == '_' || (*i > 0 && c.is_ascii_digit()))
            })
            .map(|(i, _)| i)
            .unwrap_or(tail.len());

        if ident_len > 0 && tail[ident_len..].starts_with('}') {
            found.push(&tail[..ident_len]);
            rest = &tail[ident_len + 1..];
        } else {
            rest = tail;
        }
    }

    found
}

/// Verifies that every expected placeholder appears exactly once and that no
/// other placeholder is present.
pub fn check_placeholders(template: &str, expected: &[&str]) -> Result<(), TemplateError> {
    let found = placeholders(template);

    for name in expected {
        match found.iter().filter(|f| *f == name).count() {
            0 => return Err(TemplateError::Missing(name.to_string())),
            1 => {}
            count => {
                return Err(TemplateError::Duplicate {
                    name: name.to_string(),
                    count,
                })
            }
        }
    }

    if let Some(unexpected) = found.iter().find(|f| !expected.contains(*f)) {
        return Err(TemplateError::Unexpected(unexpected.to_string()));
    }

    Ok(())
}

fn placeholder_at(s: &str, name: &str) -> bool {
    s.strip_prefix('{')
        .and_then(|s| s.strip_prefix(name))
        .is_some_and(|s| s.starts_with('}'))
}

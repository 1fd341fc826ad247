//! Brace-aware tokenizer shared by the placeholder resolver, the wildcard
//! translator and manifest validation.

use crate::template::error::TemplateError;

/// One piece of a scanned template. Pieces concatenate back to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    /// `${key}` or `${key:default}`; the default is everything after the first `:`.
    Placeholder { key: &'a str, default: &'a str },
    /// The whole `{name}` token, braces included.
    Variable(&'a str),
}

/// Splits `template` into literals, placeholders and path variables.
///
/// With `placeholders == false` a `$` is an ordinary character, so `${a}`
/// scans as a literal `$` followed by the path variable `{a}`.
pub(crate) fn scan(template: &str, placeholders: bool) -> Result<Vec<Segment<'_>>, TemplateError> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'$' if placeholders && bytes.get(i + 1) == Some(&b'{') => {
                let body_start = i + 2;
                let end = closing_brace(template, body_start).ok_or_else(|| {
                    TemplateError::UnclosedPlaceholder {
                        template: template.to_string(),
                        offset: i,
                    }
                })?;
                let body = &template[body_start..end];
                if let Some(nested) = body.find('{') {
                    return Err(TemplateError::NestedBrace {
                        template: template.to_string(),
                        offset: body_start + nested,
                    });
                }
                let (key, default) = body.split_once(':').unwrap_or((body, ""));
                if key.is_empty() {
                    return Err(TemplateError::EmptyPlaceholderKey {
                        template: template.to_string(),
                        offset: i,
                    });
                }

                push_literal(&mut segments, &template[literal_start..i]);
                segments.push(Segment::Placeholder { key, default });
                i = end + 1;
                literal_start = i;
            }
            b'{' => {
                let end = closing_brace(template, i + 1).ok_or_else(|| {
                    TemplateError::UnclosedPathVariable {
                        template: template.to_string(),
                        offset: i,
                    }
                })?;
                let body = &template[i + 1..end];
                if body.is_empty() {
                    return Err(TemplateError::EmptyPathVariable {
                        template: template.to_string(),
                        offset: i,
                    });
                }
                if let Some(nested) = body.find('{') {
                    return Err(TemplateError::NestedBrace {
                        template: template.to_string(),
                        offset: i + 1 + nested,
                    });
                }

                push_literal(&mut segments, &template[literal_start..i]);
                segments.push(Segment::Variable(&template[i..=end]));
                i = end + 1;
                literal_start = i;
            }
            b'}' => {
                return Err(TemplateError::UnmatchedBrace {
                    template: template.to_string(),
                    offset: i,
                });
            }
            _ => i += 1,
        }
    }

    push_literal(&mut segments, &template[literal_start..]);
    Ok(segments)
}

fn closing_brace(template: &str, from: usize) -> Option<usize> {
    template[from..].find('}').map(|pos| from + pos)
}

fn push_literal<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment::Literal(text));
    }
}

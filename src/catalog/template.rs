//! Image tag templates.
//!
//! A template is literal text with two placeholders, `{image}` and
//! `{commit}`. Rendering is a single pass: substituted values are never
//! scanned for placeholders again.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unterminated placeholder at byte {offset}")]
    Unterminated { offset: usize },

    #[error("unexpected '}}' at byte {offset}")]
    StrayBrace { offset: usize },

    #[error("unknown placeholder '{{{name}}}'")]
    UnknownPlaceholder { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Image,
    Commit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTemplate<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> ImageTemplate<'a> {
    pub fn parse(source: &'a str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
            if pos > 0 {
                segments.push(Segment::Literal(&rest[..pos]));
            }
            if rest[pos..].starts_with('}') {
                return Err(TemplateError::StrayBrace {
                    offset: offset + pos,
                });
            }

            let after = &rest[pos + 1..];
            let end = match after.find(|c: char| c == '{' || c == '}') {
                Some(end) if after[end..].starts_with('}') => end,
                _ => {
                    return Err(TemplateError::Unterminated {
                        offset: offset + pos,
                    });
                }
            };

            segments.push(match &after[..end] {
                "image" => Segment::Image,
                "commit" => Segment::Commit,
                name => {
                    return Err(TemplateError::UnknownPlaceholder {
                        name: name.to_string(),
                    });
                }
            });

            let consumed = pos + 1 + end + 1;
            rest = &rest[consumed..];
            offset += consumed;
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    pub fn has_commit(&self) -> bool {
        self.segments.contains(&Segment::Commit)
    }

    pub fn render(&self, image: &str, commit: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Image => out.push_str(image),
                Segment::Commit => out.push_str(commit),
            }
        }
        out
    }
}

use super::errors::RouterError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param,
    Rest,
}

/// A path template.
///
/// Supports literal segments (compared ignoring ASCII case), `:name`
/// segments matching any single non-empty segment, and a trailing `*`
/// matching any remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub(crate) fn parse(pattern: &str) -> Result<Self, RouterError> {
        let Some(body) = pattern.strip_prefix('/') else {
            return Err(RouterError::MissingLeadingSlash {
                pattern: pattern.to_string(),
            });
        };
        let body = body.strip_suffix('/').unwrap_or(body);

        let mut segments = Vec::new();
        if !body.is_empty() {
            let parts: Vec<&str> = body.split('/').collect();
            let last = parts.len() - 1;
            for (index, part) in parts.into_iter().enumerate() {
                let segment = match part {
                    "" => {
                        return Err(RouterError::EmptySegment {
                            pattern: pattern.to_string(),
                        });
                    },
                    "*" if index == last => Segment::Rest,
                    "*" => {
                        return Err(RouterError::MisplacedWildcard {
                            pattern: pattern.to_string(),
                        });
                    },
                    ":" => {
                        return Err(RouterError::UnnamedParameter {
                            pattern: pattern.to_string(),
                        });
                    },
                    _ if part.starts_with(':') => Segment::Param,
                    _ => Segment::Literal(part.to_string()),
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// Pattern with no path constraint.
    pub(crate) fn any() -> Self {
        Self {
            source: String::from("/*"),
            segments: vec![Segment::Rest],
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether this pattern matches every path.
    pub(crate) fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Rest])
    }

    pub(crate) fn matches(&self, path: &str) -> bool {
        let normalized = normalize_path(path);
        let mut parts = normalized
            .trim_start_matches('/')
            .split('/')
            .filter(|part| !part.is_empty());

        for segment in &self.segments {
            match segment {
                Segment::Rest => return true,
                Segment::Literal(literal) => {
                    let matched = parts
                        .next()
                        .is_some_and(|part| part.eq_ignore_ascii_case(literal));
                    if !matched {
                        return false;
                    }
                },
                Segment::Param => {
                    if parts.next().is_none() {
                        return false;
                    }
                },
            }
        }

        parts.next().is_none()
    }
}

/// Strip the query string, fragment and trailing slashes; always keep a
/// leading `/`.
pub(crate) fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim().trim_end_matches('/');

    if trimmed.is_empty() {
        String::from("/")
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

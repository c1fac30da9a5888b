//! URL path patterns with named `:param` segments.
//!
//! DESIGN
//! ======
//! Patterns are parsed once when the route table is built. Matching works on
//! whole path segments so `/book/:isbn` never matches `/book` or
//! `/book/123/reviews`. A single trailing `/` is optional; empty segments
//! (`//book`, `/book//123`) never match.
//!
//! The same pattern drives both [`PathPattern::matches`] and the Leptos
//! router, through the [`PossibleRouteMatch`] impl below.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use leptos_router::{PartialPathMatch, PathSegment, PossibleRouteMatch};

/// Parameters captured from a matched path, keyed by parameter name.
pub type Params = BTreeMap<String, String>;

/// Characters that would change how a rendered path is split or parsed.
const RESERVED_IN_PARAM: [char; 3] = ['/', '?', '#'];

/// Errors raised while parsing or rendering a path pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("path pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),
    #[error("path pattern `{0}` contains an empty segment")]
    EmptySegment(String),
    #[error("path pattern `{0}` has a parameter with an empty name")]
    EmptyParamName(String),
    #[error("path pattern `{pattern}` declares `:{name}` more than once")]
    DuplicateParam { pattern: String, name: String },
    #[error("missing value for `:{0}`")]
    MissingParam(String),
    #[error("value `{value}` for `:{name}` contains `/`, `?` or `#`")]
    InvalidParamValue { name: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route path such as `/` or `/book/:isbn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern, validating the leading slash and parameter names.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(raw.to_owned()));
        };
        let parts = split_segments(rest).ok_or_else(|| PatternError::EmptySegment(raw.to_owned()))?;

        let mut segments = Vec::with_capacity(parts.len());
        for part in parts {
            match part.strip_prefix(':') {
                Some("") => return Err(PatternError::EmptyParamName(raw.to_owned())),
                Some(name) => {
                    let seen = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if seen {
                        return Err(PatternError::DuplicateParam { pattern: raw.to_owned(), name: name.to_owned() });
                    }
                    segments.push(Segment::Param(name.to_owned()));
                }
                None => segments.push(Segment::Static(part.to_owned())),
            }
        }

        Ok(Self { raw: raw.to_owned(), segments })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the `:param` segments, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match a concrete path, returning captured parameters on success.
    ///
    /// Query strings and fragments are stripped before matching.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let parts = split_segments(path.strip_prefix('/')?)?;
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(text) if text == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_owned());
                }
            }
        }
        Some(params)
    }

    /// Build a concrete path by substituting `params` into the pattern.
    ///
    /// Values are inserted verbatim, so any value that could not be matched
    /// back as one segment is rejected.
    pub fn render(&self, params: &Params) -> Result<String, PatternError> {
        if self.segments.is_empty() {
            return Ok("/".to_owned());
        }

        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Static(text) => out.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| PatternError::MissingParam(name.clone()))?;
                    if value.contains(RESERVED_IN_PARAM) {
                        return Err(PatternError::InvalidParamValue { name: name.clone(), value: value.clone() });
                    }
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// Route-table patterns are leaf routes: a match consumes the whole path.
impl PossibleRouteMatch for PathPattern {
    fn optional(&self) -> bool {
        false
    }

    fn test<'a>(&self, path: &'a str) -> Option<PartialPathMatch<'a>> {
        let params = if path.is_empty() { self.matches("/") } else { self.matches(path) }?;
        let params = params.into_iter().map(|(name, value)| (Cow::Owned(name), value)).collect();
        Some(PartialPathMatch::new("", params, path))
    }

    fn generate_path(&self, path: &mut Vec<PathSegment>) {
        if self.segments.is_empty() {
            path.push(PathSegment::Unit);
        }
        for segment in &self.segments {
            path.push(match segment {
                Segment::Static(text) => PathSegment::Static(Cow::Owned(text.clone())),
                Segment::Param(name) => PathSegment::Param(Cow::Owned(name.clone())),
            });
        }
    }
}

/// Split the part of a path after its leading `/`.
///
/// One trailing `/` is dropped; any other empty segment yields `None`.
fn split_segments(rest: &str) -> Option<Vec<&str>> {
    if rest.is_empty() {
        return Some(Vec::new());
    }
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    let parts: Vec<&str> = rest.split('/').collect();
    if parts.iter().any(|part| part.is_empty()) {
        return None;
    }
    Some(parts)
}

use regex::Regex;

use crate::error::{DirdocError, Result};
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// How specific a matcher is. Lower values are more specific and win when
/// several schema entries accept the same name.
///
/// The built-in matchers use three levels:
///
/// | level                | used by                              |
/// |----------------------|--------------------------------------|
/// | [`Priority::EXACT`]   | [`match_exact`], plain string names |
/// | [`Priority::PATTERN`] | [`match_regex`], [`match_extension`] |
/// | [`Priority::ANY`]     | [`match_all`]                        |
///
/// Custom matchers may use any value, including ones between or beyond
/// these levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub u32);

impl Priority {
    pub const EXACT:   Priority = Priority(1);
    pub const PATTERN: Priority = Priority(2);
    pub const ANY:     Priority = Priority(3);

    /// Whether `self` beats `other`. Strict: equal priorities do not.
    pub fn beats(self, other: Priority) -> bool {
        self < other
    }
}

// ---------------------------------------------------------------------------
// Built-in matchers
// ---------------------------------------------------------------------------

/// Matches one literal name.
#[derive(Debug, Clone)]
pub struct Exact {
    name: String,
}

impl Matcher for Exact {
    fn priority(&self) -> Priority {
        Priority::EXACT
    }

    fn is_match(&self, name: &str) -> bool {
        name == self.name
    }
}

/// Matches names against a regular expression (unanchored, like
/// `Regex::is_match`).
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Matcher for Pattern {
    fn priority(&self) -> Priority {
        Priority::PATTERN
    }

    fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Matches names ending in an extension, ignoring case.
#[derive(Debug, Clone)]
pub struct Extension {
    suffix: String,
}

impl Matcher for Extension {
    fn priority(&self) -> Priority {
        Priority::PATTERN
    }

    fn is_match(&self, name: &str) -> bool {
        name.to_lowercase().ends_with(&self.suffix)
    }
}

/// Matches every name.
#[derive(Debug, Clone, Copy, Default)]
pub struct Any;

impl Matcher for Any {
    fn priority(&self) -> Priority {
        Priority::ANY
    }

    fn is_match(&self, _name: &str) -> bool {
        true
    }
}

/// A caller-supplied predicate with a caller-assigned priority.
pub struct Custom<F> {
    priority: Priority,
    test:     F,
}

impl<F> Matcher for Custom<F>
where
    F: Fn(&str) -> bool,
{
    fn priority(&self) -> Priority {
        self.priority
    }

    fn is_match(&self, name: &str) -> bool {
        (self.test)(name)
    }
}

// ---------------------------------------------------------------------------
// Factories
// ---------------------------------------------------------------------------

/// Match exactly `name`.
pub fn match_exact(name: impl Into<String>) -> Exact {
    Exact { name: name.into() }
}

/// Match names ending in `extension`, case-insensitively.
///
/// The extension is taken literally, so `".json"` matches `a.json` and
/// `A.JSON` but not `a.json.bak` or `ajson`.
pub fn match_extension(extension: &str) -> Extension {
    Extension { suffix: extension.to_lowercase() }
}

/// Match names against `pattern`.
///
/// # Errors
///
/// Returns [`DirdocError::InvalidPattern`] if `pattern` does not compile.
pub fn match_regex(pattern: &str) -> Result<Pattern> {
    let regex = Regex::new(pattern).map_err(|source| DirdocError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(Pattern { regex })
}

/// Match every name at the lowest built-in priority.
pub fn match_all() -> Any {
    Any
}

/// Match with an arbitrary predicate.
pub fn match_custom<F>(priority: Priority, test: F) -> Custom<F>
where
    F: Fn(&str) -> bool,
{
    Custom { priority, test }
}

// ---------------------------------------------------------------------------
// IntoMatcher
// ---------------------------------------------------------------------------

/// Anything that can name a schema entry: a plain string (shorthand for
/// [`match_exact`]) or an explicit matcher.
pub trait IntoMatcher {
    fn into_matcher(self) -> Box<dyn Matcher>;
}

impl IntoMatcher for &str {
    fn into_matcher(self) -> Box<dyn Matcher> {
        Box::new(match_exact(self))
    }
}

impl IntoMatcher for String {
    fn into_matcher(self) -> Box<dyn Matcher> {
        Box::new(match_exact(self))
    }
}

impl IntoMatcher for Box<dyn Matcher> {
    fn into_matcher(self) -> Box<dyn Matcher> {
        self
    }
}

impl IntoMatcher for Exact {
    fn into_matcher(self) -> Box<dyn Matcher> {
        Box::new(self)
    }
}

impl IntoMatcher for Pattern {
    fn into_matcher(self) -> Box<dyn Matcher> {
        Box::new(self)
    }
}

impl IntoMatcher for Extension {
    fn into_matcher(self) -> Box<dyn Matcher> {
        Box::new(self)
    }
}

impl IntoMatcher for Any {
    fn into_matcher(self) -> Box<dyn Matcher> {
        Box::new(self)
    }
}

impl<F> IntoMatcher for Custom<F>
where
    F: Fn(&str) -> bool + 'static,
{
    fn into_matcher(self) -> Box<dyn Matcher> {
        Box::new(self)
    }
}

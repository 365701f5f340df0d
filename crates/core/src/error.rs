//! Translation error model.

use thiserror::Error;

/// Result type used across the translation engine.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Engine-level error.
///
/// There are exactly two ways a translation can fail: the command names a type
/// nobody registered, or its fields break one or more rules of the contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The `type` discriminator did not match any registered contract.
    #[error("unknown command type: {0}")]
    UnknownCommandType(String),

    /// One or more field rules were violated (all of them are carried).
    #[error("Errors: {0}")]
    ValidationFailure(Violations),
}

impl TranslateError {
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownCommandType(type_name.into())
    }

    pub fn validation(violations: impl Into<Violations>) -> Self {
        Self::ValidationFailure(violations.into())
    }

    /// The violations behind a `ValidationFailure`, if that is what this is.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::ValidationFailure(v) => Some(v),
            Self::UnknownCommandType(_) => None,
        }
    }
}

/// A single rule failure on a single field, or on one element of a list field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    field: String,
    element: Option<usize>,
    rule: String,
    reason: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            element: None,
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Pin the violation to the element at `index` of a list field.
    pub fn at_element(mut self, index: usize) -> Self {
        self.element = Some(index);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn element(&self) -> Option<usize> {
        self.element
    }

    pub fn rule(&self) -> &str {
        &self.rule
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.element {
            Some(idx) => write!(f, "{}[{}] failed on '{}': {}", self.field, idx, self.rule, self.reason),
            None => write!(f, "{} failed on '{}': {}", self.field, self.rule, self.reason),
        }
    }
}

/// Ordered collection of violations, rendered as one comma-joined message.
///
/// The order is whatever order the violations were pushed in; the validator
/// pushes them in contract declaration order so the joined message is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Separator placed between violations when rendering.
    pub const SEPARATOR: &'static str = ", ";

    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }

    /// Join every violation message with `sep`, preserving order.
    pub fn join(&self, sep: &str) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl core::fmt::Display for Violations {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.join(Self::SEPARATOR))
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(value: Vec<Violation>) -> Self {
        Self(value)
    }
}

impl From<Violation> for Violations {
    fn from(value: Violation) -> Self {
        Self(vec![value])
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// An identifier or enumerated value failed to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {message}")]
pub struct ParseError {
    kind: &'static str,
    message: String,
}

impl ParseError {
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

//! Field rules: the vocabulary contracts are written in.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use talentpitch_core::id::HYPHENATED_LEN;

/// A single rule applied to one field value.
///
/// Rules are plain data. The validator applies them in order and keeps going
/// after a failure, except where noted on [`Failure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Present, non-null, and not an empty string.
    Required,
    /// A JSON string.
    Text,
    /// Non-empty string of ASCII letters only.
    Alpha,
    /// Plausible e-mail address.
    Email,
    /// Hyphenated UUID string.
    Uuid,
    /// RFC 3339 timestamp string.
    DateTime,
    /// At least `n` characters (strings) or elements (lists).
    Min(usize),
    /// At most `n` characters (strings) or elements (lists).
    Max(usize),
    /// Exactly one of the listed strings.
    OneOf(&'static [&'static str]),
    /// Apply the inner rules to every element of a list.
    Dive(Vec<Rule>),
}

/// Why a rule rejected a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The value is the wrong JSON type for this rule. Further rules on the same
    /// value are skipped, since they would only repeat the complaint.
    Mismatch(String),
    /// The value has the right type but breaks the rule.
    Invalid(String),
}

impl Failure {
    pub fn reason(&self) -> &str {
        match self {
            Failure::Mismatch(r) | Failure::Invalid(r) => r,
        }
    }
}

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

impl Rule {
    /// Short rule tag, as used in violation messages.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Text => "string",
            Rule::Alpha => "alpha",
            Rule::Email => "email",
            Rule::Uuid => "uuid",
            Rule::DateTime => "datetime",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::OneOf(_) => "oneof",
            Rule::Dive(_) => "dive",
        }
    }

    /// Check a single present value.
    ///
    /// `Dive` is not evaluated here; walking list elements is the validator's job,
    /// so this only confirms the value is a list.
    pub fn check(&self, value: &Value) -> Result<(), Failure> {
        match self {
            Rule::Required => match value {
                Value::Null => Err(Failure::Invalid("value is required".into())),
                Value::String(s) if s.is_empty() => Err(Failure::Invalid("value is required".into())),
                _ => Ok(()),
            },
            Rule::Text => text(value).map(|_| ()),
            Rule::Alpha => {
                let s = text(value)?;
                if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) {
                    Ok(())
                } else {
                    Err(Failure::Invalid(format!("{s:?} must contain only ASCII letters")))
                }
            }
            Rule::Email => {
                let s = text(value)?;
                if EMAIL.is_match(s) {
                    Ok(())
                } else {
                    Err(Failure::Invalid(format!("{s:?} is not a valid email address")))
                }
            }
            Rule::Uuid => {
                let s = text(value)?;
                if s.len() == HYPHENATED_LEN && uuid::Uuid::try_parse(s).is_ok() {
                    Ok(())
                } else {
                    Err(Failure::Invalid(format!("{s:?} is not a valid UUID")))
                }
            }
            Rule::DateTime => {
                let s = text(value)?;
                chrono::DateTime::parse_from_rfc3339(s)
                    .map(|_| ())
                    .map_err(|e| Failure::Invalid(format!("{s:?} is not an RFC 3339 timestamp ({e})")))
            }
            Rule::Min(n) => {
                let (len, unit) = measure(value)?;
                if len >= *n {
                    Ok(())
                } else {
                    Err(Failure::Invalid(format!("must have at least {n} {unit}, found {len}")))
                }
            }
            Rule::Max(n) => {
                let (len, unit) = measure(value)?;
                if len <= *n {
                    Ok(())
                } else {
                    Err(Failure::Invalid(format!("must have at most {n} {unit}, found {len}")))
                }
            }
            Rule::OneOf(allowed) => {
                let s = text(value)?;
                if allowed.contains(&s) {
                    Ok(())
                } else {
                    Err(Failure::Invalid(format!("{s:?} is not one of [{}]", allowed.join(" "))))
                }
            }
            Rule::Dive(_) => match value {
                Value::Array(_) => Ok(()),
                other => Err(Failure::Mismatch(format!("expected a list, found {}", kind(other)))),
            },
        }
    }
}

impl core::fmt::Display for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Rule::Min(n) | Rule::Max(n) => write!(f, "{}={n}", self.name()),
            Rule::OneOf(allowed) => write!(f, "oneof={}", allowed.join(" ")),
            Rule::Dive(inner) => {
                f.write_str("dive")?;
                for rule in inner {
                    write!(f, ",{rule}")?;
                }
                Ok(())
            }
            _ => f.write_str(self.name()),
        }
    }
}

fn text(value: &Value) -> Result<&str, Failure> {
    value
        .as_str()
        .ok_or_else(|| Failure::Mismatch(format!("expected a string, found {}", kind(value))))
}

fn measure(value: &Value) -> Result<(usize, &'static str), Failure> {
    match value {
        Value::String(s) => Ok((s.chars().count(), "characters")),
        Value::Array(items) => Ok((items.len(), "elements")),
        other => Err(Failure::Mismatch(format!(
            "expected a string or list, found {}",
            kind(other)
        ))),
    }
}

/// JSON type name of a value, for diagnostics.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

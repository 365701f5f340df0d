//! Parsed values that remember how they were written.
//!
//! Commands arrive as text. Once a field has been checked, commands and events
//! work with the parsed value, but the event must still carry the exact text the
//! caller sent (`0190B0A4-...` stays upper-case, `+02:00` keeps its offset).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A parsed `T` together with its source text.
///
/// Serializes back to the source text unchanged. Equality and hashing follow
/// the text, so two spellings of the same UUID are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verbatim<T> {
    value: T,
    text: String,
}

impl<T> Verbatim<T> {
    /// Pair a value with the text it was read from.
    ///
    /// `text` must parse back to `value`; use [`str::parse`] when it might not.
    pub fn from_parts(value: T, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: FromStr> FromStr for Verbatim<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse()?;
        Ok(Self::from_parts(value, s))
    }
}

impl<T> fmt::Display for Verbatim<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<T> Serialize for Verbatim<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de, T> Deserialize<'de> for Verbatim<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

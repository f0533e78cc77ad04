//! Validated primitive types shared across the jokes crates.
//!
//! Request payloads arrive as loosely-typed strings (or not at all). The types here turn those
//! into values that carry their validity with them, so downstream code never has to re-check.

/// Errors raised when constructing a validated text value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// No value was supplied at all
    #[error("text is missing")]
    Missing,
    /// A value was supplied but was empty or whitespace-only
    #[error("text cannot be empty")]
    Empty,
}

/// Text guaranteed to contain at least one non-whitespace character.
///
/// Whitespace only matters for validation: the value is kept exactly as it was given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Wraps `input`, failing with [`TextError::Empty`] if it is empty or whitespace-only.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let input = input.as_ref();
        if input.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(input.to_owned()))
    }

    /// Like [`NonEmptyText::new`], but treats `None` as [`TextError::Missing`].
    ///
    /// Useful for optional request fields where "absent" and "blank" are both rejected.
    pub fn from_optional<S: AsRef<str>>(input: Option<S>) -> Result<Self, TextError> {
        match input {
            Some(value) => Self::new(value),
            None => Err(TextError::Missing),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyText {
    type Error = TextError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyText> for String {
    fn from(value: NonEmptyText) -> Self {
        value.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NonEmptyText::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_padded_text_as_given() {
        let text = NonEmptyText::new("  Joke 1 \n").expect("should accept padded text");
        assert_eq!(text.as_str(), "  Joke 1 \n");
    }

    #[test]
    fn test_new_rejects_empty_and_whitespace_only() {
        assert_eq!(NonEmptyText::new(""), Err(TextError::Empty));
        assert_eq!(NonEmptyText::new(" \t "), Err(TextError::Empty));
    }

    #[test]
    fn test_from_optional_distinguishes_missing_from_empty() {
        assert_eq!(
            NonEmptyText::from_optional(None::<String>),
            Err(TextError::Missing)
        );
        assert_eq!(
            NonEmptyText::from_optional(Some("")),
            Err(TextError::Empty)
        );
        assert!(NonEmptyText::from_optional(Some("desc")).is_ok());
    }

    #[test]
    fn test_deserialize_rejects_blank_strings() {
        let ok: NonEmptyText = serde_json::from_str("\"hello\"").expect("valid text");
        assert_eq!(ok.to_string(), "hello");

        let err = serde_json::from_str::<NonEmptyText>("\"   \"").expect_err("blank text");
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_serialize_is_plain_string() {
        let text = NonEmptyText::new("Joke 2").expect("valid text");
        assert_eq!(
            serde_json::to_string(&text).expect("serialises"),
            "\"Joke 2\""
        );
    }
}

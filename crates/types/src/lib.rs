//! Validated text primitives shared by the medbook crates.
//!
//! Every type here is constructed through a checking constructor, so a value that exists is a
//! value that has already passed validation. Deserialising goes through the same constructors.

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input text has more whitespace-separated words than allowed
    #[error("Text has {words} words but at most {max} are allowed")]
    TooManyWords { words: usize, max: usize },
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// Returns `Err(TextError::Empty)` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A short label compared by its normalised form.
///
/// Normalisation trims the input, collapses internal whitespace runs to a single space and
/// lowercases the result, so `" Peanut   Butter"` and `"peanut butter"` are the same label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagLabel(String);

impl TagLabel {
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let normalised = input
            .as_ref()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if normalised.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(normalised))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free text limited to at most `MAX` whitespace-separated words.
///
/// Only the outer whitespace is trimmed; the spacing between words is kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordLimitedText<const MAX: usize>(String);

impl<const MAX: usize> WordLimitedText<MAX> {
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }

        let words = trimmed.split_whitespace().count();
        if words > MAX {
            return Err(TextError::TooManyWords { words, max: MAX });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_text_traits {
    ($ty:ty $(, const $max:ident)?) => {
        impl$(<const $max: usize>)? std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl$(<const $max: usize>)? AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl$(<const $max: usize>)? serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de $(, const $max: usize)?> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                <$ty>::new(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_text_traits!(NonEmptyText);
impl_text_traits!(TagLabel);
impl_text_traits!(WordLimitedText<MAX>, const MAX);

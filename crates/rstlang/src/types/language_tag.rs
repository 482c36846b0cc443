use std::borrow::Borrow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;

use icu_locale_core::LanguageIdentifier;
use serde::Serialize;

use crate::registry::RegisterError;

/// A validated language tag selecting a [`LanguageMapping`](crate::LanguageMapping).
///
/// The tag must be a well-formed BCP-47 language identifier (`en`, `pt-BR`,
/// `zh-Hant`), but it is stored exactly as written. Registry lookups compare
/// tags verbatim, so `en-US` and `en-us` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Validate and wrap a language tag.
    ///
    /// # Example
    ///
    /// ```
    /// use rstlang::LanguageTag;
    ///
    /// let tag = LanguageTag::parse("pt-BR").unwrap();
    /// assert_eq!(tag.as_str(), "pt-BR");
    /// assert!(LanguageTag::parse("not a tag").is_err());
    /// ```
    pub fn parse(tag: impl Into<String>) -> Result<Self, RegisterError> {
        let tag = tag.into();
        match tag.parse::<LanguageIdentifier>() {
            Ok(_) => Ok(Self(tag)),
            Err(e) => Err(RegisterError::InvalidLanguageTag {
                language: tag,
                message: e.to_string(),
            }),
        }
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for LanguageTag {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for LanguageTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for LanguageTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

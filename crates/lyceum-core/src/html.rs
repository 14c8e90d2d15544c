//! Sanitized rich text.
//!
//! Rich-text fields (exam information, about sections, leadership messages)
//! come from an external content store and are rendered as markup. The
//! trust boundary is ingestion: raw HTML is passed through [`ammonia`] when
//! a [`RichText`] is built, and templates only emit unescaped markup for
//! values of this type. Everything else goes through template escaping.

use std::fmt;

use crate::fallback::Blank;

/// HTML that has been through the sanitizer and is safe to embed as-is.
///
/// There is no way to build one without sanitizing, and a `RichText` is
/// never blank: input that is empty or sanitizes down to whitespace yields
/// `None`.
#[derive(Clone, PartialEq, Eq)]
pub struct RichText(String);

impl RichText {
    /// Sanitize externally sourced HTML.
    ///
    /// Scripts, styles, event handler attributes and unknown tags are
    /// stripped; links get `rel="noopener noreferrer"`.
    pub fn from_untrusted(raw: &str) -> Option<Self> {
        if raw.is_blank() {
            return None;
        }

        let cleaned = ammonia::clean(raw);
        if cleaned.is_blank() {
            return None;
        }

        Some(Self(cleaned))
    }

    /// Sanitize an optional field, treating `None` and blank input alike.
    pub fn from_optional(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::from_untrusted)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RichText").field(&self.0).finish()
    }
}

impl AsRef<str> for RichText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

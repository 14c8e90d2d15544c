//! Stored value or nothing.
//!
//! Every dynamic field on a page has a hard-coded default. A stored value
//! wins only when it is present *and* non-empty: an absent field and a
//! blank one both resolve to the default.

/// Values that can be "present but empty".
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

/// Blank filtering over optional stored values.
pub trait Fallback<T> {
    /// `Some` only when the value is present and not blank.
    fn non_blank(self) -> Option<T>;
}

impl<T: Blank> Fallback<T> for Option<T> {
    fn non_blank(self) -> Option<T> {
        self.filter(|value| !value.is_blank())
    }
}

//! Identifier newtypes.
//!
//! Both kinds of id are opaque strings owned by the content store. A
//! [`RecordId`] keys rendered cards; a [`FileId`] is interpolated into a URL
//! path and is therefore restricted to URL-safe characters.

use std::fmt;

use crate::error::ModelError;

/// Path of the file-serving endpoint. Files themselves are served elsewhere.
pub const FILES_ENDPOINT: &str = "/api/files";

/// Identifier of a stored record.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidRecordId(id));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

/// Reference to a stored file, served at `/api/files/{id}`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FileId(String);

impl FileId {
    /// Accepts ASCII letters, digits, `-` and `_` only.
    pub fn parse(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(ModelError::InvalidFileId(id));
        }
        Ok(Self(id))
    }

    /// Parse an optional reference, treating a blank value as absent.
    pub fn parse_optional(id: Option<String>) -> Result<Option<Self>, ModelError> {
        match id {
            Some(id) if id.trim().is_empty() => Ok(None),
            Some(id) => Self::parse(id).map(Some),
            None => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Download/view link for this file.
    pub fn url(&self) -> String {
        format!("{FILES_ENDPOINT}/{}", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

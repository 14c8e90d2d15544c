//! Examination schedules and results.
//!
//! Both collections store the same shape: a titled, dated reference to an
//! uploaded file.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use validator::Validate;

use crate::error::{ModelError, required_text};
use crate::ids::{FileId, RecordId};

#[derive(Debug, Clone, FromRow, Validate)]
pub struct ExamFileRow {
    #[validate(length(min = 1, max = 128))]
    pub id: String,
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    pub file_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamFile {
    pub id: RecordId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub file_id: FileId,
}

pub type ExamSchedule = ExamFile;
pub type ExamResult = ExamFile;

impl ExamFile {
    /// Convert a row from `collection`, validating every field.
    pub fn from_row(collection: &'static str, row: ExamFileRow) -> Result<Self, ModelError> {
        row.validate()
            .map_err(|e| ModelError::from_validation(collection, &e))?;

        let title = required_text(collection, "title", &row.title)?;

        Ok(Self {
            id: RecordId::new(row.id)?,
            title,
            created_at: row.created_at,
            file_id: FileId::parse(row.file_id)?,
        })
    }

    pub fn download_url(&self) -> String {
        self.file_id.url()
    }
}

/// Newest first, ties broken by id so the order is stable.
pub fn sort_newest_first(files: &mut [ExamFile]) {
    files.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

//! Directors and leadership.

use lyceum_core::{Fallback, RichText};
use sqlx::FromRow;
use validator::Validate;

use crate::error::{ModelError, required_text};
use crate::ids::{FileId, RecordId};

#[derive(Debug, Clone, FromRow, Validate)]
pub struct DirectorRow {
    #[validate(length(min = 1, max = 128))]
    pub id: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub role: String,
    #[validate(length(max = 500))]
    pub qualification: Option<String>,
    pub image_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Director {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub qualification: Option<String>,
    pub image_id: Option<FileId>,
}

impl TryFrom<DirectorRow> for Director {
    type Error = ModelError;

    fn try_from(row: DirectorRow) -> Result<Self, Self::Error> {
        row.validate()
            .map_err(|e| ModelError::from_validation("directors", &e))?;

        Ok(Self {
            id: RecordId::new(row.id)?,
            name: required_text("directors", "name", &row.name)?,
            role: required_text("directors", "role", &row.role)?,
            qualification: row.qualification.map(|q| q.trim().to_string()).non_blank(),
            image_id: FileId::parse_optional(row.image_id)?,
        })
    }
}

#[derive(Debug, Clone, FromRow, Validate)]
pub struct LeaderRow {
    #[validate(length(min = 1, max = 128))]
    pub id: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub role: String,
    pub message: Option<String>,
    pub image_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leader {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub message: Option<RichText>,
    pub image_id: Option<FileId>,
}

impl TryFrom<LeaderRow> for Leader {
    type Error = ModelError;

    fn try_from(row: LeaderRow) -> Result<Self, Self::Error> {
        row.validate()
            .map_err(|e| ModelError::from_validation("leadership", &e))?;

        Ok(Self {
            id: RecordId::new(row.id)?,
            name: required_text("leadership", "name", &row.name)?,
            role: required_text("leadership", "role", &row.role)?,
            message: RichText::from_optional(row.message.as_deref()),
            image_id: FileId::parse_optional(row.image_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_optional_fields() {
        let director = Director::try_from(DirectorRow {
            id: "d1".into(),
            name: "Dr. A. Deshmukh".into(),
            role: "Chairman".into(),
            qualification: Some("   ".into()),
            image_id: None,
        })
        .unwrap();

        assert_eq!(director.qualification, None);
        assert_eq!(director.image_id, None);
    }

    #[test]
    fn test_director_missing_name_is_rejected() {
        let err = Director::try_from(DirectorRow {
            id: "d1".into(),
            name: String::new(),
            role: "Chairman".into(),
            qualification: None,
            image_id: None,
        })
        .unwrap_err();
        assert!(matches!(err, ModelError::Invalid { collection: "directors", .. }));
    }

    #[test]
    fn test_director_whitespace_name_and_role_are_rejected() {
        let err = Director::try_from(DirectorRow {
            id: "d1".into(),
            name: "   ".into(),
            role: "  ".into(),
            qualification: None,
            image_id: None,
        })
        .unwrap_err();
        assert!(matches!(err, ModelError::Invalid { collection: "directors", .. }));
        assert!(err.to_string().contains("name is blank"));
    }

    #[test]
    fn test_leader_whitespace_role_is_rejected() {
        let err = Leader::try_from(LeaderRow {
            id: "l1".into(),
            name: "S. Patil".into(),
            role: " \t ".into(),
            message: None,
            image_id: None,
        })
        .unwrap_err();
        assert!(matches!(err, ModelError::Invalid { collection: "leadership", .. }));
        assert!(err.to_string().contains("role is blank"));
    }

    #[test]
    fn test_names_are_trimmed() {
        let leader = Leader::try_from(LeaderRow {
            id: "l1".into(),
            name: "  S. Patil ".into(),
            role: "Principal ".into(),
            message: None,
            image_id: None,
        })
        .unwrap();
        assert_eq!(leader.name, "S. Patil");
        assert_eq!(leader.role, "Principal");
    }

    #[test]
    fn test_leader_message_is_sanitized() {
        let leader = Leader::try_from(LeaderRow {
            id: "l1".into(),
            name: "S. Patil".into(),
            role: "Principal".into(),
            message: Some("<p>Welcome</p><img src=x onerror=alert(1)>".into()),
            image_id: Some("img9".into()),
        })
        .unwrap();

        let message = leader.message.unwrap();
        assert!(message.as_str().starts_with("<p>Welcome</p>"));
        assert!(!message.as_str().contains("onerror"));
        assert_eq!(leader.image_id.unwrap().url(), "/api/files/img9");
    }
}

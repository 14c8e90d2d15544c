//! Section rich text from the `content` collection.

use lyceum_core::RichText;
use sqlx::FromRow;
use validator::Validate;

use crate::error::ModelError;

/// Section ids used by the pages.
pub mod sections {
    pub const EXAMS: &str = "exams";
    pub const INSTITUTE: &str = "institute";
    pub const SOCIETY: &str = "society";
    pub const VISION: &str = "vision";
    pub const MISSION: &str = "mission";

    /// Sections that make up the about document.
    pub const ABOUT: [&str; 4] = [INSTITUTE, SOCIETY, VISION, MISSION];
}

#[derive(Debug, Clone, FromRow, Validate)]
pub struct ContentRow {
    #[validate(length(min = 1, max = 64))]
    pub section: String,
    pub body: Option<String>,
}

/// Rich text for one named section. `body` is `None` when the stored body
/// is empty or sanitizes to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub section: String,
    pub body: Option<RichText>,
}

impl TryFrom<ContentRow> for ContentBlock {
    type Error = ModelError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        row.validate()
            .map_err(|e| ModelError::from_validation("content", &e))?;

        Ok(Self {
            section: row.section,
            body: RichText::from_optional(row.body.as_deref()),
        })
    }
}

/// The about document, assembled from the about section blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutContent {
    pub institute: Option<RichText>,
    pub society: Option<RichText>,
    pub vision: Option<RichText>,
    pub mission: Option<RichText>,
}

impl AboutContent {
    /// Pick the about sections out of `blocks`. Unknown sections are
    /// ignored; when a section appears twice the last one wins.
    pub fn from_blocks(blocks: impl IntoIterator<Item = ContentBlock>) -> Self {
        let mut about = Self::default();
        for block in blocks {
            let slot = match block.section.as_str() {
                sections::INSTITUTE => &mut about.institute,
                sections::SOCIETY => &mut about.society,
                sections::VISION => &mut about.vision,
                sections::MISSION => &mut about.mission,
                _ => continue,
            };
            *slot = block.body;
        }
        about
    }
}

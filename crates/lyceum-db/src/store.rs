use std::sync::Arc;

use async_trait::async_trait;
use lyceum_models::{ContentBlock, Director, ExamResult, ExamSchedule, Leader, ModelError};
use thiserror::Error;

/// Collection (table) names.
pub mod collections {
    pub const CONTENT: &str = "content";
    pub const EXAM_SCHEDULES: &str = "exam_schedules";
    pub const EXAM_RESULTS: &str = "exam_results";
    pub const DIRECTORS: &str = "directors";
    pub const LEADERSHIP: &str = "leadership";
}

/// Content could not be read.
///
/// Pages do not distinguish between the variants: any of them means the
/// dynamic part of the page is unavailable.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query against {collection} failed: {source}")]
    Query {
        collection: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("malformed record: {0}")]
    Malformed(#[from] ModelError),
}

impl StoreError {
    pub fn query(collection: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Query { collection, source }
    }
}

/// Read-only view over the site's collections.
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// The content block for `section`, if one exists.
    async fn find_content(&self, section: &str) -> Result<Option<ContentBlock>, StoreError>;

    /// Content blocks for every section in `sections` that exists.
    async fn find_sections(&self, sections: &[&str]) -> Result<Vec<ContentBlock>, StoreError>;

    /// Exam schedules, newest first.
    async fn list_exam_schedules(&self) -> Result<Vec<ExamSchedule>, StoreError>;

    /// Exam results, newest first.
    async fn list_exam_results(&self) -> Result<Vec<ExamResult>, StoreError>;

    async fn list_directors(&self) -> Result<Vec<Director>, StoreError>;

    async fn list_leadership(&self) -> Result<Vec<Leader>, StoreError>;
}

pub type DynSiteStore = Arc<dyn SiteStore>;

//! Store doubles for tests.

use async_trait::async_trait;
use lyceum_models::{ContentBlock, Director, ExamResult, ExamSchedule, Leader};

use crate::memory::MemoryStore;
use crate::store::{SiteStore, StoreError, collections};

/// Wraps a [`MemoryStore`] and fails queries against selected collections
/// with a pool timeout, the way an unreachable database would.
#[derive(Clone, Debug)]
pub struct FailingStore {
    inner: MemoryStore,
    failing: Vec<&'static str>,
}

impl FailingStore {
    /// Every query fails.
    pub fn all() -> Self {
        Self {
            inner: MemoryStore::new(),
            failing: vec![
                collections::CONTENT,
                collections::EXAM_SCHEDULES,
                collections::EXAM_RESULTS,
                collections::DIRECTORS,
                collections::LEADERSHIP,
            ],
        }
    }

    /// Only queries against `collection` fail; the rest are served by `inner`.
    pub fn only(collection: &'static str, inner: MemoryStore) -> Self {
        Self {
            inner,
            failing: vec![collection],
        }
    }

    fn check(&self, collection: &'static str) -> Result<(), StoreError> {
        if self.failing.contains(&collection) {
            return Err(StoreError::Query {
                collection,
                source: sqlx::Error::PoolTimedOut,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SiteStore for FailingStore {
    async fn find_content(&self, section: &str) -> Result<Option<ContentBlock>, StoreError> {
        self.check(collections::CONTENT)?;
        self.inner.find_content(section).await
    }

    async fn find_sections(&self, sections: &[&str]) -> Result<Vec<ContentBlock>, StoreError> {
        self.check(collections::CONTENT)?;
        self.inner.find_sections(sections).await
    }

    async fn list_exam_schedules(&self) -> Result<Vec<ExamSchedule>, StoreError> {
        self.check(collections::EXAM_SCHEDULES)?;
        self.inner.list_exam_schedules().await
    }

    async fn list_exam_results(&self) -> Result<Vec<ExamResult>, StoreError> {
        self.check(collections::EXAM_RESULTS)?;
        self.inner.list_exam_results().await
    }

    async fn list_directors(&self) -> Result<Vec<Director>, StoreError> {
        self.check(collections::DIRECTORS)?;
        self.inner.list_directors().await
    }

    async fn list_leadership(&self) -> Result<Vec<Leader>, StoreError> {
        self.check(collections::LEADERSHIP)?;
        self.inner.list_leadership().await
    }
}

//! In-process store.
//!
//! Holds already-validated records. With no records at all it is the
//! store the server falls back to when no database is configured, in
//! which case every page renders its static defaults.

use async_trait::async_trait;
use lyceum_models::exams::sort_newest_first;
use lyceum_models::{ContentBlock, Director, ExamFile, ExamResult, ExamSchedule, Leader};

use crate::store::{SiteStore, StoreError};

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    content: Vec<ContentBlock>,
    schedules: Vec<ExamFile>,
    results: Vec<ExamFile>,
    directors: Vec<Director>,
    leadership: Vec<Leader>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the block for `block.section`.
    pub fn with_content(mut self, block: ContentBlock) -> Self {
        self.content.retain(|existing| existing.section != block.section);
        self.content.push(block);
        self
    }

    pub fn with_schedule(mut self, schedule: ExamSchedule) -> Self {
        self.schedules.push(schedule);
        self
    }

    pub fn with_result(mut self, result: ExamResult) -> Self {
        self.results.push(result);
        self
    }

    pub fn with_director(mut self, director: Director) -> Self {
        self.directors.push(director);
        self
    }

    pub fn with_leader(mut self, leader: Leader) -> Self {
        self.leadership.push(leader);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
            && self.schedules.is_empty()
            && self.results.is_empty()
            && self.directors.is_empty()
            && self.leadership.is_empty()
    }
}

#[async_trait]
impl SiteStore for MemoryStore {
    async fn find_content(&self, section: &str) -> Result<Option<ContentBlock>, StoreError> {
        Ok(self
            .content
            .iter()
            .find(|block| block.section == section)
            .cloned())
    }

    async fn find_sections(&self, sections: &[&str]) -> Result<Vec<ContentBlock>, StoreError> {
        Ok(self
            .content
            .iter()
            .filter(|block| sections.contains(&block.section.as_str()))
            .cloned()
            .collect())
    }

    async fn list_exam_schedules(&self) -> Result<Vec<ExamSchedule>, StoreError> {
        let mut schedules = self.schedules.clone();
        sort_newest_first(&mut schedules);
        Ok(schedules)
    }

    async fn list_exam_results(&self) -> Result<Vec<ExamResult>, StoreError> {
        let mut results = self.results.clone();
        sort_newest_first(&mut results);
        Ok(results)
    }

    async fn list_directors(&self) -> Result<Vec<Director>, StoreError> {
        Ok(self.directors.clone())
    }

    async fn list_leadership(&self) -> Result<Vec<Leader>, StoreError> {
        Ok(self.leadership.clone())
    }
}

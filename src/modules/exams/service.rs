use lyceum_db::{SiteStore, StoreError};
use lyceum_models::sections;
use lyceum_observability::track_page_fallback;
use tracing::{error, instrument};

use crate::modules::exams::model::ExamPageData;

pub const PAGE: &str = "exams";

pub struct ExamService;

impl ExamService {
    /// Load the exams page content.
    ///
    /// Never fails: if any query fails the whole page degrades to
    /// [`ExamPageData::default`], and the failure is logged.
    #[instrument(skip(store))]
    pub async fn load_exam_page(store: &dyn SiteStore) -> ExamPageData {
        match Self::fetch(store).await {
            Ok(data) => data,
            Err(e) => {
                error!(page = PAGE, error = %e, "Error fetching exam data");
                track_page_fallback(PAGE);
                ExamPageData::default()
            }
        }
    }

    async fn fetch(store: &dyn SiteStore) -> Result<ExamPageData, StoreError> {
        let (info, schedules, results) = tokio::try_join!(
            store.find_content(sections::EXAMS),
            store.list_exam_schedules(),
            store.list_exam_results(),
        )?;

        Ok(ExamPageData {
            exam_info: info.and_then(|block| block.body),
            schedules,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lyceum_core::RichText;
    use lyceum_db::MemoryStore;
    use lyceum_db::testing::FailingStore;
    use lyceum_db::collections;
    use lyceum_models::{ContentBlock, ExamFile, ExamFileRow};

    fn exam(collection: &'static str, id: &str, day: u32) -> ExamFile {
        ExamFile::from_row(
            collection,
            ExamFileRow {
                id: id.to_string(),
                title: format!("Exam {id}"),
                file_id: format!("file{id}"),
                created_at: Utc.with_ymd_and_hms(2025, 5, day, 8, 0, 0).unwrap(),
            },
        )
        .unwrap()
    }

    fn populated() -> MemoryStore {
        MemoryStore::new()
            .with_content(ContentBlock {
                section: "exams".to_string(),
                body: RichText::from_untrusted("<p>Stored guidelines</p>"),
            })
            .with_schedule(exam("exam_schedules", "s1", 1))
            .with_schedule(exam("exam_schedules", "s2", 2))
            .with_result(exam("exam_results", "r1", 3))
    }

    #[tokio::test]
    async fn test_loads_all_sections() {
        let data = ExamService::load_exam_page(&populated()).await;

        assert_eq!(data.exam_info.unwrap().as_str(), "<p>Stored guidelines</p>");
        assert_eq!(data.schedules.len(), 2);
        assert_eq!(data.schedules[0].id.as_str(), "s2");
        assert_eq!(data.results.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_store_gives_empty_page() {
        let data = ExamService::load_exam_page(&MemoryStore::new()).await;
        assert_eq!(data, ExamPageData::default());
    }

    #[tokio::test]
    async fn test_store_failure_gives_default() {
        let data = ExamService::load_exam_page(&FailingStore::all()).await;
        assert_eq!(data, ExamPageData::default());
    }

    #[tokio::test]
    async fn test_one_failing_query_degrades_the_whole_page() {
        let store = FailingStore::only(collections::EXAM_RESULTS, populated());
        let data = ExamService::load_exam_page(&store).await;

        assert!(data.exam_info.is_none());
        assert!(data.schedules.is_empty());
        assert!(data.results.is_empty());
    }
}

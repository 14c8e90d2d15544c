//! PostgreSQL-backed store.
//!
//! Every query is read-only and runs inside a `db.query` span. Rows are
//! decoded into `*Row` structs and validated into domain records before
//! they leave this module; one malformed row fails the whole query.

use async_trait::async_trait;
use lyceum_models::{
    ContentBlock, ContentRow, Director, DirectorRow, ExamFile, ExamFileRow, ExamResult,
    ExamSchedule, Leader, LeaderRow, ModelError,
};
use sqlx::PgPool;
use tracing::{Instrument, instrument};

use crate::store::{SiteStore, StoreError, collections};

macro_rules! query_span {
    ($operation:expr, $table:expr) => {
        tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = $operation,
            db.sql.table = $table,
            otel.kind = "client"
        )
    };
}

#[derive(Clone, Debug)]
pub struct PgSiteStore {
    pool: PgPool,
}

impl PgSiteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn list_exam_files(
        &self,
        collection: &'static str,
        sql: &'static str,
    ) -> Result<Vec<ExamFile>, StoreError> {
        let rows = sqlx::query_as::<_, ExamFileRow>(sql)
            .fetch_all(&self.pool)
            .instrument(query_span!("SELECT", collection))
            .await
            .map_err(StoreError::query(collection))?;

        let files = rows
            .into_iter()
            .map(|row| ExamFile::from_row(collection, row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(files)
    }
}

#[async_trait]
impl SiteStore for PgSiteStore {
    #[instrument(skip(self))]
    async fn find_content(&self, section: &str) -> Result<Option<ContentBlock>, StoreError> {
        let row = sqlx::query_as::<_, ContentRow>(
            "SELECT section, body FROM content WHERE section = $1",
        )
        .bind(section)
        .fetch_optional(&self.pool)
        .instrument(query_span!("SELECT", collections::CONTENT))
        .await
        .map_err(StoreError::query(collections::CONTENT))?;

        Ok(row.map(ContentBlock::try_from).transpose()?)
    }

    #[instrument(skip(self))]
    async fn find_sections(&self, sections: &[&str]) -> Result<Vec<ContentBlock>, StoreError> {
        let sections: Vec<String> = sections.iter().map(|s| s.to_string()).collect();

        let rows = sqlx::query_as::<_, ContentRow>(
            "SELECT section, body FROM content WHERE section = ANY($1) ORDER BY section",
        )
        .bind(sections)
        .fetch_all(&self.pool)
        .instrument(query_span!("SELECT", collections::CONTENT))
        .await
        .map_err(StoreError::query(collections::CONTENT))?;

        let blocks = rows
            .into_iter()
            .map(ContentBlock::try_from)
            .collect::<Result<Vec<_>, ModelError>>()?;

        Ok(blocks)
    }

    #[instrument(skip(self))]
    async fn list_exam_schedules(&self) -> Result<Vec<ExamSchedule>, StoreError> {
        self.list_exam_files(
            collections::EXAM_SCHEDULES,
            r#"SELECT id, title, file_id, created_at
               FROM exam_schedules
               ORDER BY created_at DESC, id"#,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn list_exam_results(&self) -> Result<Vec<ExamResult>, StoreError> {
        self.list_exam_files(
            collections::EXAM_RESULTS,
            r#"SELECT id, title, file_id, created_at
               FROM exam_results
               ORDER BY created_at DESC, id"#,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn list_directors(&self) -> Result<Vec<Director>, StoreError> {
        let rows = sqlx::query_as::<_, DirectorRow>(
            r#"SELECT id, name, role, qualification, image_id
               FROM directors
               ORDER BY created_at, id"#,
        )
        .fetch_all(&self.pool)
        .instrument(query_span!("SELECT", collections::DIRECTORS))
        .await
        .map_err(StoreError::query(collections::DIRECTORS))?;

        let directors = rows
            .into_iter()
            .map(Director::try_from)
            .collect::<Result<Vec<_>, ModelError>>()?;

        Ok(directors)
    }

    #[instrument(skip(self))]
    async fn list_leadership(&self) -> Result<Vec<Leader>, StoreError> {
        let rows = sqlx::query_as::<_, LeaderRow>(
            r#"SELECT id, name, role, message, image_id
               FROM leadership
               ORDER BY created_at, id"#,
        )
        .fetch_all(&self.pool)
        .instrument(query_span!("SELECT", collections::LEADERSHIP))
        .await
        .map_err(StoreError::query(collections::LEADERSHIP))?;

        let leaders = rows
            .into_iter()
            .map(Leader::try_from)
            .collect::<Result<Vec<_>, ModelError>>()?;

        Ok(leaders)
    }
}

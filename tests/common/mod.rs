use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use fake::Fake;
use fake::faker::name::en::Name;
use http_body_util::BodyExt;
use lyceum::lyceum_config::SiteConfig;
use lyceum::lyceum_db::SiteStore;
use lyceum::lyceum_db::collections;
use lyceum::lyceum_models::{
    ContentBlock, ContentRow, Director, DirectorRow, ExamFile, ExamFileRow, Leader, LeaderRow,
};
use lyceum::router::init_router;
use lyceum::state::AppState;
use tower::ServiceExt;

/// Site settings with static assets served from the test fixtures.
pub fn test_site() -> SiteConfig {
    SiteConfig {
        public_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/public")),
        ..SiteConfig::default()
    }
}

pub fn setup_test_app(store: impl SiteStore + 'static) -> axum::Router {
    let state = AppState::new(Arc::new(store), test_site());
    init_router(state, None)
}

/// GET `uri` and return the status and body text.
pub async fn get_page(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
/// A person's name with only letters and spaces, so it appears verbatim in
/// escaped HTML.
pub fn generate_name() -> String {
    let name: String = Name().fake();
    name.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect()
}

#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn content(section: &str, body: &str) -> ContentBlock {
    ContentBlock::try_from(ContentRow {
        section: section.to_string(),
        body: Some(body.to_string()),
    })
    .unwrap()
}

#[allow(dead_code)]
pub fn exam_schedule(id: &str, title: &str, file_id: &str, created_at: DateTime<Utc>) -> ExamFile {
    exam_file(collections::EXAM_SCHEDULES, id, title, file_id, created_at)
}

#[allow(dead_code)]
pub fn exam_result(id: &str, title: &str, file_id: &str, created_at: DateTime<Utc>) -> ExamFile {
    exam_file(collections::EXAM_RESULTS, id, title, file_id, created_at)
}

#[allow(dead_code)]
fn exam_file(
    collection: &'static str,
    id: &str,
    title: &str,
    file_id: &str,
    created_at: DateTime<Utc>,
) -> ExamFile {
    ExamFile::from_row(
        collection,
        ExamFileRow {
            id: id.to_string(),
            title: title.to_string(),
            file_id: file_id.to_string(),
            created_at,
        },
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn director(id: &str, name: &str, qualification: Option<&str>, image_id: Option<&str>) -> Director {
    Director::try_from(DirectorRow {
        id: id.to_string(),
        name: name.to_string(),
        role: "Trustee".to_string(),
        qualification: qualification.map(str::to_string),
        image_id: image_id.map(str::to_string),
    })
    .unwrap()
}

#[allow(dead_code)]
pub fn leader(id: &str, name: &str, role: &str, message: Option<&str>) -> Leader {
    Leader::try_from(LeaderRow {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        message: message.map(str::to_string),
        image_id: None,
    })
    .unwrap()
}

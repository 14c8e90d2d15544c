use askama::Template;
use lyceum_config::SiteConfig;
use lyceum_core::RichText;
use lyceum_models::{ExamFile, ExamResult, ExamSchedule};

use crate::views::format::display_date;
use crate::views::{CardList, CardView, EmptyState, Icon, SectionHero};

/// Everything the exams page reads from the store.
///
/// `Default` is the shape shown when the store is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamPageData {
    pub exam_info: Option<RichText>,
    pub schedules: Vec<ExamSchedule>,
    pub results: Vec<ExamResult>,
}

#[derive(Template)]
#[template(path = "exams/file_card.html")]
pub struct ExamFileCard<'a> {
    pub file: &'a ExamFile,
    pub icon: Icon,
    pub date_line: String,
    pub link_label: &'static str,
}

impl<'a> ExamFileCard<'a> {
    pub fn schedule(file: &'a ExamSchedule) -> Self {
        Self {
            file,
            icon: Icon::Calendar,
            date_line: format!("Added on {}", display_date(&file.created_at)),
            link_label: "Download Schedule",
        }
    }

    pub fn result(file: &'a ExamResult) -> Self {
        Self {
            file,
            icon: Icon::FileText,
            date_line: format!("Published on {}", display_date(&file.created_at)),
            link_label: "Download Result",
        }
    }
}

impl CardView for ExamFileCard<'_> {
    fn key(&self) -> &str {
        self.file.id.as_str()
    }

    fn render_card(&self) -> askama::Result<String> {
        self.render()
    }
}

fn schedules_empty_state() -> EmptyState {
    EmptyState::new(Icon::Calendar, "No Examination Schedules Available").with_message(
        "Examination schedules will be uploaded here when available. Please check back later.",
    )
}

fn results_empty_state() -> EmptyState {
    EmptyState::new(Icon::FileText, "No Results Available").with_message(
        "Examination results will be uploaded here when available. Please check back later.",
    )
}

#[derive(Template)]
#[template(path = "exams/page.html")]
pub struct ExamsPage {
    pub page_title: String,
    pub hero: SectionHero,
    pub institute_name: String,
    pub exam_info: Option<RichText>,
    pub schedules: CardList,
    pub results: CardList,
    pub exam_email: String,
    pub exam_phone: String,
}

impl ExamsPage {
    pub fn build(site: &SiteConfig, data: &ExamPageData) -> askama::Result<Self> {
        Ok(Self {
            page_title: "Examinations".to_string(),
            hero: SectionHero::new("Examinations", site.hero_image.as_deref()),
            institute_name: site.institute_name.clone(),
            exam_info: data.exam_info.clone(),
            schedules: CardList::build(
                data.schedules.iter().map(ExamFileCard::schedule),
                schedules_empty_state(),
            )?,
            results: CardList::build(
                data.results.iter().map(ExamFileCard::result),
                results_empty_state(),
            )?,
            exam_email: site.exam_email.clone(),
            exam_phone: site.exam_phone.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lyceum_models::ExamFileRow;

    fn file(id: &str, title: &str, file_id: &str) -> ExamFile {
        ExamFile::from_row(
            "exam_results",
            ExamFileRow {
                id: id.to_string(),
                title: title.to_string(),
                file_id: file_id.to_string(),
                created_at: Utc.with_ymd_and_hms(2025, 3, 7, 10, 0, 0).unwrap(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_result_card() {
        let result = file("1", "Sem1", "f1");
        let html = ExamFileCard::result(&result).render().unwrap();

        assert!(html.contains("Sem1"));
        assert!(html.contains("Published on 3/7/2025"));
        assert!(html.contains("href=\"/api/files/f1\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("Download Result"));
    }

    #[test]
    fn test_schedule_card() {
        let schedule = file("s1", "Winter Timetable", "abc123");
        let html = ExamFileCard::schedule(&schedule).render().unwrap();

        assert!(html.contains("Added on 3/7/2025"));
        assert!(html.contains("href=\"/api/files/abc123\""));
        assert!(html.contains("Download Schedule"));
        assert!(html.contains("icon-calendar"));
    }

    #[test]
    fn test_default_page_shows_every_fallback() {
        let page = ExamsPage::build(&SiteConfig::default(), &ExamPageData::default()).unwrap();
        let html = page.render().unwrap();

        assert!(html.contains("Examination Pattern"));
        assert!(html.contains("Theory examinations - 40%"));
        assert!(html.contains("No Examination Schedules Available"));
        assert!(html.contains("No Results Available"));
        assert!(html.contains("Important Notes"));
        assert!(!html.contains("data-key="));
    }

    #[test]
    fn test_stored_info_replaces_guidelines() {
        let data = ExamPageData {
            exam_info: RichText::from_untrusted("<p>Custom exam rules</p>"),
            ..ExamPageData::default()
        };
        let html = ExamsPage::build(&SiteConfig::default(), &data)
            .unwrap()
            .render()
            .unwrap();

        assert!(html.contains("<p>Custom exam rules</p>"));
        assert!(!html.contains("Examination Pattern"));
        // The notes box is not part of the replaceable text.
        assert!(html.contains("Important Notes"));
    }
}

use askama::Template;
use lyceum_config::SiteConfig;
use lyceum_core::RichText;
use lyceum_models::{AboutContent, Director, Leader};
use std::fmt;
use std::str::FromStr;

use crate::views::{CardList, CardView, EmptyState, Icon, SectionHero};

/// Image shown for directors without a photo. Attribute-encoded.
pub const DIRECTOR_PLACEHOLDER: &str = "/placeholder.svg?height=128&amp;width=128";
/// Image shown for leaders without a photo.
pub const LEADER_PLACEHOLDER: &str = "/placeholder-user.jpg";

/// Everything the about pages read from the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutPageData {
    pub about: AboutContent,
    pub directors: Vec<Director>,
    pub leadership: Vec<Leader>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutSection {
    Institute,
    Society,
    Vision,
    Directors,
    Leadership,
}

impl AboutSection {
    pub const ALL: [AboutSection; 5] = [
        AboutSection::Institute,
        AboutSection::Society,
        AboutSection::Vision,
        AboutSection::Directors,
        AboutSection::Leadership,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            AboutSection::Institute => "institute",
            AboutSection::Society => "society",
            AboutSection::Vision => "vision",
            AboutSection::Directors => "directors",
            AboutSection::Leadership => "leadership",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AboutSection::Institute => "Institute",
            AboutSection::Society => "Society",
            AboutSection::Vision => "Vision & Mission",
            AboutSection::Directors => "Directors",
            AboutSection::Leadership => "Leadership",
        }
    }
}

impl fmt::Display for AboutSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown about section: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for AboutSection {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AboutSection::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Heading plus a rich-text body (institute, society).
#[derive(Template)]
#[template(path = "about/text_section.html")]
pub struct TextSection {
    pub heading: String,
    pub body: Option<RichText>,
}

#[derive(Template)]
#[template(path = "about/vision_section.html")]
pub struct VisionSection {
    pub vision: Option<RichText>,
    pub mission: Option<RichText>,
}

#[derive(Template)]
#[template(path = "about/people_section.html")]
pub struct PeopleSection {
    pub heading: Option<&'static str>,
    pub people: CardList,
}

#[derive(Template)]
#[template(path = "about/director_card.html")]
pub struct DirectorCard<'a> {
    pub director: &'a Director,
    pub image_url: String,
}

impl<'a> DirectorCard<'a> {
    pub fn new(director: &'a Director) -> Self {
        let image_url = director
            .image_id
            .as_ref()
            .map(|id| id.url())
            .unwrap_or_else(|| DIRECTOR_PLACEHOLDER.to_string());
        Self {
            director,
            image_url,
        }
    }
}

impl CardView for DirectorCard<'_> {
    fn key(&self) -> &str {
        self.director.id.as_str()
    }

    fn render_card(&self) -> askama::Result<String> {
        self.render()
    }
}

#[derive(Template)]
#[template(path = "about/leader_card.html")]
pub struct LeaderCard<'a> {
    pub leader: &'a Leader,
    pub image_url: String,
}

impl<'a> LeaderCard<'a> {
    pub fn new(leader: &'a Leader) -> Self {
        let image_url = leader
            .image_id
            .as_ref()
            .map(|id| id.url())
            .unwrap_or_else(|| LEADER_PLACEHOLDER.to_string());
        Self { leader, image_url }
    }
}

impl CardView for LeaderCard<'_> {
    fn key(&self) -> &str {
        self.leader.id.as_str()
    }

    fn render_card(&self) -> askama::Result<String> {
        self.render()
    }
}

pub struct SectionTab {
    pub href: String,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "about/page.html")]
pub struct AboutPage {
    pub page_title: String,
    pub hero: SectionHero,
    pub institute_name: String,
    pub tabs: Vec<SectionTab>,
    pub body: String,
}

impl AboutPage {
    pub fn build(
        section: AboutSection,
        site: &SiteConfig,
        data: &AboutPageData,
    ) -> askama::Result<Self> {
        let tabs = AboutSection::ALL
            .into_iter()
            .map(|tab| SectionTab {
                href: format!("/about/{}", tab.slug()),
                label: tab.label(),
                active: tab == section,
            })
            .collect();

        Ok(Self {
            page_title: format!("About Us - {}", section.label()),
            hero: SectionHero::new("About Us", site.hero_image.as_deref()),
            institute_name: site.institute_name.clone(),
            tabs,
            body: render_section(section, site, data)?,
        })
    }
}

/// Render the body of one about section.
pub fn render_section(
    section: AboutSection,
    site: &SiteConfig,
    data: &AboutPageData,
) -> askama::Result<String> {
    match section {
        AboutSection::Institute => TextSection {
            heading: site.institute_name.clone(),
            body: data.about.institute.clone(),
        }
        .render(),
        AboutSection::Society => TextSection {
            heading: "About Our Society".to_string(),
            body: data.about.society.clone(),
        }
        .render(),
        AboutSection::Vision => VisionSection {
            vision: data.about.vision.clone(),
            mission: data.about.mission.clone(),
        }
        .render(),
        AboutSection::Directors => PeopleSection {
            heading: None,
            people: CardList::build(
                data.directors.iter().map(DirectorCard::new),
                EmptyState::new(Icon::Users, "No directors found."),
            )?,
        }
        .render(),
        AboutSection::Leadership => PeopleSection {
            heading: Some("Messages from Leadership"),
            people: CardList::build(
                data.leadership.iter().map(LeaderCard::new),
                EmptyState::new(Icon::MessageSquare, "Message coming soon..."),
            )?,
        }
        .render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyceum_models::{DirectorRow, LeaderRow};

    const MISSION_ITEMS: [&str; 5] = [
        "Provide quality education in arts, commerce and science with industry-relevant curriculum",
        "Foster creativity and innovation through hands-on practical training",
        "Develop professional skills and ethical values in students",
        "Establish strong industry connections for better placement opportunities",
        "Promote research and development in the field",
    ];

    fn director(id: &str, image: Option<&str>, qualification: Option<&str>) -> Director {
        Director::try_from(DirectorRow {
            id: id.to_string(),
            name: format!("Director {id}"),
            role: "Trustee".to_string(),
            qualification: qualification.map(str::to_string),
            image_id: image.map(str::to_string),
        })
        .unwrap()
    }

    fn leader(id: &str, message: Option<&str>) -> Leader {
        Leader::try_from(LeaderRow {
            id: id.to_string(),
            name: "S. Patil".to_string(),
            role: "Principal".to_string(),
            message: message.map(str::to_string),
            image_id: None,
        })
        .unwrap()
    }

    fn render(section: AboutSection, data: &AboutPageData) -> String {
        render_section(section, &SiteConfig::default(), data).unwrap()
    }

    #[test]
    fn test_section_slugs_round_trip() {
        for section in AboutSection::ALL {
            assert_eq!(section.slug().parse::<AboutSection>().unwrap(), section);
        }
        assert!("history".parse::<AboutSection>().is_err());
    }

    #[test]
    fn test_missing_mission_shows_five_items() {
        let html = render(AboutSection::Vision, &AboutPageData::default());
        for item in MISSION_ITEMS {
            assert!(html.contains(&format!("<li>{item}</li>")), "missing {item}");
        }
        assert_eq!(html.matches("<li>").count(), 5);
        assert!(html.contains("To be a premier institute for arts, commerce and science education"));
    }

    #[test]
    fn test_stored_mission_replaces_items() {
        let data = AboutPageData {
            about: AboutContent {
                mission: RichText::from_untrusted("<li>Serve the community</li>"),
                ..AboutContent::default()
            },
            ..AboutPageData::default()
        };
        let html = render(AboutSection::Vision, &data);
        assert!(html.contains("<ul class=\"bullets\"><li>Serve the community</li></ul>"));
        assert!(!html.contains(MISSION_ITEMS[0]));
    }

    #[test]
    fn test_institute_fallback() {
        let html = render(AboutSection::Institute, &AboutPageData::default());
        assert!(html.contains("Deshmukh College Of Pharmacy"));
        assert!(html.contains("Content coming soon..."));
    }

    #[test]
    fn test_directors_cards_and_placeholder_image() {
        let data = AboutPageData {
            directors: vec![
                director("d1", Some("img1"), Some("M.Pharm")),
                director("d2", None, None),
            ],
            ..AboutPageData::default()
        };
        let html = render(AboutSection::Directors, &data);

        assert_eq!(html.matches("data-key=").count(), 2);
        assert!(html.contains("src=\"/api/files/img1\""));
        assert!(html.contains("src=\"/placeholder.svg?height=128&amp;width=128\""));
        assert_eq!(html.matches("director-card__qualification").count(), 1);
    }

    #[test]
    fn test_no_directors_shows_empty_state() {
        let html = render(AboutSection::Directors, &AboutPageData::default());
        assert!(html.contains("No directors found."));
        assert!(!html.contains("data-key="));
    }

    #[test]
    fn test_no_leadership_shows_empty_state() {
        let html = render(AboutSection::Leadership, &AboutPageData::default());
        assert!(html.contains("Messages from Leadership"));
        assert!(html.contains("class=\"empty-state\""));
        assert!(html.contains("icon-message-square"));
        assert!(html.contains("Message coming soon..."));
        assert!(!html.contains("data-key="));
    }

    #[test]
    fn test_leader_message_fallback() {
        let data = AboutPageData {
            leadership: vec![leader("l1", None), leader("l2", Some("<p>Welcome all</p>"))],
            ..AboutPageData::default()
        };
        let html = render(AboutSection::Leadership, &data);

        assert!(html.contains("Messages from Leadership"));
        assert!(html.contains("Principal's Message"));
        assert!(html.contains("Message coming soon..."));
        assert!(html.contains("<p>Welcome all</p>"));
        assert!(html.contains("src=\"/placeholder-user.jpg\""));
    }

    #[test]
    fn test_page_marks_active_tab() {
        let page = AboutPage::build(
            AboutSection::Society,
            &SiteConfig::default(),
            &AboutPageData::default(),
        )
        .unwrap();
        let html = page.render().unwrap();

        assert!(html.contains("About Our Society"));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    }
}

use askama::Template;
use lyceum_config::SiteConfig;

use crate::views::SectionHero;

/// A program card on the academics page.
#[derive(Debug, Clone)]
pub struct Program {
    pub title: &'static str,
    pub image: &'static str,
    pub summary: &'static str,
    pub link_href: &'static str,
    pub link_label: &'static str,
}

pub const PROGRAMS: [Program; 2] = [
    Program {
        title: "D.Pharmacy",
        image: "/dpharm.jpg",
        summary: "A two-year diploma program approved by PCI, focusing on pharmaceutical chemistry, \
                  pharmacology, pharmacognosy, and practical training in dispensing, compounding, \
                  and community pharmacy.",
        link_href: "/academics/syllabus",
        link_label: "View Syllabus",
    },
    Program {
        title: "Practical Training",
        image: "/pharmacy-lab.jpg",
        summary: "Hands-on laboratory sessions and hospital/industry training are integral parts \
                  of the program, preparing students for real-world pharmacy practice and \
                  regulatory compliance.",
        link_href: "/academics/labs",
        link_label: "Explore Labs",
    },
];

#[derive(Template)]
#[template(path = "academics/page.html")]
pub struct AcademicsPage {
    pub page_title: String,
    pub hero: SectionHero,
    pub institute_name: String,
    pub programs: &'static [Program],
}

impl AcademicsPage {
    pub fn build(site: &SiteConfig) -> Self {
        Self {
            page_title: "Academics".to_string(),
            hero: SectionHero::new("Academics", site.hero_image.as_deref()),
            institute_name: site.institute_name.clone(),
            programs: &PROGRAMS,
        }
    }
}

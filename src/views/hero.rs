use askama::Template;

/// Banner at the top of a page: a title over an optional background image.
#[derive(Template, Debug, Clone)]
#[template(path = "components/section_hero.html")]
pub struct SectionHero {
    pub title: String,
    pub bg_image: Option<String>,
}

impl SectionHero {
    pub fn new(title: impl Into<String>, bg_image: Option<&str>) -> Self {
        Self {
            title: title.into(),
            bg_image: bg_image.map(str::to_string),
        }
    }
}

use askama::Template;
use std::fmt;

/// Icon names, rendered as `icon icon-{name}` classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Calendar,
    FileText,
    Users,
    MessageSquare,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Icon::Calendar => "calendar",
            Icon::FileText => "file-text",
            Icon::Users => "users",
            Icon::MessageSquare => "message-square",
        })
    }
}

/// Placeholder shown instead of an empty grid.
#[derive(Template, Debug, Clone)]
#[template(path = "components/empty_state.html")]
pub struct EmptyState {
    pub icon: Icon,
    pub title: &'static str,
    pub message: Option<&'static str>,
}

impl EmptyState {
    pub fn new(icon: Icon, title: &'static str) -> Self {
        Self {
            icon,
            title,
            message: None,
        }
    }

    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// A card view over one record.
pub trait CardView {
    /// Identifier of the underlying record, unique within the list.
    fn key(&self) -> &str;

    fn render_card(&self) -> askama::Result<String>;
}

/// A rendered card and the key it is listed under.
#[derive(Debug, Clone)]
pub struct Card {
    pub key: String,
    pub html: String,
}

/// Grid of cards, or the empty state when there are none.
#[derive(Template, Debug, Clone)]
#[template(path = "components/card_list.html")]
pub struct CardList {
    pub cards: Vec<Card>,
    pub empty: EmptyState,
    pub grid_class: &'static str,
}

impl CardList {
    pub const GRID: &'static str = "card-grid card-grid--three";

    /// Render one card per view, in order.
    pub fn build<C, I>(views: I, empty: EmptyState) -> askama::Result<Self>
    where
        C: CardView,
        I: IntoIterator<Item = C>,
    {
        let cards = views
            .into_iter()
            .map(|view| {
                Ok(Card {
                    key: view.key().to_string(),
                    html: view.render_card()?,
                })
            })
            .collect::<askama::Result<Vec<_>>>()?;

        Ok(Self {
            cards,
            empty,
            grid_class: Self::GRID,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

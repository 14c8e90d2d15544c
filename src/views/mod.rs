//! Reusable presentation primitives.
//!
//! - [`hero`]: the decorative section banner shared by every page
//! - [`card_list`]: a card grid that turns into an empty-state block when
//!   there is nothing to show
//! - [`format`]: display formatting shared by cards
//!
//! Values interpolated into templates are HTML-escaped. The only unescaped
//! output is [`lyceum_core::RichText`] (sanitized at ingestion), rendered
//! components, and strings that are safe by construction (file URLs built
//! from validated ids, numeric dates).

pub mod card_list;
pub mod format;
pub mod hero;

pub use card_list::{Card, CardList, CardView, EmptyState, Icon};
pub use hero::SectionHero;

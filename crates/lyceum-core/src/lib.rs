//! # Lyceum Core
//!
//! Foundational types shared by every Lyceum crate:
//!
//! - [`errors`]: handler error type with an HTML response conversion
//! - [`fallback`]: blank filtering for optional stored values
//! - [`html`]: sanitized rich text, the only markup rendered unescaped
//!
//! # Example
//!
//! ```ignore
//! use lyceum_core::{Fallback, RichText};
//!
//! let body = RichText::from_untrusted("<p>Hello</p><script>x()</script>");
//! let qualification = Some("  ".to_string()).non_blank(); // None
//! ```

pub mod errors;
pub mod fallback;
pub mod html;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use fallback::{Blank, Fallback};
pub use html::RichText;

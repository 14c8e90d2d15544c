//! # Lyceum Models
//!
//! Typed records for every collection the site reads.
//!
//! Rows are decoded from the database into `*Row` structs, validated, and
//! converted into the domain records below. Rendering code only ever sees
//! validated records:
//!
//! - [`content`]: section rich text ([`ContentBlock`], [`AboutContent`])
//! - [`exams`]: examination schedules and results ([`ExamFile`])
//! - [`people`]: directors and leadership ([`Director`], [`Leader`])
//! - [`ids`]: record and file reference identifiers

pub mod content;
pub mod error;
pub mod exams;
pub mod ids;
pub mod people;

pub use content::{AboutContent, ContentBlock, ContentRow, sections};
pub use error::ModelError;
pub use exams::{ExamFile, ExamFileRow, ExamResult, ExamSchedule};
pub use ids::{FILES_ENDPOINT, FileId, RecordId};
pub use people::{Director, DirectorRow, Leader, LeaderRow};

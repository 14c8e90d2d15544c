pub mod about;
pub mod academics;
pub mod exams;

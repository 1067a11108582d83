pub mod matching;
pub mod resume;

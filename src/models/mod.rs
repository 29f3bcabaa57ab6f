pub mod categories;
pub mod words;

pub mod flashcards;
pub mod grade;
pub mod init;
pub mod quiz;
pub mod timeline;
pub mod validate;

//! SeaORM entities for the bookkeeping schema plus the validation rules that guard them.

pub mod errors;
pub mod db;
pub mod publisher;
pub mod author;
pub mod book;
pub mod book_author;
pub mod log;

#[cfg(test)]
mod tests;

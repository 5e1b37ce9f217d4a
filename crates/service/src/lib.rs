//! Service layer providing the bookkeeping operations on top of models.
//! - Separates business rules from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Search, sort and paging go through [`query::ListQuery`].

pub mod errors;
pub mod domain;
pub mod query;
pub mod publishers;
pub mod books_service;
pub mod authors_service;
pub mod logs_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;

//! Publishers: repository abstraction, SeaORM and in-memory implementations, service.

pub mod repository;
pub mod service;

pub use service::PublishersService;

//! HTTP surface of the bookkeeping API: axum router, handlers, error mapping and startup.

pub mod errors;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;

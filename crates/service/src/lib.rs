//! Service layer for bank records.
//! - `bank::repository` defines the storage trait and the in-memory store.
//! - `bank::service` is the seam the HTTP layer depends on.
//! - Errors are shared through `errors::ServiceError`.

pub mod errors;
pub mod bank;

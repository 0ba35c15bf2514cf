//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates request validation and business rules from storage access.
//! - Reuses entity definitions from the `models` crate.
//! - Provides clear error types mapped to HTTP statuses by the server crate.

pub mod errors;
pub mod storage;
pub mod users;

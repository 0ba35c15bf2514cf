//! Storage collaborator for the users table.
//!
//! The table is a key-value map from `userId` to the full record. Mutating
//! operations other than `put` carry an existence precondition: they abort
//! with [`StoreError::ConditionFailed`] when the key is absent, which is the
//! only concurrency guarantee the service relies on (last writer wins
//! otherwise).

use async_trait::async_trait;
use thiserror::Error;

use models::user::{UserRecord, UserUpdate};

pub mod json_table;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("condition failed: {0}")]
    ConditionFailed(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("serialization error: {0}")]
    Serde(String),
}

/// Trait abstraction for the users table.
/// Implementations can be file-backed, database-backed, or remote KV.
#[async_trait]
pub trait UserTable: Send + Sync {
    /// Unconditional upsert of a full record.
    async fn put(&self, record: UserRecord) -> Result<(), StoreError>;
    /// Point lookup by id.
    async fn get(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError>;
    /// Apply assignments to an existing record and return the post-update
    /// record. Fails the existence precondition if the key is absent.
    async fn update(&self, user_id: &str, update: UserUpdate) -> Result<UserRecord, StoreError>;
    /// Remove an existing record and return its prior contents. Fails the
    /// existence precondition if the key is absent.
    async fn delete(&self, user_id: &str) -> Result<UserRecord, StoreError>;
}

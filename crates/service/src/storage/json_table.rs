use std::{collections::HashMap, path::PathBuf, sync::Arc};

use tokio::{fs, sync::RwLock};
use tracing::warn;

use models::user::{UserRecord, UserUpdate};

use super::{StoreError, UserTable};

/// JSON file-backed users table.
///
/// Persists a `HashMap<String, UserRecord>` to a single JSON file and saves
/// after every mutation. Intended for lightweight deployments where a
/// database is overkill; the async `RwLock` is held across both the mutation
/// and the save, so the existence precondition, the change, and its
/// persistence are atomic with respect to other calls on the same table.
/// A failed save rolls the in-memory entry back, keeping memory and file in
/// agreement.
#[derive(Clone)]
pub struct JsonUserTable {
    inner: Arc<RwLock<HashMap<String, UserRecord>>>,
    file_path: PathBuf,
}

impl JsonUserTable {
    /// Initialize the table from a path. Creates the file with an empty map if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<String, UserRecord> = match fs::read(&file_path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %file_path.display(), error = %e, "users table unreadable; starting empty");
                    HashMap::new()
                }
            },
            Err(_) => {
                let empty: HashMap<String, UserRecord> = HashMap::new();
                fs::write(
                    &file_path,
                    serde_json::to_vec(&empty).map_err(|e| StoreError::Serde(e.to_string()))?,
                )
                .await
                .map_err(|e| StoreError::Io(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    /// Serialize the given map to the table file. Callers hold the write
    /// lock, so saves never interleave.
    async fn save(&self, map: &HashMap<String, UserRecord>) -> Result<(), StoreError> {
        let data = serde_json::to_vec(map).map_err(|e| StoreError::Serde(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserTable for JsonUserTable {
    async fn put(&self, record: UserRecord) -> Result<(), StoreError> {
        let key = record.user_id.clone();
        let mut map = self.inner.write().await;
        let prior = map.insert(key.clone(), record);
        if let Err(e) = self.save(&map).await {
            match prior {
                Some(p) => map.insert(key, p),
                None => map.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError> {
        let map = self.inner.read().await;
        Ok(map.get(user_id).cloned())
    }

    async fn update(&self, user_id: &str, update: UserUpdate) -> Result<UserRecord, StoreError> {
        let mut map = self.inner.write().await;
        let record = map
            .get_mut(user_id)
            .ok_or_else(|| StoreError::ConditionFailed(format!("user {user_id} does not exist")))?;
        let prior = record.clone();
        update.apply_to(record);
        let updated = record.clone();
        if let Err(e) = self.save(&map).await {
            map.insert(user_id.to_string(), prior);
            return Err(e);
        }
        Ok(updated)
    }

    async fn delete(&self, user_id: &str) -> Result<UserRecord, StoreError> {
        let mut map = self.inner.write().await;
        let removed = map
            .remove(user_id)
            .ok_or_else(|| StoreError::ConditionFailed(format!("user {user_id} does not exist")))?;
        if let Err(e) = self.save(&map).await {
            map.insert(user_id.to_string(), removed);
            return Err(e);
        }
        Ok(removed)
    }
}

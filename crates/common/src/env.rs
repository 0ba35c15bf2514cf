//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

/// Ensure the parent directory of the users table file exists.
pub async fn ensure_env(table_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(table_path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

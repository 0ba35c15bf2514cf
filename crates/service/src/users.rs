use serde::Deserialize;

use models::date;
use models::user::{UserRecord, UserUpdate};

use crate::errors::ServiceError;
use crate::storage::UserTable;

/// Creation input. Both fields are required; `Option` here only lets the
/// handler report a missing field as a 400 instead of a deserialization
/// rejection.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewUser {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

/// Update input. At least one field must be a non-empty string.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserChanges {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

/// Create a user: assign a fresh id and creation stamp, then upsert.
/// No existence check; id collisions are treated as negligible.
pub async fn create_user(table: &dyn UserTable, input: NewUser) -> Result<UserRecord, ServiceError> {
    let (Some(user_name), Some(user_email)) = (input.user_name, input.user_email) else {
        return Err(ServiceError::InvalidInput(
            "Missing required params from body".into(),
        ));
    };

    let record = UserRecord::create(&user_name, &user_email);
    table.put(record.clone()).await?;
    Ok(record)
}

/// Point lookup by id.
pub async fn get_user(table: &dyn UserTable, user_id: &str) -> Result<UserRecord, ServiceError> {
    let found = table.get(user_id).await?;
    found.ok_or_else(|| ServiceError::not_found("user"))
}

/// Update an existing user. Always writes a fresh `userUpdated` stamp;
/// name/email are applied only when provided and non-empty.
pub async fn update_user(
    table: &dyn UserTable,
    user_id: &str,
    changes: UserChanges,
) -> Result<UserRecord, ServiceError> {
    let user_name = changes.user_name.filter(|s| !s.is_empty());
    let user_email = changes.user_email.filter(|s| !s.is_empty());
    if user_name.is_none() && user_email.is_none() {
        return Err(ServiceError::InvalidInput(
            "Please use the allowed parameters only".into(),
        ));
    }

    let update = UserUpdate {
        user_name,
        user_email,
        user_updated: date::current_date_stamp(),
    };
    let updated = table.update(user_id, update).await?;
    Ok(updated)
}

/// Delete an existing user, returning the removed record.
pub async fn delete_user(table: &dyn UserTable, user_id: &str) -> Result<UserRecord, ServiceError> {
    let removed = table.delete(user_id).await?;
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json_table::JsonUserTable;

    async fn temp_table() -> std::sync::Arc<JsonUserTable> {
        let tmp = std::env::temp_dir().join(format!("users_svc_{}.json", uuid::Uuid::new_v4()));
        JsonUserTable::new(tmp).await.expect("table init")
    }

    #[tokio::test]
    async fn create_requires_both_fields() {
        let table = temp_table().await;
        let err = create_user(
            table.as_ref(),
            NewUser { user_name: None, user_email: Some("a@x.com".into()) },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(msg) if msg == "Missing required params from body"));
    }

    #[tokio::test]
    async fn create_ids_are_unique_and_round_trip_reads_back() -> Result<(), anyhow::Error> {
        let table = temp_table().await;
        let input = NewUser {
            user_name: Some("Ann".into()),
            user_email: Some("ann@x.com".into()),
        };

        let a = create_user(table.as_ref(), input.clone()).await?;
        let b = create_user(table.as_ref(), input).await?;
        assert_ne!(a.user_id, b.user_id);

        let found = get_user(table.as_ref(), &a.user_id).await?;
        assert_eq!(found.user_name, "Ann");
        assert_eq!(found.user_email, "ann@x.com");
        assert_eq!(found.user_created, a.user_created);
        Ok(())
    }

    #[tokio::test]
    async fn update_with_only_name_leaves_email_untouched() -> Result<(), anyhow::Error> {
        let table = temp_table().await;
        let rec = create_user(
            table.as_ref(),
            NewUser { user_name: Some("Ann".into()), user_email: Some("ann@x.com".into()) },
        )
        .await?;

        let updated = update_user(
            table.as_ref(),
            &rec.user_id,
            UserChanges { user_name: Some("Anna".into()), user_email: None },
        )
        .await?;
        assert_eq!(updated.user_name, "Anna");
        assert_eq!(updated.user_email, "ann@x.com");
        assert!(updated.user_updated.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_empty_or_absent_fields() {
        let table = temp_table().await;
        let changes = UserChanges { user_name: Some(String::new()), user_email: None };
        let err = update_user(table.as_ref(), "whatever", changes).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn missing_records_map_to_not_found() {
        let table = temp_table().await;
        assert!(matches!(
            get_user(table.as_ref(), "missing").await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            delete_user(table.as_ref(), "missing").await,
            Err(ServiceError::NotFound(_))
        ));
        let changes = UserChanges { user_name: Some("X".into()), user_email: None };
        assert!(matches!(
            update_user(table.as_ref(), "missing", changes).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_returns_prior_contents_once() -> Result<(), anyhow::Error> {
        let table = temp_table().await;
        let rec = create_user(
            table.as_ref(),
            NewUser { user_name: Some("Bob".into()), user_email: Some("bob@x.com".into()) },
        )
        .await?;

        let removed = delete_user(table.as_ref(), &rec.user_id).await?;
        assert_eq!(removed, rec);
        assert!(matches!(
            delete_user(table.as_ref(), &rec.user_id).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date;

/// Stored user record. Field names follow the wire contract (`userId`,
/// `userName`, ...), which is also the on-disk table format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_updated: Option<String>,
}

impl UserRecord {
    /// Build a fresh record: server-side id, creation stamp, no update stamp.
    pub fn create(user_name: &str, user_email: &str) -> Self {
        Self {
            user_id: Uuid::new_v4().to_string(),
            user_name: user_name.to_string(),
            user_email: user_email.to_string(),
            user_created: date::current_date_stamp(),
            user_updated: None,
        }
    }
}

/// Assignments applied by an update: the update stamp is always written,
/// name/email only when provided.
#[derive(Clone, Debug, PartialEq)]
pub struct UserUpdate {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_updated: String,
}

impl UserUpdate {
    pub fn apply_to(&self, record: &mut UserRecord) {
        if let Some(name) = &self.user_name {
            record.user_name = name.clone();
        }
        if let Some(email) = &self.user_email {
            record.user_email = email.clone();
        }
        record.user_updated = Some(self.user_updated.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_id_and_creation_stamp() {
        let a = UserRecord::create("Ann", "ann@x.com");
        let b = UserRecord::create("Ann", "ann@x.com");
        assert!(!a.user_id.is_empty());
        assert_ne!(a.user_id, b.user_id);
        assert!(date::is_date_stamp(&a.user_created));
        assert!(a.user_updated.is_none());
    }

    #[test]
    fn wire_names_are_camel_case_and_skip_absent_update_stamp() {
        let rec = UserRecord::create("Ann", "ann@x.com");
        let json = serde_json::to_value(&rec).expect("serialize");
        assert_eq!(json["userName"], "Ann");
        assert_eq!(json["userEmail"], "ann@x.com");
        assert!(json.get("userUpdated").is_none());
        assert!(json.get("userCreated").is_some());
    }

    #[test]
    fn apply_to_touches_only_provided_fields() {
        let mut rec = UserRecord::create("Ann", "ann@x.com");
        let upd = UserUpdate {
            user_name: None,
            user_email: Some("ann2@x.com".into()),
            user_updated: date::current_date_stamp(),
        };
        upd.apply_to(&mut rec);
        assert_eq!(rec.user_name, "Ann");
        assert_eq!(rec.user_email, "ann2@x.com");
        assert!(rec.user_updated.is_some());
    }
}

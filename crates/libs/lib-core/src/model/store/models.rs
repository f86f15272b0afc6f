use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// User document as stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime,
    pub last_login: Option<DateTime>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Bson};

    fn sample_user() -> User {
        User {
            id: None,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: DateTime::now(),
            last_login: None,
            is_active: true,
        }
    }

    #[test]
    fn test_unsaved_user_omits_id() {
        let doc = bson::to_document(&sample_user()).expect("User should serialize to BSON");

        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("username").unwrap(), "alice");
        assert!(matches!(doc.get("created_at"), Some(Bson::DateTime(_))));
    }

    #[test]
    fn test_saved_user_round_trips() {
        let mut user = sample_user();
        user.id = Some(ObjectId::new());

        let doc = bson::to_document(&user).expect("User should serialize to BSON");
        let back: User = bson::from_document(doc).expect("BSON should deserialize to User");

        assert_eq!(back.id, user.id);
        assert_eq!(back.email, user.email);
        assert!(back.is_active);
    }
}

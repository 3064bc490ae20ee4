//! User record and its sanitized projection.

use serde::Serialize;
use uuid::Uuid;

/// A user row as stored in the users table (or the seed dataset).
///
/// Read-only from this service's perspective; rows are created externally by
/// seed scripts or migrations. `password` holds either a bcrypt hash or, for
/// seed data, a legacy plaintext value.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The projection of a user that is safe to hand back to the framework.
///
/// The password field does not exist on this type, so the sanitization
/// invariant holds structurally rather than by convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&UserRecord> for SanitizedUser {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            name: "User".to_string(),
            email: "user@nextmail.com".to_string(),
            password: "123456".to_string(),
        }
    }

    #[test]
    fn sanitized_user_carries_identity_fields() {
        let user = sample_user();
        let sanitized = SanitizedUser::from(&user);

        assert_eq!(sanitized.id, user.id);
        assert_eq!(sanitized.name, "User");
        assert_eq!(sanitized.email, "user@nextmail.com");
    }

    #[test]
    fn sanitized_user_serialization_never_contains_password() {
        let user = sample_user();
        let sanitized = SanitizedUser::from(&user);

        let json = serde_json::to_value(&sanitized).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert_eq!(object.len(), 3);
    }
}

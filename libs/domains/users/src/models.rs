use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    /// Hex identifier assigned by the store
    pub id: String,
    pub username: String,
    pub email: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub password_hash: String,
}

/// Body of `POST /users`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateUserDto {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "secret123")]
    pub password: String,
    #[schema(example = "a@x.com")]
    pub email: String,
}

/// Body of `PUT /users/{id}`. Empty fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateUserDto {
    /// Taken from the path
    #[serde(skip)]
    pub id: String,
    pub email: String,
    pub username: String,
    /// Replacement password, written without checking the current one
    pub password: String,
    /// Current password, required when `new_password` differs from it
    pub old_password: String,
    pub new_password: String,
}

impl From<CreateUserDto> for User {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            id: String::new(),
            username: dto.username,
            email: dto.email,
            password_hash: String::new(),
        }
    }
}

impl UpdateUserDto {
    /// Whether the caller asked to change the password through old/new fields
    pub fn wants_password_change(&self) -> bool {
        self.old_password != self.new_password && !self.new_password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_json_hides_password_hash() {
        let user = User {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$v=19$...".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"id": "65a1f0c2e4b0a1b2c3d4e5f6", "username": "alice", "email": "a@x.com"})
        );
    }

    #[test]
    fn test_update_dto_missing_fields_default_to_empty() {
        let dto: UpdateUserDto = serde_json::from_value(json!({"email": "b@x.com"})).unwrap();
        assert_eq!(dto.email, "b@x.com");
        assert!(dto.username.is_empty());
        assert!(dto.password.is_empty());
        assert!(dto.id.is_empty());
    }

    #[test]
    fn test_update_dto_ignores_id_in_body() {
        let dto: UpdateUserDto = serde_json::from_value(json!({"id": "other"})).unwrap();
        assert!(dto.id.is_empty());
    }

    #[test]
    fn test_wants_password_change() {
        let mut dto = UpdateUserDto::default();
        assert!(!dto.wants_password_change());

        dto.old_password = "same".to_string();
        dto.new_password = "same".to_string();
        assert!(!dto.wants_password_change());

        dto.new_password = String::new();
        assert!(!dto.wants_password_change());

        dto.new_password = "fresh".to_string();
        assert!(dto.wants_password_change());
    }
}

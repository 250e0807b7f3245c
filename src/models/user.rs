use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to every newly created user. Clients cannot pick a role
/// through the signup request.
pub const DEFAULT_ROLE: &str = "DEFAULT";

/// A persisted user account.
///
/// Note:
/// - The `_id` field is renamed to `id` here, stored as a `String` (UUIDv4).
/// - `id`, `role`, and `is_active` are always server-assigned; this type is
///   never deserialized from client input (clients send a `NewUserRequest`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user, generated at creation.
    /// We rename the field to `_id` when (de)serializing to match MongoDB’s default.
    #[serde(rename = "_id")]
    pub id: String,

    /// The username, unique across the collection.
    pub username: String,

    /// The user’s email address.
    pub email: String,

    /// The user’s bcrypt-hashed password.
    pub password: String,

    /// The user’s given name.
    pub given_name: String,

    /// The user’s surname.
    pub surname: String,

    /// Whether the account is active. Forced to `true` at creation.
    pub is_active: bool,

    /// The user’s role. Forced to [`DEFAULT_ROLE`] at creation.
    pub role: String,
}

impl User {
    /// Builds a new user with a fresh random id, the default role, and the
    /// active flag forced on. The password must already be hashed.
    pub fn new(
        username: String,
        email: String,
        hashed_password: String,
        given_name: String,
        surname: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password: hashed_password,
            given_name,
            surname,
            is_active: true,
            role: DEFAULT_ROLE.to_string(),
        }
    }
}

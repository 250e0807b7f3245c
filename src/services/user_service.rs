// src/services/user_service.rs

use std::sync::{Arc, LazyLock};

use bcrypt::DEFAULT_COST;
use regex::Regex;

use crate::controllers::user_controller::NewUserRequest;
use crate::daos::user_dao::UserDao;
use crate::errors::UserError;
use crate::models::user::User;

/// Usernames: letters, digits, dots, underscores, 8-20 characters total.
/// The remaining username rules (no doubled separators, no separator at the
/// edges) don't fit a single pattern without lookaheads, so they are checked
/// separately in `is_valid_username`.
static USERNAME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._]{8,20}$").expect("username pattern is valid")
});

/// Two consecutive separator characters anywhere in the username.
static DOUBLED_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[._]{2}").expect("separator pattern is valid"));

/// Passwords may only contain letters, digits, and the special set below,
/// with a minimum of 8 characters.
static PASSWORD_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9@$!%*#?&]{8,}$").expect("password pattern is valid")
});

/// Emails: `local@domain.tld`, local/domain limited to word characters,
/// hyphens, and dots, top-level segment 2-5 letters.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z]{2,5}$")
        .expect("email pattern is valid")
});

/// Characters that count as "special" for password complexity.
const PASSWORD_SPECIALS: &str = "@$!%*#?&";

/// Validates signup requests and persists well-formed users.
///
/// The DAO is injected at construction so the service can run against the
/// real collection in production and an in-memory double in tests. A request
/// is sent instead of the entity itself since there are some fields the
/// client must not control (id, role, active flag).
pub struct UserService {
    user_dao: Arc<dyn UserDao>,
}

impl UserService {
    pub fn new(user_dao: Arc<dyn UserDao>) -> Self {
        Self { user_dao }
    }

    /// Registers a new user, or rejects the request with the first violated
    /// rule. Rules are checked in a fixed order and never aggregated.
    ///
    /// On success the stored user gets a fresh random id, a bcrypt-hashed
    /// password, `is_active = true`, and the default role. A failed request
    /// performs no write.
    pub async fn register(&self, request: NewUserRequest) -> Result<(), UserError> {
        let usernames = self.user_dao.find_all_usernames().await?;

        if !is_valid_username(&request.username) {
            return Err(UserError::invalid("Username must be 8-20 characters long"));
        }
        // Case-sensitive exact match. The fetch-then-contains check is not
        // transactional: two concurrent signups with the same username can
        // both pass it.
        if usernames.contains(&request.username) {
            return Err(UserError::invalid("Username already exists"));
        }
        if !is_valid_password(&request.password1) {
            return Err(UserError::invalid(
                "Passwords must be a minimum of 8 characters, with at least \
                 one letter, one number, and one special character",
            ));
        }
        if request.password1 != request.password2 {
            return Err(UserError::invalid("Passwords do not match"));
        }
        if !is_valid_email(&request.email) {
            return Err(UserError::invalid("Invalid email"));
        }

        // The plain password never reaches the store.
        let hashed = bcrypt::hash(&request.password1, DEFAULT_COST).map_err(|e| {
            mongodb::error::Error::from(std::io::Error::new(
                std::io::ErrorKind::Other,
                e.to_string(),
            ))
        })?;

        let user = User::new(
            request.username,
            request.email,
            hashed,
            request.given_name,
            request.surname,
        );
        self.user_dao.save(user).await?;
        Ok(())
    }
}

/// 8-20 characters from `[A-Za-z0-9._]`, no two consecutive dots or
/// underscores, and no dot or underscore at either end.
fn is_valid_username(username: &str) -> bool {
    USERNAME_SHAPE.is_match(username)
        && !DOUBLED_SEPARATOR.is_match(username)
        && !username.starts_with(['.', '_'])
        && !username.ends_with(['.', '_'])
}

/// Minimum 8 characters, at least one letter, one digit, and one of
/// `@$!%*#?&`, with nothing outside those classes.
fn is_valid_password(password: &str) -> bool {
    PASSWORD_SHAPE.is_match(password)
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

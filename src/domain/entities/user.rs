use serde_json::{json, Value};

use crate::wire::field::{as_object, opt_str, require_int, require_str};
use crate::wire::DecodeError;

/// Avatar path served for accounts that never uploaded one.
///
/// The single place this default lives; both encode paths that substitute
/// it go through here so the two cannot drift apart.
pub fn default_avatar_path() -> &'static str {
    "/avatar/default.jpg"
}

/// Platform account.
///
/// `balance` is account credit in the smallest currency unit; the account
/// service keeps it non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub mail: String,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub balance: i64,
}

impl User {
    /// Serialize to the general client-facing view.
    ///
    /// `avatar` falls back to [`default_avatar_path`] when unset and
    /// `description` is emitted as explicit `null` when absent. `balance`
    /// is deliberately excluded from this view, while [`User::from_wire`]
    /// still requires it: the mapping is one-directional and lossy, not a
    /// round-trip codec.
    pub fn to_wire(&self) -> Value {
        json!({
            "username": self.username,
            "mail": self.mail,
            "avatar": self.avatar.as_deref().unwrap_or_else(|| default_avatar_path()),
            "description": self.description,
        })
    }

    /// Deserialize from the wire format.
    ///
    /// `username`, `mail` and `balance` are required; `avatar` and
    /// `description` tolerate an absent key or `null`.
    pub fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        Ok(User {
            username: require_str(obj, "username")?.to_owned(),
            mail: require_str(obj, "mail")?.to_owned(),
            avatar: opt_str(obj, "avatar")?,
            description: opt_str(obj, "description")?,
            balance: require_int(obj, "balance")?,
        })
    }
}

/// Authorization-facing read view joining a [`User`] with its role names.
///
/// Built on demand for responses, never stored and never decoded, so it has
/// no `from_wire`. Role order and duplicates are preserved as given; this
/// layer performs no dedup or sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRole {
    pub user: User,
    pub roles: Vec<String>,
}

impl UserRole {
    pub fn new(user: User, roles: Vec<String>) -> Self {
        Self { user, roles }
    }

    /// Serialize to the wire format: the user's display fields flattened
    /// alongside the `roles` array. Unlike [`User::to_wire`], this
    /// privileged view does include `balance`.
    pub fn to_wire(&self) -> Value {
        json!({
            "username": self.user.username,
            "mail": self.user.mail,
            "avatar": self.user.avatar.as_deref().unwrap_or_else(|| default_avatar_path()),
            "description": self.user.description,
            "balance": self.user.balance,
            "roles": self.roles,
        })
    }
}

//! The domain entity a view model projects.

use async_resource_lens_derive::Lenses;
use url::Url;

/// A user as supplied by the surrounding application.
///
/// `User` carries identity; two users are the same user exactly when all their
/// fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Lenses)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Stable identifier.
    pub id: u64,
    /// Name shown to people.
    pub name: String,
    /// Where the avatar image lives.
    pub avatar_url: Url,
}

impl User {
    /// Creates a user.
    pub fn new(id: u64, name: impl Into<String>, avatar_url: Url) -> Self {
        Self {
            id,
            name: name.into(),
            avatar_url,
        }
    }
}
